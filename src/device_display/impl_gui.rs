use crate::device_display::interface::{
    fit_line, DeviceDisplay, DISPLAY_CHARS_PER_LINE, DISPLAY_LINES,
};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

type DisplayBuffer = [[char; DISPLAY_CHARS_PER_LINE]; DISPLAY_LINES as usize];

#[derive(Clone)]
struct LabelWindow {
    display_buffer: Arc<Mutex<DisplayBuffer>>,
}

impl eframe::App for LabelWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rows: Vec<String> = match self.display_buffer.lock() {
            Ok(buffer) => buffer.iter().map(|row| row.iter().collect()).collect(),
            Err(_) => return,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                let rect = ui.available_rect_before_wrap();
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_rgb(20, 20, 20));
                ui.painter().rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 100, 100)),
                );

                for (i, text) in rows.iter().enumerate() {
                    // Status line in white, label in the bubble's orange.
                    let color = if i == 0 {
                        egui::Color32::WHITE
                    } else {
                        egui::Color32::from_rgb(255, 165, 0)
                    };
                    ui.label(egui::RichText::new(text).monospace().color(color).size(20.0));
                }
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    display_buffer: Arc<Mutex<DisplayBuffer>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            display_buffer: Arc::new(Mutex::new(
                [[' '; DISPLAY_CHARS_PER_LINE]; DISPLAY_LINES as usize],
            )),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let display_buffer = self.display_buffer.clone();

        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([400.0, 200.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = LabelWindow { display_buffer };

            // Blocks this thread until the window is closed
            let _ = eframe::run_native(
                "Car Label Finder",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= DISPLAY_LINES {
            return Err("Invalid line number".into());
        }

        let mut buffer = self.display_buffer.lock().map_err(|e| e.to_string())?;
        buffer[line as usize] = fit_line(text);
        Ok(())
    }
}
