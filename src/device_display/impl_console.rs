use crate::device_display::interface::{
    fit_line, DeviceDisplay, DISPLAY_CHARS_PER_LINE, DISPLAY_LINES,
};
use std::error::Error;

pub struct DeviceDisplayConsole {
    display_buffer: [[char; DISPLAY_CHARS_PER_LINE]; DISPLAY_LINES as usize],
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [[' '; DISPLAY_CHARS_PER_LINE]; DISPLAY_LINES as usize],
        }
    }

    fn render_display(&self) {
        let border = "─".repeat(DISPLAY_CHARS_PER_LINE);
        println!("┌{}┐", border);
        for row in &self.display_buffer {
            println!("│{}│", row.iter().collect::<String>());
        }
        println!("└{}┘", border);
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= DISPLAY_LINES {
            return Err("Invalid line number".into());
        }

        let row = fit_line(text);
        if self.display_buffer[line as usize] == row {
            return Ok(());
        }

        self.display_buffer[line as usize] = row;
        self.render_display();
        Ok(())
    }
}
