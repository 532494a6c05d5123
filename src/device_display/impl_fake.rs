use crate::device_display::interface::{DeviceDisplay, DISPLAY_LINES};
use std::error::Error;

/// Keeps the last text written to each line so tests can read it back.
#[derive(Debug, Default)]
pub struct DeviceDisplayFake {
    lines: Vec<String>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new(); DISPLAY_LINES as usize],
        }
    }

    pub fn line(&self, line: u8) -> &str {
        self.lines
            .get(line as usize)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= DISPLAY_LINES {
            return Err("Invalid line number".into());
        }
        self.lines[line as usize] = text.to_string();
        Ok(())
    }
}
