use std::error::Error;

pub const DISPLAY_LINES: u8 = 2;
pub const DISPLAY_CHARS_PER_LINE: usize = 16;

/// Two-line heads-up text display: loop status on top, best label below.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based), truncated to the line width.
    /// Returns error if the line number is invalid.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}

pub fn fit_line(text: &str) -> [char; DISPLAY_CHARS_PER_LINE] {
    let mut row = [' '; DISPLAY_CHARS_PER_LINE];
    for (i, c) in text.chars().take(DISPLAY_CHARS_PER_LINE).enumerate() {
        row[i] = c;
    }
    row
}
