use std::error::Error;

pub const PANEL_LINES: u8 = 10;
pub const PANEL_CHARS_PER_LINE: u8 = 48;

/// A fixed-size character panel for presenting sorter output
pub trait DeviceDisplay: Send + Sync {
    /// Bring up the display hardware or window
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Clear all text and reset line colors
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a specific line (0-based index)
    /// Returns error if the line number is out of range
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Tint a line; displays without color support may ignore this
    fn set_line_color(
        &mut self,
        line: u8,
        color: (u8, u8, u8),
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Present everything written since the last flush
    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> u8 {
        PANEL_LINES
    }

    fn chars_per_line(&self) -> u8 {
        PANEL_CHARS_PER_LINE
    }
}
