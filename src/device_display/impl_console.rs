use crate::device_display::interface::{DeviceDisplay, PANEL_CHARS_PER_LINE, PANEL_LINES};
use std::error::Error;

const ROWS: usize = PANEL_LINES as usize;
const COLS: usize = PANEL_CHARS_PER_LINE as usize;

pub struct DeviceDisplayConsole {
    display_buffer: [[char; COLS]; ROWS],
    last_flushed: Option<[[char; COLS]; ROWS]>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [[' '; COLS]; ROWS],
            last_flushed: None,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(COLS));
        for row in &self.display_buffer {
            println!("│{}│", row.iter().collect::<String>());
        }
        println!("└{}┘", "─".repeat(COLS));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = [[' '; COLS]; ROWS];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }

        self.display_buffer[line as usize] = [' '; COLS];
        for (i, c) in text.chars().take(COLS).enumerate() {
            self.display_buffer[line as usize][i] = c;
        }

        Ok(())
    }

    fn set_line_color(
        &mut self,
        line: u8,
        _color: (u8, u8, u8),
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        // No color support on the plain console
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_flushed == Some(self.display_buffer) {
            return Ok(());
        }
        self.last_flushed = Some(self.display_buffer);
        self.render_display();
        Ok(())
    }
}
