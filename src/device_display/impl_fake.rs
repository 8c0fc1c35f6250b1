use crate::device_display::interface::{DeviceDisplay, PANEL_LINES};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::Arc;

#[allow(dead_code)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    lines: Vec<String>,
    line_colors: Vec<Option<(u8, u8, u8)>>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            lines: vec![String::new(); PANEL_LINES as usize],
            line_colors: vec![None; PANEL_LINES as usize],
        }
    }

    pub fn line(&self, line: u8) -> String {
        self.lines[line as usize].clone()
    }

    pub fn line_color(&self, line: u8) -> Option<(u8, u8, u8)> {
        self.line_colors[line as usize]
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::clear()")?;
        self.lines = vec![String::new(); PANEL_LINES as usize];
        self.line_colors = vec![None; PANEL_LINES as usize];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.logger
            .info(&format!("DeviceDisplayFake::write_line({}, {})", line, text))?;
        self.lines[line as usize] = text.to_string();
        Ok(())
    }

    fn set_line_color(
        &mut self,
        line: u8,
        color: (u8, u8, u8),
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.line_colors[line as usize] = Some(color);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
