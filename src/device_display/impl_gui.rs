use crate::device_display::interface::{DeviceDisplay, PANEL_CHARS_PER_LINE, PANEL_LINES};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

const ROWS: usize = PANEL_LINES as usize;
const COLS: usize = PANEL_CHARS_PER_LINE as usize;

#[derive(Clone)]
struct PanelWindow {
    display_buffer: Arc<Mutex<[[char; COLS]; ROWS]>>,
    line_colors: Arc<Mutex<[Option<(u8, u8, u8)>; ROWS]>>,
}

impl eframe::App for PanelWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let display_buffer = *self.display_buffer.lock().unwrap();
        let line_colors = *self.line_colors.lock().unwrap();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.add_space(10.0);

                for (row, chars) in display_buffer.iter().enumerate() {
                    let text: String = chars.iter().collect();
                    let color = match line_colors[row] {
                        Some((r, g, b)) => egui::Color32::from_rgb(r, g, b),
                        None => egui::Color32::LIGHT_GRAY,
                    };
                    ui.label(egui::RichText::new(text).monospace().color(color).size(16.0));
                }
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

pub struct DeviceDisplayGui {
    display_buffer: Arc<Mutex<[[char; COLS]; ROWS]>>,
    line_colors: Arc<Mutex<[Option<(u8, u8, u8)>; ROWS]>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            display_buffer: Arc::new(Mutex::new([[' '; COLS]; ROWS])),
            line_colors: Arc::new(Mutex::new([None; ROWS])),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let display_buffer = self.display_buffer.clone();
        let line_colors = self.line_colors.clone();

        // The window blocks its own thread until closed
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([560.0, 280.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = PanelWindow {
                display_buffer,
                line_colors,
            };

            let _ = eframe::run_native("Smart Waste Sorter", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.display_buffer.lock().unwrap() = [[' '; COLS]; ROWS];
        *self.line_colors.lock().unwrap() = [None; ROWS];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }

        let mut buffer = self.display_buffer.lock().unwrap();
        buffer[line as usize] = [' '; COLS];
        for (i, c) in text.chars().take(COLS).enumerate() {
            buffer[line as usize][i] = c;
        }
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
        self.line_colors.lock().unwrap()[line as usize] = Some(color);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        // The window repaints on its own timer
        Ok(())
    }
}
