use super::core::{ClassifierState, Model, SourceState};
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::waste_mapper::mapper::WasteCategory;
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>, config: Config) -> Self {
        Self {
            device_display,
            config,
        }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut display = self.device_display.lock().unwrap();

        display.clear()?;

        match model {
            Model::Initializing { boundary_states } => {
                match boundary_states.classifier {
                    ClassifierState::Loading => display.write_line(0, "Loading classifier...")?,
                    ClassifierState::Ready => display.write_line(0, "Classifier ready")?,
                }
                match boundary_states.source {
                    SourceState::Disconnected => display.write_line(1, "Dropzone connecting...")?,
                    SourceState::Connected => display.write_line(1, "Dropzone ready")?,
                }
            }
            Model::ClassifierOffline => {
                display.write_line(0, "Classifier unavailable")?;
                display.write_line(1, "Image classification is disabled")?;
            }
            Model::AwaitingImage => {
                display.write_line(0, "Drop an image to classify")?;
                display.write_line(
                    1,
                    &format!("Watching {}", self.config.dropzone_dir.display()),
                )?;
            }
            Model::Classifying { path, started } => {
                if started.elapsed() > Duration::from_secs(2) {
                    display.write_line(0, "Still analyzing...")?;
                } else {
                    display.write_line(0, "Analyzing image...")?;
                }
                display.write_line(1, &file_name(path))?;
            }
            Model::ShowingResults {
                path,
                results,
                top_category,
                advice,
                shown_at,
            } => {
                display.write_line(0, &format!("Results for {}", file_name(path)))?;

                for (i, result) in results.iter().take(3).enumerate() {
                    let percent = (result.probability * 100.0).round() as u32;
                    let line = 2 + i as u8;
                    display.set_line_color(line, category_color(result.category))?;
                    display.write_line(
                        line,
                        &format!(
                            "{:>3}% {} {} [{}]",
                            percent,
                            bar(percent, 10),
                            result.label,
                            result.category.as_str().to_uppercase()
                        ),
                    )?;
                }

                match results.first() {
                    Some(top) => display.write_line(
                        5,
                        &format!(
                            "How to dispose ({}, {:.0}% match)",
                            top_category,
                            top.confidence * 100.0
                        ),
                    )?,
                    None => display.write_line(5, &format!("How to dispose ({})", top_category))?,
                }

                let width = display.chars_per_line() as usize;
                for (i, line) in wrap_text(advice.instruction, width).iter().take(2).enumerate() {
                    display.write_line(6 + i as u8, line)?;
                }

                let ratio = (shown_at.elapsed().as_secs_f32()
                    / self.config.impact_reveal_duration.as_secs_f32())
                .min(1.0);
                let revealed = (advice.impact_percent as f32 * ratio).round() as u32;
                display.set_line_color(8, impact_bar_color(advice.impact_percent))?;
                display.write_line(8, &format!("Impact {} {}%", bar(revealed, 10), revealed))?;
                display.write_line(9, advice.impact_text)?;
            }
            Model::ClassificationFailed { message, failed_at } => {
                display.set_line_color(0, (239, 68, 68))?;
                display.write_line(0, "Classification error")?;

                let width = display.chars_per_line() as usize;
                for (i, line) in wrap_text(message, width).iter().take(2).enumerate() {
                    display.write_line(1 + i as u8, line)?;
                }

                if failed_at.elapsed() > Duration::from_secs(2) {
                    display.write_line(4, "Drop another image to try again")?;
                }
            }
        }

        display.flush()?;

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string()
}

fn bar(percent: u32, width: usize) -> String {
    let filled = ((percent as usize * width) / 100).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn category_color(category: WasteCategory) -> (u8, u8, u8) {
    match category {
        WasteCategory::Plastic => (59, 130, 246),
        WasteCategory::Metal => (99, 102, 241),
        WasteCategory::Paper => (234, 179, 8),
        WasteCategory::Organic => (22, 163, 74),
        WasteCategory::Glass => (249, 115, 22),
        WasteCategory::Electronic => (168, 85, 247),
        WasteCategory::Hazardous => (239, 68, 68),
        WasteCategory::General => (107, 114, 128),
    }
}

fn impact_bar_color(percent: u8) -> (u8, u8, u8) {
    if percent > 80 {
        (22, 163, 74)
    } else if percent > 60 {
        (34, 197, 94)
    } else if percent > 40 {
        (234, 179, 8)
    } else {
        (239, 68, 68)
    }
}
