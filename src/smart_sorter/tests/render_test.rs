#[cfg(test)]
mod render_test {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crate::config::Config;
    use crate::device_display::impl_fake::DeviceDisplayFake;
    use crate::device_display::interface::DeviceDisplay;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::smart_sorter::core::Model;
    use crate::smart_sorter::render::Render;
    use crate::waste_mapper::disposal::advice_for;
    use crate::waste_mapper::mapper::{CategorizedClassification, WasteCategory};

    fn fixture() -> (Render, Arc<Mutex<DeviceDisplayFake>>) {
        let config = Config::default();
        let logger = Arc::new(LoggerConsole::new(config.logger_timezone));
        let fake = Arc::new(Mutex::new(DeviceDisplayFake::new(logger)));
        let display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = fake.clone();
        (Render::new(display, config), fake)
    }

    #[test]
    fn test_render_awaiting_image() {
        let (render, fake) = fixture();

        render.render(&Model::AwaitingImage).unwrap();

        let fake = fake.lock().unwrap();
        assert_eq!(fake.line(0), "Drop an image to classify");
        assert!(fake.line(1).starts_with("Watching"));
    }

    #[test]
    fn test_render_results() {
        let (render, fake) = fixture();

        let model = Model::ShowingResults {
            path: PathBuf::from("bottle.png"),
            results: vec![
                CategorizedClassification {
                    label: "water bottle".to_string(),
                    probability: 0.82,
                    category: WasteCategory::Plastic,
                    confidence: 0.9,
                },
                CategorizedClassification {
                    label: "rock".to_string(),
                    probability: 0.11,
                    category: WasteCategory::General,
                    confidence: 0.11,
                },
            ],
            top_category: WasteCategory::Plastic,
            advice: advice_for(WasteCategory::Plastic),
            shown_at: Instant::now() - Duration::from_secs(5),
        };

        render.render(&model).unwrap();

        let fake = fake.lock().unwrap();
        assert_eq!(fake.line(0), "Results for bottle.png");
        assert!(fake.line(2).contains("82%"));
        assert!(fake.line(2).contains("water bottle"));
        assert!(fake.line(2).contains("[PLASTIC]"));
        assert!(fake.line(3).contains("[GENERAL]"));
        assert!(fake.line(5).contains("90% match"));
        assert!(fake.line(6).starts_with("Place in designated recycling bin."));

        // Reveal animation has finished; the bar shows the full impact
        assert!(fake.line(8).contains("90%"));
        assert_eq!(fake.line_color(8), Some((22, 163, 74)));
    }

    #[test]
    fn test_render_impact_bar_starts_empty() {
        let (render, fake) = fixture();

        let model = Model::ShowingResults {
            path: PathBuf::from("bottle.png"),
            results: vec![],
            top_category: WasteCategory::Plastic,
            advice: advice_for(WasteCategory::Plastic),
            shown_at: Instant::now(),
        };

        render.render(&model).unwrap();

        let fake = fake.lock().unwrap();
        assert!(fake.line(8).contains("0%"));
    }

    #[test]
    fn test_render_classification_error() {
        let (render, fake) = fixture();

        let model = Model::ClassificationFailed {
            message: "Error classifying image: decode failed".to_string(),
            failed_at: Instant::now(),
        };

        render.render(&model).unwrap();

        let fake = fake.lock().unwrap();
        assert_eq!(fake.line(0), "Classification error");
        assert!(fake.line(1).contains("decode failed"));
        assert_eq!(fake.line_color(0), Some((239, 68, 68)));
    }
}
