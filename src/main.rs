use config::Config;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_image_source::impl_drop_dir::DeviceImageSourceDropDir;
use device_image_source::impl_fake::DeviceImageSourceFake;
use device_image_source::interface::DeviceImageSource;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use smart_sorter::main::SmartSorter;
use std::sync::{Arc, Mutex};

mod config;
mod device_display;
mod device_image_source;
mod image_classifier;
mod library;
mod smart_sorter;
mod waste_mapper;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_image_source: Arc<dyn DeviceImageSource + Send + Sync> =
        if args.iter().any(|arg| arg == "--demo") {
            Arc::new(DeviceImageSourceFake::new(logger.clone()))
        } else {
            Arc::new(DeviceImageSourceDropDir::new(
                config.dropzone_dir.clone(),
                config.dropzone_poll_rate,
                logger.clone(),
            ))
        };

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        if args.iter().any(|arg| arg == "--gui") {
            Arc::new(Mutex::new(DeviceDisplayGui::new()))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        Arc::new(ImageClassifierFake::new(logger.clone()));

    let smart_sorter = SmartSorter::new(
        config,
        logger,
        device_image_source,
        device_display,
        image_classifier,
    );

    smart_sorter.run()?;

    Ok(())
}
