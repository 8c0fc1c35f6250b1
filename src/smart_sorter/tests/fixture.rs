use crate::config::Config;
use crate::device_display::{impl_fake::DeviceDisplayFake, interface::DeviceDisplay};
use crate::device_image_source::{impl_fake::DeviceImageSourceFake, interface::DeviceImageSource};
use crate::image_classifier::{impl_fake::ImageClassifierFake, interface::ImageClassifier};
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::smart_sorter::main::SmartSorter;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_image_source: Arc<dyn DeviceImageSource + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub smart_sorter: SmartSorter,
}

impl Fixture {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let config = Config::default();
        let logger = Arc::new(LoggerConsole::new(config.logger_timezone));
        let device_image_source = Arc::new(DeviceImageSourceFake::new(logger.clone()));
        let device_display = Arc::new(Mutex::new(DeviceDisplayFake::new(logger.clone())));
        let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));
        let smart_sorter = SmartSorter::new(
            config.clone(),
            logger.clone(),
            device_image_source.clone(),
            device_display.clone(),
            image_classifier.clone(),
        );

        Self {
            config,
            logger,
            device_image_source,
            device_display,
            image_classifier,
            smart_sorter,
        }
    }
}
