use crate::device_image_source::interface::{DeviceImageSource, DeviceImageSourceEvent};
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Demo source: periodically synthesizes a noise image on disk and reports
/// it as a drop.
pub struct DeviceImageSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceImageSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("fake"),
        }
    }
}

impl DeviceImageSource for DeviceImageSourceFake {
    fn events(&self) -> Receiver<DeviceImageSourceEvent> {
        let (tx, rx) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            if tx.send(DeviceImageSourceEvent::Connected).is_err() {
                return;
            }

            let mut counter = 0u32;

            loop {
                std::thread::sleep(std::time::Duration::from_secs(6));

                let path = std::env::temp_dir().join(format!("demo_image_{}.png", counter));
                counter += 1;

                let mut demo_image = image::RgbImage::new(64, 64);
                for pixel in demo_image.pixels_mut() {
                    *pixel = image::Rgb([
                        rand::random::<u8>(),
                        rand::random::<u8>(),
                        rand::random::<u8>(),
                    ]);
                }

                if demo_image.save(&path).is_err() {
                    continue;
                }

                let _ = logger.info(&format!("Generated demo image {}", path.display()));
                if tx.send(DeviceImageSourceEvent::ImageDropped(path)).is_err() {
                    return;
                }
            }
        });

        rx
    }
}
