use super::main::SmartSorter;
use crate::smart_sorter::core::{Effect, Msg};
use std::time::Instant;

impl SmartSorter {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToImageSourceEvents => {
                let events = self.device_image_source.events();
                while let Ok(event) = events.recv() {
                    if self.msg_sender.send(Msg::ImageSourceEvent(event)).is_err() {
                        break;
                    }
                }
            }
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.msg_sender.send(Msg::Tick(Instant::now())).is_err() {
                    break;
                }
            },
            Effect::LoadClassifier => {
                let loaded = self.image_classifier.load();
                if let Err(e) = &loaded {
                    let _ = self.logger.error(&format!("Classifier load error: {}", e));
                }
                let _ = self.msg_sender.send(Msg::ClassifierLoadDone(loaded));
            }
            Effect::ClassifyImage { path } => {
                let result = match image::open(&path) {
                    Ok(image) => self.image_classifier.classify(vec![image]),
                    Err(e) => Err(e.into()),
                };
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Classification error: {}", e));
                }
                let _ = self.msg_sender.send(Msg::ClassifyDone(result));
            }
        }
    }
}
