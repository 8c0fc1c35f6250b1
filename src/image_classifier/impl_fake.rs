use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

const LABELS: [&str; 16] = [
    "water bottle",
    "beer can",
    "newspaper",
    "banana",
    "mason jar",
    "laptop computer",
    "cell phone",
    "cardboard box",
    "plastic bag",
    "wine glass",
    "apple",
    "aluminum foil",
    "battery pack",
    "coffee mug",
    "running shoe",
    "park bench",
];

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger
                .with_namespace("image_classifier")
                .with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Loading classifier...")?;
        std::thread::sleep(std::time::Duration::from_millis(800));
        self.logger.info("Classifier loaded")?;
        Ok(())
    }

    fn classify(
        &self,
        images: Vec<DynamicImage>,
    ) -> Result<Vec<Vec<Classification>>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Classifying {} image(s)...", images.len()))?;

        let mut rng = rand::rng();
        let index_dist = Uniform::new(0, LABELS.len())?;
        let top_dist = Uniform::new(0.5f32, 0.95f32)?;
        let decay_dist = Uniform::new(0.3f32, 0.8f32)?;

        let mut results = Vec::new();

        for _image in &images {
            std::thread::sleep(std::time::Duration::from_millis(400));

            let mut probability = top_dist.sample(&mut rng);
            let mut classifications = Vec::new();

            for _ in 0..3 {
                classifications.push(Classification {
                    label: LABELS[index_dist.sample(&mut rng)].to_string(),
                    probability,
                });
                probability *= decay_dist.sample(&mut rng);
            }

            results.push(classifications);
        }

        Ok(results)
    }
}
