use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub probability: f32,
}

pub trait ImageClassifier {
    /// Prepare the underlying model. Classification must not be attempted
    /// before this has returned Ok.
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn classify(
        &self,
        images: Vec<DynamicImage>,
    ) -> Result<Vec<Vec<Classification>>, Box<dyn std::error::Error + Send + Sync>>;
}
