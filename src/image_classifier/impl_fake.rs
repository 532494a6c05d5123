use crate::frame_source::interface::Frame;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ImageClassifierFakeConfig {
    pub latency: Duration,
    /// Probability in [0, 1] that a call fails like a dropped inference request.
    pub failure_rate: f32,
}

impl Default for ImageClassifierFakeConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(300),
            failure_rate: 0.05,
        }
    }
}

pub struct ImageClassifierFake {
    config: ImageClassifierFakeConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(config: ImageClassifierFakeConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        frame: &Frame,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Classifying frame of {} bytes...", frame.bytes.len()))?;
        std::thread::sleep(self.config.latency);

        let mut rng = rand::rng();

        if rand::random::<f32>() < self.config.failure_rate {
            return Err("inference request dropped".into());
        }

        let labels = vec![
            "Honda Civic",
            "Honda Accord",
            "Toyota Camry",
            "Toyota Prius",
            "Ford Mustang",
            "Tesla Model 3",
            "Volkswagen Golf",
            "sports car, sport car",
            "minivan",
            "pickup, pickup truck",
        ];

        let index_dist = Uniform::new(0, labels.len())?;
        let confidence_dist = Uniform::new(0.0f32, 1.0)?;

        let first = labels[index_dist.sample(&mut rng)];
        let second = labels[index_dist.sample(&mut rng)];
        let top = confidence_dist.sample(&mut rng);
        let runner_up = (1.0 - top) * confidence_dist.sample(&mut rng);

        let mut classifications = vec![
            Classification::new(first, top),
            Classification::new(second, runner_up),
        ];
        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(classifications)
    }
}
