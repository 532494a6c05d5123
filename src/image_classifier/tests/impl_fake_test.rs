use crate::frame_source::interface::Frame;
use crate::image_classifier::impl_fake::{ImageClassifierFake, ImageClassifierFakeConfig};
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::impl_fake::LoggerFake;
use std::sync::Arc;
use std::time::Duration;

fn classifier(failure_rate: f32) -> ImageClassifierFake {
    ImageClassifierFake::new(
        ImageClassifierFakeConfig {
            latency: Duration::ZERO,
            failure_rate,
        },
        Arc::new(LoggerFake::new()),
    )
}

#[test]
fn test_always_failing_classifier_returns_error() {
    let classifier = classifier(1.0);
    let frame = Frame::new(vec![0u8; 12]);

    for _ in 0..5 {
        assert!(classifier.classify(&frame).is_err());
    }
}

#[test]
fn test_results_are_ranked_best_first() {
    let classifier = classifier(0.0);
    let frame = Frame::new(vec![0u8; 12]);

    for _ in 0..20 {
        let classifications = classifier.classify(&frame).unwrap();

        assert_eq!(classifications.len(), 2);
        assert!(classifications[0].confidence >= classifications[1].confidence);
        for classification in &classifications {
            assert!((0.0..=1.0).contains(&classification.confidence));
            assert!(!classification.label.is_empty());
        }
    }
}
