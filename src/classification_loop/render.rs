use super::main::ClassificationLoop;
use crate::classification_loop::core::{Model, Phase};

pub const NO_LABEL_TEXT: &str = "No car in view";

pub fn status_line(model: &Model) -> &'static str {
    match model.phase {
        Phase::Classifying { .. } => "Classifying...",
        Phase::Capturing | Phase::Waiting if model.stats.classify_requests == 0 => {
            "Waiting camera.."
        }
        Phase::Capturing | Phase::Waiting => "Scanning...",
    }
}

pub fn label_line(model: &Model) -> &str {
    if model.best_label.is_empty() {
        NO_LABEL_TEXT
    } else {
        &model.best_label
    }
}

impl ClassificationLoop {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        device_display.write_line(0, status_line(model))?;
        device_display.write_line(1, label_line(model))?;

        Ok(())
    }
}
