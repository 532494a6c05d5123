use super::main::ClassificationLoop;
use crate::classification_loop::core::{Effect, Msg};

impl ClassificationLoop {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::CaptureFrame => {
                let frame = self.frame_source.current_frame();
                self.send(Msg::FrameCaptureDone(frame));
            }
            Effect::ClassifyFrame { frame } => {
                let result = self.image_classifier.classify(&frame);

                match &result {
                    Ok(classifications) => {
                        let _ = self.logger.info(&format!("Classified: {:?}", classifications));
                    }
                    Err(e) => {
                        let _ = self
                            .logger
                            .error(&format!("Classification failed, keeping last label: {}", e));
                    }
                }

                self.send(Msg::FrameClassifyDone(result));
            }
            Effect::Delay(duration) => {
                std::thread::sleep(duration);
                self.send(Msg::DelayDone);
            }
        }
    }
}
