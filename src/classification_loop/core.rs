use crate::classification_loop::label_selection::{select_label, LabelDecision};
use crate::config::Config;
use crate::frame_source::interface::Frame;
use crate::image_classifier::interface::Classification;
use std::time::{Duration, Instant};

//
//
//

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Asked the frame source for its newest frame.
    #[default]
    Capturing,
    /// The single outstanding classifier call.
    Classifying { frame_captured_at: Instant },
    /// Paused before the next cycle.
    Waiting,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoopStats {
    pub cycles: u64,
    pub classify_requests: u64,
    pub classify_failures: u64,
    pub frames_unavailable: u64,
    pub labels_accepted: u64,
    pub labels_rejected: u64,
    pub empty_results: u64,
}

impl std::fmt::Display for LoopStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cycles={} requests={} failures={} no_frame={} accepted={} rejected={} empty={}",
            self.cycles,
            self.classify_requests,
            self.classify_failures,
            self.frames_unavailable,
            self.labels_accepted,
            self.labels_rejected,
            self.empty_results
        )
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Model {
    pub phase: Phase,
    /// Empty when there is no label to show.
    pub best_label: String,
    pub stats: LoopStats,
}

#[derive(Debug)]
pub enum Msg {
    FrameCaptureDone(Option<Frame>),
    FrameClassifyDone(Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>),
    DelayDone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    CaptureFrame,
    ClassifyFrame { frame: Frame },
    Delay(Duration),
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyFrame { frame } => {
                format!("ClassifyFrame {{ {} bytes }}", frame.bytes.len())
            }
            effect => format!("{:?}", effect),
        }
    }
}

//
//
//

pub fn init() -> (Model, Vec<Effect>) {
    let mut model = Model::default();
    model.stats.cycles = 1;
    (model, vec![Effect::CaptureFrame])
}

pub fn transition(config: &Config, mut model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model.phase.clone(), msg) {
        (Phase::Capturing, Msg::FrameCaptureDone(None)) => {
            model.stats.frames_unavailable += 1;
            next_cycle(model, config.frame_unavailable_retry)
        }

        (Phase::Capturing, Msg::FrameCaptureDone(Some(frame))) => {
            model.stats.classify_requests += 1;
            model.phase = Phase::Classifying {
                frame_captured_at: frame.captured_at,
            };
            (model, vec![Effect::ClassifyFrame { frame }])
        }

        (Phase::Classifying { .. }, Msg::FrameClassifyDone(result)) => {
            match result {
                Ok(classifications) => {
                    match select_label(&classifications, config.min_confidence) {
                        LabelDecision::Accepted(label) => {
                            model.stats.labels_accepted += 1;
                            model.best_label = label;
                        }
                        LabelDecision::Rejected { .. } => {
                            model.stats.labels_rejected += 1;
                            model.best_label.clear();
                        }
                        LabelDecision::NoResults => {
                            model.stats.empty_results += 1;
                        }
                    }
                }
                // The previous label stays; an outage is not an observation.
                Err(_) => {
                    model.stats.classify_failures += 1;
                }
            }

            next_cycle(model, config.cycle_interval)
        }

        (Phase::Waiting, Msg::DelayDone) => next_cycle(model, Duration::ZERO),

        // Anything else is a late or foreign message for this phase.
        _ => (model, vec![]),
    }
}

fn next_cycle(mut model: Model, delay: Duration) -> (Model, Vec<Effect>) {
    if delay.is_zero() {
        model.stats.cycles += 1;
        model.phase = Phase::Capturing;
        (model, vec![Effect::CaptureFrame])
    } else {
        model.phase = Phase::Waiting;
        (model, vec![Effect::Delay(delay)])
    }
}
