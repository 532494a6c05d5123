use crate::image_classifier::interface::Classification;

#[derive(Debug, Clone, PartialEq)]
pub enum LabelDecision {
    Accepted(String),
    Rejected { label: String, confidence: f32 },
    /// The classifier answered with an empty list. Nothing was observed.
    NoResults,
}

/// Winner-take-all on the rank-1 entry, gated by a strict confidence threshold.
pub fn select_label(classifications: &[Classification], min_confidence: f32) -> LabelDecision {
    let Some(top) = classifications.first() else {
        return LabelDecision::NoResults;
    };

    let label = sanitize_label(&top.label);

    if top.confidence > min_confidence && !label.is_empty() {
        LabelDecision::Accepted(label)
    } else {
        LabelDecision::Rejected {
            label,
            confidence: top.confidence,
        }
    }
}

/// `"sports car, sport car - 0.92"` becomes `"sports car"`.
pub fn sanitize_label(raw: &str) -> String {
    let without_score = match raw.rsplit_once(" - ") {
        Some((name, score)) if score.trim().parse::<f32>().is_ok() => name,
        _ => raw,
    };

    without_score
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
