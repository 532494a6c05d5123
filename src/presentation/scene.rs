/// A point in AR world space returned by a hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnnotation {
    pub text: String,
    pub position: WorldPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    /// The hit test found nothing; the scene is untouched.
    NoHit,
    /// Old annotations were removed and there was no label to place.
    Cleared,
    Placed(LabelAnnotation),
}

/// Label annotations placed in the AR scene. A tap replaces whatever was
/// there with at most one annotation.
#[derive(Debug, Default)]
pub struct LabelScene {
    annotations: Vec<LabelAnnotation>,
    learn_more_visible: bool,
}

impl LabelScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tap(&mut self, hit: Option<WorldPoint>, best_label: &str) -> TapOutcome {
        let Some(position) = hit else {
            return TapOutcome::NoHit;
        };

        self.annotations.clear();

        if best_label.is_empty() {
            return TapOutcome::Cleared;
        }

        let annotation = LabelAnnotation {
            text: best_label.to_string(),
            position,
        };
        self.annotations.push(annotation.clone());
        self.learn_more_visible = true;

        TapOutcome::Placed(annotation)
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    #[cfg(test)]
    pub fn annotations(&self) -> &[LabelAnnotation] {
        &self.annotations
    }

    /// Stays visible once a label has been placed.
    pub fn is_learn_more_visible(&self) -> bool {
        self.learn_more_visible
    }
}
