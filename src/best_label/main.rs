use std::sync::{Arc, RwLock};

/// The label currently considered valid for display.
///
/// One writer (the classification loop) and any number of readers. Every
/// update is a single assignment under the lock, so a reader sees either the
/// previous label or the new one, never a mix and never a backlog. An empty
/// string means "no label".
#[derive(Debug, Clone, Default)]
pub struct BestLabel {
    label: Arc<RwLock<String>>,
}

impl BestLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, label: &str) {
        let mut current = match self.label.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = label.to_string();
    }

    pub fn clear(&self) {
        self.set("");
    }

    pub fn get(&self) -> String {
        match self.label.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }
}
