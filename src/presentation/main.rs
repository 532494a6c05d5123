use crate::best_label::main::BestLabel;
use crate::car_location::interface::{CarLocationStore, Coordinate};
use crate::library::logger::interface::Logger;
use crate::presentation::scene::{LabelScene, TapOutcome, WorldPoint};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDetail {
    pub car_name: String,
}

/// The interactive side: reads the best label whenever the user acts and
/// never waits on the classification loop.
pub struct Presentation {
    best_label: BestLabel,
    scene: LabelScene,
    car_location_store: Arc<dyn CarLocationStore + Send + Sync>,
    saved_location: Option<Coordinate>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Presentation {
    pub fn new(
        best_label: BestLabel,
        car_location_store: Arc<dyn CarLocationStore + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            best_label,
            scene: LabelScene::new(),
            car_location_store,
            saved_location: None,
            logger: logger.with_namespace("presentation"),
        }
    }

    pub fn restore_car_location(
        &mut self,
    ) -> Result<Option<Coordinate>, Box<dyn std::error::Error + Send + Sync>> {
        self.saved_location = self.car_location_store.load()?;

        match self.saved_location {
            Some(coordinate) => self.logger.info(&format!(
                "Restored car location {}, {}",
                coordinate.latitude, coordinate.longitude
            ))?,
            None => self.logger.info("No saved car location")?,
        }

        Ok(self.saved_location)
    }

    pub fn on_tap(&mut self, hit: Option<WorldPoint>) -> TapOutcome {
        let outcome = self.scene.on_tap(hit, &self.best_label.get());

        match &outcome {
            TapOutcome::Placed(annotation) => {
                let _ = self.logger.info(&format!(
                    "Placed {:?} at ({:.2}, {:.2}, {:.2})",
                    annotation.text,
                    annotation.position.x,
                    annotation.position.y,
                    annotation.position.z
                ));
            }
            TapOutcome::Cleared => {
                let _ = self.logger.info("No car recognised, scene cleared");
            }
            TapOutcome::NoHit => {}
        }

        outcome
    }

    /// Details for the car currently recognised, once the button is shown.
    pub fn on_learn_more(&self) -> Option<CarDetail> {
        if !self.scene.is_learn_more_visible() {
            return None;
        }

        let car_name = self.best_label.get();
        if car_name.is_empty() {
            return None;
        }

        Some(CarDetail { car_name })
    }

    pub fn on_save_location(
        &mut self,
        current: Coordinate,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.car_location_store.save(current)?;
        self.saved_location = Some(current);
        Ok(())
    }

    pub fn on_remove_all(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scene.clear();
        self.car_location_store.clear()?;
        self.saved_location = None;
        Ok(())
    }

    pub fn saved_location(&self) -> Option<Coordinate> {
        self.saved_location
    }

    #[cfg(test)]
    pub fn scene(&self) -> &LabelScene {
        &self.scene
    }
}
