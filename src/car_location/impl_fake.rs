use crate::car_location::interface::{CarLocationStore, Coordinate};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct CarLocationStoreFake {
    saved: Mutex<Option<Coordinate>>,
}

impl CarLocationStoreFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarLocationStore for CarLocationStoreFake {
    fn save(&self, coordinate: Coordinate) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.saved.lock().map_err(|e| e.to_string())? = Some(coordinate);
        Ok(())
    }

    fn load(&self) -> Result<Option<Coordinate>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(*self.saved.lock().map_err(|e| e.to_string())?)
    }

    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.saved.lock().map_err(|e| e.to_string())? = None;
        Ok(())
    }
}
