use crate::car_location::interface::{CarLocationStore, Coordinate};
use crate::library::logger::interface::Logger;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// On-disk shape: two fixed keys holding decimal strings. Both empty means
/// no saved location.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredLocation {
    latitude: String,
    longitude: String,
}

pub struct CarLocationStoreJson {
    path: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CarLocationStoreJson {
    pub fn new(path: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            path,
            logger: logger.with_namespace("car_location").with_namespace("json"),
        }
    }

    fn write(&self, stored: &StoredLocation) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let json = serde_json::to_string_pretty(stored)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl CarLocationStore for CarLocationStoreJson {
    fn save(&self, coordinate: Coordinate) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write(&StoredLocation {
            latitude: coordinate.latitude.to_string(),
            longitude: coordinate.longitude.to_string(),
        })?;
        self.logger.info(&format!(
            "Saved car location {}, {} to {}",
            coordinate.latitude,
            coordinate.longitude,
            self.path.display()
        ))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Coordinate>, Box<dyn std::error::Error + Send + Sync>> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored: StoredLocation = serde_json::from_str(&json)?;

        if stored.latitude.is_empty() || stored.longitude.is_empty() {
            return Ok(None);
        }

        let coordinate = Coordinate {
            latitude: stored
                .latitude
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid latitude {:?}: {}", stored.latitude, e))?,
            longitude: stored
                .longitude
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid longitude {:?}: {}", stored.longitude, e))?,
        };

        Ok(Some(coordinate))
    }

    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write(&StoredLocation::default())?;
        self.logger.info("Cleared saved car location")?;
        Ok(())
    }
}
