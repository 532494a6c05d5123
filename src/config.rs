use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Top-ranked classifications must be strictly above this to be shown.
    pub min_confidence: f32,
    pub frame_unavailable_retry: Duration,
    pub cycle_interval: Duration,
    pub presentation_poll_rate: Duration,
    pub car_location_path: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_confidence: 0.6,
            frame_unavailable_retry: Duration::from_millis(100),
            cycle_interval: Duration::ZERO,
            presentation_poll_rate: Duration::from_secs(2),
            car_location_path: PathBuf::from("car_location.json"),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
