#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the user left the car. Holds at most one location.
pub trait CarLocationStore {
    fn save(&self, coordinate: Coordinate) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn load(&self) -> Result<Option<Coordinate>, Box<dyn std::error::Error + Send + Sync>>;
    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
