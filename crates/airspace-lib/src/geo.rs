use serde::{Deserialize, Serialize};

/// Geographic position expressed in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Calculate the planar Euclidean distance to another coordinate.
    ///
    /// Latitude and longitude are treated as a flat plane rather than a
    /// sphere. The datasets cover areas small enough that the distortion
    /// is acceptable, and published segment distances follow the same
    /// convention.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}
