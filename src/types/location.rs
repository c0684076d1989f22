//! Named locations used as query keys, and the fixed registry the report runs over.

use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64` decimal degrees.
///
/// # Examples
///
/// ```
/// use meteo_climate::LatLon;
///
/// let madrid = LatLon(40.416775, -3.703790);
/// assert_eq!(madrid.0, 40.416775); // Latitude
/// assert_eq!(madrid.1, -3.703790); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// A named point with a fixed coordinate.
///
/// The name is the lookup key used by [`crate::ClimateClient`] operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Registry key, e.g. `"Madrid"`.
    pub name: String,
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

/// The built-in registry: Madrid, London and Rio, in that order.
pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new("Madrid", 40.416775, -3.703790),
        Location::new("London", 51.507351, -0.127758),
        Location::new("Rio", -22.906847, -43.172896),
    ]
}
