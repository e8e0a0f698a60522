// crates/aeropath-core/src/geo.rs

//! Coordinates and great-circle distance.

use crate::error::{Result, TravelLogError};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for the spherical approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// [`Coordinate::new`] stores whatever it is given; range checks only happen
/// when parsing user text via [`Coordinate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses user-entered latitude/longitude text.
    ///
    /// Both values are trimmed, must be finite, and must lie in the WGS84
    /// range (`|lat| <= 90`, `|lon| <= 180`).
    ///
    /// ```rust
    /// use aeropath_core::Coordinate;
    ///
    /// let c = Coordinate::parse(" 48.8566", "2.3522 ").unwrap();
    /// assert_eq!(c.latitude, 48.8566);
    /// assert!(Coordinate::parse("91", "0").is_err());
    /// assert!(Coordinate::parse("north", "0").is_err());
    /// ```
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let lat = parse_degrees("latitude", latitude)?;
        let lon = parse_degrees("longitude", longitude)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(TravelLogError::InvalidCoordinate(format!(
                "latitude {lat} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(TravelLogError::InvalidCoordinate(format!(
                "longitude {lon} out of range [-180, 180]"
            )));
        }
        Ok(Self::new(lat, lon))
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self, other)
    }
}

fn parse_degrees(field: &str, s: &str) -> Result<f64> {
    let v = s.trim().parse::<f64>().map_err(|_| {
        TravelLogError::InvalidCoordinate(format!("{field} '{}' is not a number", s.trim()))
    })?;
    if !v.is_finite() {
        return Err(TravelLogError::InvalidCoordinate(format!(
            "{field} must be finite"
        )));
    }
    Ok(v)
}

/// Distance in kilometres between two points using the haversine formula.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // clamp guards asin against h drifting past 1.0 for antipodal points
    EARTH_RADIUS_KM * 2.0 * h.sqrt().min(1.0).asin()
}
