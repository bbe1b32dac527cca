//! Geocoded location type.

use std::fmt;

/// Error returned when constructing a location with invalid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A geocoded place: a latitude/longitude pair plus the geocoder's
/// canonical display name.
///
/// Coordinates are validated at construction, so any `Location` value
/// carries a finite latitude in [-90, 90] and longitude in [-180, 180].
/// Locations are request-scoped and never persisted.
///
/// # Examples
///
/// ```
/// use tube_server::domain::Location;
///
/// let loc = Location::new(51.5226, -0.1571, "Baker Street, London").unwrap();
/// assert_eq!(loc.display_name(), "Baker Street, London");
///
/// // Out-of-range coordinates are rejected
/// assert!(Location::new(91.0, 0.0, "nowhere").is_err());
/// assert!(Location::new(0.0, 181.0, "nowhere").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    display_name: String,
}

impl Location {
    /// Create a location, validating the coordinate ranges.
    pub fn new(
        latitude: f64,
        longitude: f64,
        display_name: impl Into<String>,
    ) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate {
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                reason: "latitude must be in [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                reason: "longitude must be in [-180, 180]",
            });
        }

        Ok(Self {
            latitude,
            longitude,
            display_name: display_name.into(),
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The geocoder's canonical name for this place.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.display_name, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location() {
        let loc = Location::new(51.509865, -0.118092, "London").unwrap();
        assert_eq!(loc.latitude(), 51.509865);
        assert_eq!(loc.longitude(), -0.118092);
        assert_eq!(loc.display_name(), "London");
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(Location::new(-90.1, 0.0, "x").is_err());
        assert!(Location::new(90.1, 0.0, "x").is_err());
        assert!(Location::new(90.0, 0.0, "pole").is_ok());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(Location::new(0.0, -180.1, "x").is_err());
        assert!(Location::new(0.0, 180.1, "x").is_err());
        assert!(Location::new(0.0, 180.0, "antimeridian").is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Location::new(f64::NAN, 0.0, "x").is_err());
        assert!(Location::new(0.0, f64::INFINITY, "x").is_err());
    }

    #[test]
    fn display_shows_name_and_coordinates() {
        let loc = Location::new(51.5, -0.12, "Somewhere, London").unwrap();
        assert_eq!(loc.to_string(), "Somewhere, London (51.5, -0.12)");
    }
}
