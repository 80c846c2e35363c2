//! WGS84 coordinate pairs.

use std::fmt;

use serde::Serialize;

/// Validation failures raised while constructing a [`CoordinatePair`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateValidationError {
    /// Latitude was NaN or infinite.
    #[error("latitude must be a finite number")]
    NonFiniteLatitude,
    /// Longitude was NaN or infinite.
    #[error("longitude must be a finite number")]
    NonFiniteLongitude,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} must be within [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} must be within [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// ## Invariants
/// - Both components are finite.
/// - `lat` lies in `[-90, 90]` and `lon` in `[-180, 180]`.
///
/// # Examples
/// ```
/// use road_lookup::domain::CoordinatePair;
///
/// let point = CoordinatePair::new(12.9716, 77.5946).expect("valid point");
/// assert_eq!(point.lat(), 12.9716);
/// assert!(CoordinatePair::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinatePair {
    lat: f64,
    lon: f64,
}

impl CoordinatePair {
    /// Validate and construct a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError`] for non-finite or out-of-range
    /// components.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateValidationError> {
        if !lat.is_finite() {
            return Err(CoordinateValidationError::NonFiniteLatitude);
        }
        if !lon.is_finite() {
            return Err(CoordinateValidationError::NonFiniteLongitude);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateValidationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateValidationError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-90.0, -180.0)]
    #[case(90.0, 180.0)]
    #[case(12.9716, 77.5946)]
    fn accepts_points_inside_wgs84_ranges(#[case] lat: f64, #[case] lon: f64) {
        let point = CoordinatePair::new(lat, lon).expect("point should be valid");
        assert_eq!((point.lat(), point.lon()), (lat, lon));
    }

    #[rstest]
    #[case(90.5, 0.0, CoordinateValidationError::LatitudeOutOfRange(90.5))]
    #[case(0.0, -180.5, CoordinateValidationError::LongitudeOutOfRange(-180.5))]
    #[case(f64::NAN, 0.0, CoordinateValidationError::NonFiniteLatitude)]
    #[case(0.0, f64::INFINITY, CoordinateValidationError::NonFiniteLongitude)]
    fn rejects_invalid_points(
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] expected: CoordinateValidationError,
    ) {
        let error = CoordinatePair::new(lat, lon).expect_err("point should be rejected");
        assert_eq!(error, expected);
    }

    #[test]
    fn displays_as_lat_comma_lon() {
        let point = CoordinatePair::new(51.5, -0.125).expect("valid point");
        assert_eq!(point.to_string(), "51.5,-0.125");
    }
}
