//! Driven port resolving a coordinate pair to a place address.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{CoordinatePair, PlaceAddress};

define_port_error! {
    /// Errors surfaced while reverse geocoding.
    pub enum ReverseGeocoderError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "reverse geocoder transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "reverse geocoder timed out: {message}",
        /// The provider answered with a non-success status.
        Status { status: u16, message: String } =>
            "reverse geocoder returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "reverse geocoder response decode failed: {message}",
    }
}

/// Port for reverse geocoding.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve `point` to an address.
    ///
    /// `Ok(None)` means the provider answered but had no address for the point.
    async fn reverse(
        &self,
        point: CoordinatePair,
    ) -> Result<Option<PlaceAddress>, ReverseGeocoderError>;
}

/// Fixture implementation that never resolves an address.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureReverseGeocoder;

#[async_trait]
impl ReverseGeocoder for FixtureReverseGeocoder {
    async fn reverse(
        &self,
        _point: CoordinatePair,
    ) -> Result<Option<PlaceAddress>, ReverseGeocoderError> {
        Ok(None)
    }
}
