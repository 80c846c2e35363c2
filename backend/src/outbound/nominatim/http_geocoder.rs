//! Reqwest-backed Nominatim reverse geocoder.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::{ReverseGeocoder, ReverseGeocoderError};
use crate::domain::{CoordinatePair, PlaceAddress};
use crate::outbound::body_preview;

/// Public Nominatim reverse-geocoding endpoint.
pub const DEFAULT_NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";

#[derive(Debug, Deserialize)]
struct ReverseResponseDto {
    #[serde(default)]
    address: Option<BTreeMap<String, String>>,
}

/// Nominatim adapter issuing `GET /reverse?lat=..&lon=..&format=json`.
pub struct NominatimHttpGeocoder {
    client: Client,
    endpoint: Url,
}

impl NominatimHttpGeocoder {
    /// Build an adapter around a client configured with timeout and user agent.
    #[must_use]
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn reverse_url(&self, point: CoordinatePair) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("lat", &point.lat().to_string())
            .append_pair("lon", &point.lon().to_string())
            .append_pair("format", "json");
        url
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimHttpGeocoder {
    async fn reverse(
        &self,
        point: CoordinatePair,
    ) -> Result<Option<PlaceAddress>, ReverseGeocoderError> {
        debug!(%point, "reverse geocoding");
        let response = self
            .client
            .get(self.reverse_url(point))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_address(body.as_ref())
    }
}

fn parse_address(body: &[u8]) -> Result<Option<PlaceAddress>, ReverseGeocoderError> {
    let decoded: ReverseResponseDto = serde_json::from_slice(body).map_err(|error| {
        ReverseGeocoderError::decode(format!("invalid Nominatim JSON payload: {error}"))
    })?;
    Ok(decoded.address.map(PlaceAddress::new))
}

fn map_transport_error(error: reqwest::Error) -> ReverseGeocoderError {
    if error.is_timeout() {
        ReverseGeocoderError::timeout(error.to_string())
    } else {
        ReverseGeocoderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ReverseGeocoderError {
    ReverseGeocoderError::status(status.as_u16(), body_preview(body))
}
