//! Runtime configuration loaded via OrthoConfig.
//!
//! Values come from `ROAD_LOOKUP_*` environment variables (or matching
//! command-line flags); every field is optional and falls back to a default.
//! The listening port is read separately from `PORT`.

use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::RoadLookupService;
use crate::outbound::build_http_client;
use crate::outbound::nominatim::{DEFAULT_NOMINATIM_ENDPOINT, NominatimHttpGeocoder};
use crate::outbound::overpass::{
    DEFAULT_OVERPASS_ENDPOINT, DEFAULT_OVERPASS_QUERY_TIMEOUT_SECONDS, OverpassHttpSource,
};

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";
/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("road-lookup/", env!("CARGO_PKG_VERSION"));

/// Road lookup service wired to the real Overpass and Nominatim adapters.
pub type HttpRoadLookupService = RoadLookupService<OverpassHttpSource, NominatimHttpGeocoder>;

/// Errors raised while turning settings into running components.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value {value:?}: expected an integer between 0 and 65535")]
    InvalidPort {
        /// Raw environment value.
        value: String,
    },
    /// A configured endpoint is not an absolute URL.
    #[error("invalid {field} {value:?}: {source}")]
    InvalidUrl {
        /// Settings field holding the URL.
        field: &'static str,
        /// Raw configured value.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The outbound HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Server and adapter configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROAD_LOOKUP")]
pub struct ServerSettings {
    /// Interface to bind; defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Overpass interpreter endpoint.
    pub overpass_url: Option<String>,
    /// Nominatim reverse-geocoding endpoint.
    pub nominatim_url: Option<String>,
    /// Per-request timeout for outbound calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// `[timeout:N]` directive embedded in Overpass queries, in seconds.
    pub overpass_query_timeout_secs: Option<u32>,
    /// `User-Agent` header sent to both providers.
    pub user_agent: Option<String>,
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, SettingsError> {
    Url::parse(value).map_err(|source| SettingsError::InvalidUrl {
        field,
        value: value.to_owned(),
        source,
    })
}

impl ServerSettings {
    /// Interface to bind.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Overpass endpoint, falling back to the public instance.
    pub fn overpass_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "overpass_url",
            self.overpass_url
                .as_deref()
                .unwrap_or(DEFAULT_OVERPASS_ENDPOINT),
        )
    }

    /// Nominatim endpoint, falling back to the public instance.
    pub fn nominatim_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "nominatim_url",
            self.nominatim_url
                .as_deref()
                .unwrap_or(DEFAULT_NOMINATIM_ENDPOINT),
        )
    }

    /// Outbound request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Overpass `[timeout:N]` directive in seconds.
    pub fn overpass_query_timeout_secs(&self) -> u32 {
        self.overpass_query_timeout_secs
            .unwrap_or(DEFAULT_OVERPASS_QUERY_TIMEOUT_SECONDS)
    }

    /// `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Build the road lookup service over HTTP adapters sharing one client.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when an endpoint is not a valid URL or the
    /// HTTP client cannot be constructed.
    pub fn road_lookup_service(&self) -> Result<HttpRoadLookupService, SettingsError> {
        let client = build_http_client(self.request_timeout(), self.user_agent())?;
        let road_source = OverpassHttpSource::new(
            client.clone(),
            self.overpass_url()?,
            self.overpass_query_timeout_secs(),
        );
        let geocoder = NominatimHttpGeocoder::new(client, self.nominatim_url()?);
        Ok(RoadLookupService::new(
            Arc::new(road_source),
            Arc::new(geocoder),
        ))
    }
}

/// Parse the listening port from a raw `PORT` value.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidPort`] when the value is not a `u16`.
///
/// # Examples
/// ```
/// use road_lookup::settings::{DEFAULT_PORT, resolve_port};
///
/// assert_eq!(resolve_port(None).expect("default port"), DEFAULT_PORT);
/// assert_eq!(resolve_port(Some("8080")).expect("explicit port"), 8080);
/// assert!(resolve_port(Some("http")).is_err());
/// ```
pub fn resolve_port(raw: Option<&str>) -> Result<u16, SettingsError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidPort {
                value: value.to_owned(),
            }),
    }
}

/// Read the listening port from the `PORT` environment variable.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidPort`] when the variable is set but not a
/// valid port number.
pub fn port_from_env() -> Result<u16, SettingsError> {
    let raw = std::env::var(PORT_ENV).ok();
    resolve_port(raw.as_deref())
}
