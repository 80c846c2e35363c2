//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use road_lookup::domain::ports::RoadLookupQuery;
use road_lookup::settings::{ServerSettings, port_from_env};

/// Everything `create_server` needs to bind and serve.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) road_lookup: Arc<dyn RoadLookupQuery>,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and lookup port.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, road_lookup: Arc<dyn RoadLookupQuery>) -> Self {
        Self {
            bind_addr,
            road_lookup,
        }
    }

    /// Resolve the bind address from settings and `PORT`, and wire the HTTP
    /// adapters.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the port, host, or an endpoint is
    /// invalid, or the HTTP client cannot be built.
    pub fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        let port = port_from_env().map_err(std::io::Error::other)?;
        let bind_addr = (settings.host(), port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                std::io::Error::other(format!("host {} did not resolve", settings.host()))
            })?;
        let service = settings
            .road_lookup_service()
            .map_err(std::io::Error::other)?;
        Ok(Self::new(bind_addr, Arc::new(service)))
    }
}
