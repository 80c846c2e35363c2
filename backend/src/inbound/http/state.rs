//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving port and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::RoadLookupQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Road lookup use-case.
    pub road_lookup: Arc<dyn RoadLookupQuery>,
}

impl HttpState {
    /// Construct state from the road lookup port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use road_lookup::domain::RoadLookupService;
    /// use road_lookup::domain::ports::{FixtureReverseGeocoder, FixtureRoadSource};
    /// use road_lookup::inbound::http::state::HttpState;
    ///
    /// let service = RoadLookupService::new(
    ///     Arc::new(FixtureRoadSource),
    ///     Arc::new(FixtureReverseGeocoder),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _lookup = state.road_lookup.clone();
    /// ```
    pub fn new(road_lookup: Arc<dyn RoadLookupQuery>) -> Self {
        Self { road_lookup }
    }
}
