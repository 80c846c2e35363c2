//! Driven port for fetching road elements around points from a map-data provider.
//!
//! The domain owns the request shape; adapters own the query language and
//! transport.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{CoordinatePair, RoadElement};

/// Search radius used around every lookup point.
pub const DEFAULT_SEARCH_RADIUS_METRES: u32 = 50;

/// Which OSM element kinds a road query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoadElementKinds {
    /// Nodes and ways tagged `highway`.
    #[default]
    NodesAndWays,
    /// Only ways tagged `highway`.
    WaysOnly,
}

/// Domain-owned road query passed to the source adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadQuery {
    /// Points to search around, in caller order.
    pub points: Vec<CoordinatePair>,
    /// Search radius in metres.
    pub radius_metres: u32,
    /// Element kinds to select.
    pub kinds: RoadElementKinds,
}

impl RoadQuery {
    /// Query nodes and ways within the default radius of each point.
    #[must_use]
    pub fn around(points: Vec<CoordinatePair>) -> Self {
        Self {
            points,
            radius_metres: DEFAULT_SEARCH_RADIUS_METRES,
            kinds: RoadElementKinds::NodesAndWays,
        }
    }

    /// Restrict the selected element kinds.
    #[must_use]
    pub fn with_kinds(mut self, kinds: RoadElementKinds) -> Self {
        self.kinds = kinds;
        self
    }
}

define_port_error! {
    /// Errors surfaced while querying the road-data provider.
    pub enum RoadSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "road source transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "road source timed out: {message}",
        /// The provider answered with a non-success status.
        Status { status: u16, message: String } =>
            "road source returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "road source response decode failed: {message}",
        /// The adapter rejected the query before sending it.
        InvalidRequest { message: String } =>
            "road source request invalid: {message}",
    }
}

/// Port for querying roads near a set of points.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoadSource: Send + Sync {
    /// Fetch road elements in provider order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use road_lookup::domain::CoordinatePair;
    /// use road_lookup::domain::ports::{FixtureRoadSource, RoadQuery, RoadSource};
    ///
    /// let point = CoordinatePair::new(12.97, 77.59)?;
    /// let elements = FixtureRoadSource.fetch_roads(&RoadQuery::around(vec![point])).await?;
    /// assert!(elements.is_empty());
    /// ```
    async fn fetch_roads(&self, query: &RoadQuery) -> Result<Vec<RoadElement>, RoadSourceError>;
}

/// Fixture implementation returning no elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRoadSource;

#[async_trait]
impl RoadSource for FixtureRoadSource {
    async fn fetch_roads(&self, _query: &RoadQuery) -> Result<Vec<RoadElement>, RoadSourceError> {
        Ok(Vec::new())
    }
}
