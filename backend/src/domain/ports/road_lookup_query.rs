//! Driving port for road lookups consumed by the HTTP handler and the CLI.

use async_trait::async_trait;
use serde::Serialize;

use super::RoadElementKinds;
use crate::domain::{ClassifiedRoad, CoordinatePair, Error, PlaceAddress};

/// Two-point lookup request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationLookupRequest {
    /// First point; its place is reported first.
    pub first: CoordinatePair,
    /// Second point; its place is reported second.
    pub second: CoordinatePair,
}

/// Result of a two-point lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    /// Classified roads in provider order.
    pub roads: Vec<ClassifiedRoad>,
    /// One entry per input point, in input order; `None` when geocoding failed.
    pub places: [Option<PlaceAddress>; 2],
}

/// Options for single-waypoint reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaypointOptions {
    /// Element kinds to query.
    pub kinds: RoadElementKinds,
    /// Drop roads classified as `Unknown`.
    pub known_only: bool,
}

/// Roads and place for one waypoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointReport {
    /// The queried point.
    pub coordinates: CoordinatePair,
    /// Classified roads in provider order, filtered per [`WaypointOptions`].
    pub roads: Vec<ClassifiedRoad>,
    /// Resolved place, or `None` when geocoding failed.
    pub place: Option<PlaceAddress>,
}

/// Use-case port for road lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoadLookupQuery: Send + Sync {
    /// Classify roads around two points and resolve both places.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::domain::ErrorCode::UpstreamFailure`] error when the
    /// road-data provider fails. Geocoding failures never fail the lookup.
    async fn lookup(&self, request: LocationLookupRequest) -> Result<LookupResult, Error>;

    /// Classify roads around one waypoint and resolve its place.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`RoadLookupQuery::lookup`].
    async fn report_waypoint(
        &self,
        point: CoordinatePair,
        options: WaypointOptions,
    ) -> Result<WaypointReport, Error>;
}
