//! Road lookup domain service.
//!
//! Implements the [`RoadLookupQuery`] driving port: one road-source call,
//! classification in provider order, then reverse geocoding per point. The
//! road source is the primary dependency and its failure fails the lookup;
//! the geocoder only enriches the result, so its failures degrade to `None`.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join;
use tracing::{debug, error, warn};

use crate::domain::ports::{
    LocationLookupRequest, LookupResult, ReverseGeocoder, ReverseGeocoderError, RoadLookupQuery,
    RoadQuery, RoadSource, RoadSourceError, WaypointOptions, WaypointReport,
};
use crate::domain::{
    ClassifiedRoad, CoordinatePair, Error, PlaceAddress, RoadCategory, classify_roads,
};

/// Client-facing message for road-source failures.
pub const ROAD_SOURCE_FAILURE_MESSAGE: &str = "Error querying Overpass API";

fn map_road_source_error(error: &RoadSourceError) -> Error {
    error!(%error, "road source query failed");
    Error::upstream_failure(ROAD_SOURCE_FAILURE_MESSAGE)
}

/// Turn a geocoder outcome into the optional place reported to callers.
fn place_or_none(
    point: CoordinatePair,
    outcome: Result<Option<PlaceAddress>, ReverseGeocoderError>,
) -> Option<PlaceAddress> {
    match outcome {
        Ok(place) => place,
        Err(error) => {
            warn!(%error, %point, "reverse geocoding failed; reporting no place");
            None
        }
    }
}

/// Road lookup service over a road source and a reverse geocoder.
#[derive(Clone)]
pub struct RoadLookupService<S, G> {
    road_source: Arc<S>,
    geocoder: Arc<G>,
}

impl<S, G> RoadLookupService<S, G> {
    /// Create a service from its driven ports.
    pub fn new(road_source: Arc<S>, geocoder: Arc<G>) -> Self {
        Self {
            road_source,
            geocoder,
        }
    }
}

impl<S, G> RoadLookupService<S, G>
where
    S: RoadSource,
    G: ReverseGeocoder,
{
    async fn fetch_classified(&self, query: &RoadQuery) -> Result<Vec<ClassifiedRoad>, Error> {
        let elements = self
            .road_source
            .fetch_roads(query)
            .await
            .map_err(|err| map_road_source_error(&err))?;
        debug!(element_count = elements.len(), "road source returned elements");
        Ok(classify_roads(&elements))
    }

    async fn resolve_place(&self, point: CoordinatePair) -> Option<PlaceAddress> {
        place_or_none(point, self.geocoder.reverse(point).await)
    }
}

#[async_trait]
impl<S, G> RoadLookupQuery for RoadLookupService<S, G>
where
    S: RoadSource,
    G: ReverseGeocoder,
{
    async fn lookup(&self, request: LocationLookupRequest) -> Result<LookupResult, Error> {
        let LocationLookupRequest { first, second } = request;
        let roads = self
            .fetch_classified(&RoadQuery::around(vec![first, second]))
            .await?;

        // Independent lookups; `join` keeps results in input order.
        let (first_place, second_place) =
            join(self.resolve_place(first), self.resolve_place(second)).await;

        Ok(LookupResult {
            roads,
            places: [first_place, second_place],
        })
    }

    async fn report_waypoint(
        &self,
        point: CoordinatePair,
        options: WaypointOptions,
    ) -> Result<WaypointReport, Error> {
        let query = RoadQuery::around(vec![point]).with_kinds(options.kinds);
        let mut roads = self.fetch_classified(&query).await?;
        if options.known_only {
            roads.retain(|road| road.road_category != RoadCategory::Unknown);
        }

        Ok(WaypointReport {
            coordinates: point,
            roads,
            place: self.resolve_place(point).await,
        })
    }
}

#[cfg(test)]
#[path = "road_lookup_service_tests.rs"]
mod tests;
