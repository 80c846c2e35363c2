//! Behaviour-driven tests for the location info endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use road_lookup::domain::ports::{
    ReverseGeocoder, ReverseGeocoderError, RoadQuery, RoadSource, RoadSourceError,
};
use road_lookup::domain::{CoordinatePair, PlaceAddress, RoadElement};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

#[path = "location_info_bdd/world.rs"]
mod location_info_world;

/// Road source returning one scripted outcome and counting calls.
struct ScriptedRoadSource {
    outcome: Result<Vec<RoadElement>, RoadSourceError>,
    calls: AtomicUsize,
}

impl ScriptedRoadSource {
    fn new(outcome: Result<Vec<RoadElement>, RoadSourceError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoadSource for ScriptedRoadSource {
    async fn fetch_roads(&self, _query: &RoadQuery) -> Result<Vec<RoadElement>, RoadSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Geocoder naming each point after its latitude, optionally failing above
/// a latitude threshold.
struct ScriptedGeocoder {
    fail_above_lat: Option<f64>,
    calls: AtomicUsize,
}

impl ScriptedGeocoder {
    fn new(fail_above_lat: Option<f64>) -> Self {
        Self {
            fail_above_lat,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseGeocoder for ScriptedGeocoder {
    async fn reverse(
        &self,
        point: CoordinatePair,
    ) -> Result<Option<PlaceAddress>, ReverseGeocoderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_above_lat.is_some_and(|limit| point.lat() > limit) {
            return Err(ReverseGeocoderError::status(503_u16, "unavailable"));
        }
        Ok(Some(PlaceAddress::new(BTreeMap::from([(
            "city".to_owned(),
            format!("city at {}", point.lat()),
        )]))))
    }
}

/// Status and parsed body of the last response.
#[derive(Debug, Clone)]
struct ResponseSnapshot {
    status: u16,
    body: String,
}

impl ResponseSnapshot {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

#[derive(Default, ScenarioState)]
struct LocationInfoWorld {
    road_source: Slot<Arc<ScriptedRoadSource>>,
    geocoder: Slot<Arc<ScriptedGeocoder>>,
    response: Slot<ResponseSnapshot>,
}

#[fixture]
fn world() -> LocationInfoWorld {
    LocationInfoWorld::default()
}

#[path = "location_info_bdd/steps.rs"]
mod location_info_steps;
