//! Step definitions for location info BDD tests.

use super::*;
use road_lookup::domain::ROAD_SOURCE_FAILURE_MESSAGE;
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

use crate::location_info_world::mixed_elements;

#[given("an Overpass source returning motorway, service, footway and untagged elements")]
fn an_overpass_source_returning_mixed_elements(world: &LocationInfoWorld) {
    world.use_road_source(ScriptedRoadSource::new(Ok(mixed_elements())));
}

#[given("an Overpass source that fails")]
fn an_overpass_source_that_fails(world: &LocationInfoWorld) {
    world.use_road_source(ScriptedRoadSource::new(Err(RoadSourceError::status(
        504_u16,
        "gateway timeout",
    ))));
}

#[given("a geocoder that resolves every point")]
fn a_geocoder_that_resolves_every_point(world: &LocationInfoWorld) {
    world.use_geocoder(ScriptedGeocoder::new(None));
}

#[given("a geocoder that fails for the second point")]
fn a_geocoder_that_fails_for_the_second_point(world: &LocationInfoWorld) {
    world.use_geocoder(ScriptedGeocoder::new(Some(13.0)));
}

#[when("a client requests location info for two distinct points")]
fn a_client_requests_two_distinct_points(world: &LocationInfoWorld) {
    world.post_location_info(json!({
        "lat1": 12.9716,
        "lon1": 77.5946,
        "lat2": "13.0827",
        "lon2": "80.2707",
    }));
}

#[when("a client requests location info with a zero second longitude")]
fn a_client_requests_with_zero_longitude(world: &LocationInfoWorld) {
    world.post_location_info(json!({
        "lat1": 12.9716,
        "lon1": 77.5946,
        "lat2": 13.0827,
        "lon2": 0,
    }));
}

#[when("a client requests location info for the same point twice")]
fn a_client_requests_the_same_point_twice(world: &LocationInfoWorld) {
    world.post_location_info(json!({
        "lat1": 12.9716,
        "lon1": 77.5946,
        "lat2": 12.9716,
        "lon2": 77.5946,
    }));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &LocationInfoWorld, status: u16) {
    let response = world.last_response();
    assert_eq!(response.status, status, "body: {}", response.body);
}

#[then("the response body is the Overpass failure message")]
fn the_response_body_is_the_overpass_failure_message(world: &LocationInfoWorld) {
    assert_eq!(world.last_response().body, ROAD_SOURCE_FAILURE_MESSAGE);
}

#[then("the road categories are National Highway, Service Road, Unknown, Unknown")]
fn the_road_categories_follow_the_table(world: &LocationInfoWorld) {
    let body = world.last_response().json();
    let categories: Vec<&str> = body["roads"]
        .as_array()
        .expect("roads array")
        .iter()
        .map(|road| road["roadCategory"].as_str().expect("category string"))
        .collect();
    assert_eq!(
        categories,
        ["National Highway", "Service Road", "Unknown", "Unknown"]
    );
    assert_eq!(body["roads"][2]["roadType"], "footway");
    assert_eq!(body["roads"][3]["roadType"], "unknown");
}

#[then("both places are resolved")]
fn both_places_are_resolved(world: &LocationInfoWorld) {
    let body = world.last_response().json();
    let places = body["places"].as_array().expect("places array");
    assert_eq!(places.len(), 2);
    assert!(places.iter().all(Value::is_object), "places: {places:?}");
}

#[then("only the first place is resolved")]
fn only_the_first_place_is_resolved(world: &LocationInfoWorld) {
    let body = world.last_response().json();
    assert_eq!(body["places"][0]["city"], "city at 12.9716");
    assert!(body["places"][1].is_null());
}

#[then("the Overpass source was not queried")]
fn the_overpass_source_was_not_queried(world: &LocationInfoWorld) {
    let source = world.road_source.get().expect("road source should be set");
    assert_eq!(source.call_count(), 0);
}

#[then("the geocoder was called {count} times")]
fn the_geocoder_was_called(world: &LocationInfoWorld, count: usize) {
    let geocoder = world.geocoder.get().expect("geocoder should be set");
    assert_eq!(geocoder.call_count(), count);
}

#[path = "scenario_bindings.rs"]
mod scenario_bindings;
