//! Scenario bindings for location info BDD tests.

use super::*;
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/location_info.feature",
    name = "Roads are classified and both places resolved"
)]
fn roads_are_classified_and_both_places_resolved(world: LocationInfoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/location_info.feature",
    name = "Missing coordinates are rejected before any lookup"
)]
fn missing_coordinates_are_rejected_before_any_lookup(world: LocationInfoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/location_info.feature",
    name = "Overpass failure is reported without geocoding"
)]
fn overpass_failure_is_reported_without_geocoding(world: LocationInfoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/location_info.feature",
    name = "A geocoder failure leaves one place empty"
)]
fn a_geocoder_failure_leaves_one_place_empty(world: LocationInfoWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/location_info.feature",
    name = "Identical points are geocoded independently"
)]
fn identical_points_are_geocoded_independently(world: LocationInfoWorld) {
    drop(world);
}
