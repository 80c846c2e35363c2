//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod reverse_geocoder;
mod road_lookup_query;
mod road_source;

#[cfg(test)]
pub use reverse_geocoder::MockReverseGeocoder;
pub use reverse_geocoder::{FixtureReverseGeocoder, ReverseGeocoder, ReverseGeocoderError};
#[cfg(test)]
pub use road_lookup_query::MockRoadLookupQuery;
pub use road_lookup_query::{
    LocationLookupRequest, LookupResult, RoadLookupQuery, WaypointOptions, WaypointReport,
};
#[cfg(test)]
pub use road_source::MockRoadSource;
pub use road_source::{
    DEFAULT_SEARCH_RADIUS_METRES, FixtureRoadSource, RoadElementKinds, RoadQuery, RoadSource,
    RoadSourceError,
};
