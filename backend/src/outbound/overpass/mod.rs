//! Overpass outbound adapter.
//!
//! A thin HTTP implementation of the `RoadSource` port.

mod dto;
mod http_source;

pub use http_source::{
    DEFAULT_OVERPASS_ENDPOINT, DEFAULT_OVERPASS_QUERY_TIMEOUT_SECONDS, OverpassHttpSource,
};
