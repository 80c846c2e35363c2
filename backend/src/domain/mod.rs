//! Domain primitives, services, and ports.
//!
//! Purpose: keep road classification and lookup orchestration free of HTTP
//! and provider details. Adapters in `inbound` and `outbound` translate to and
//! from these types.
//!
//! Public surface:
//! - `CoordinatePair`: validated WGS84 point.
//! - `RoadElement`, `ClassifiedRoad`, `RoadCategory`: road data and the
//!   canonical classification table.
//! - `PlaceAddress`: opaque geocoder address.
//! - `RoadLookupService`: implementation of the `RoadLookupQuery` port.
//! - `Error`, `ErrorCode`: transport-agnostic failures.

pub mod coordinates;
pub mod error;
pub mod place;
pub mod ports;
pub mod road;
pub mod road_lookup_service;
pub mod trace_id;

pub use self::coordinates::{CoordinatePair, CoordinateValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::place::PlaceAddress;
pub use self::road::{
    ClassifiedRoad, HIGHWAY_TAG, RoadCategory, RoadElement, UNKNOWN_ROAD_TYPE, classify_roads,
};
pub use self::road_lookup_service::{ROAD_SOURCE_FAILURE_MESSAGE, RoadLookupService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
