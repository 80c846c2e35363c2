//! Nominatim outbound adapter implementing the `ReverseGeocoder` port.

mod http_geocoder;

pub use http_geocoder::{DEFAULT_NOMINATIM_ENDPOINT, NominatimHttpGeocoder};
