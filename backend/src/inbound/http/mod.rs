//! HTTP inbound adapter exposing the road lookup API.

pub mod error;
pub mod health;
pub mod location_info;
pub mod state;
mod validation;

pub use error::ApiResult;
