//! Location info API handler.
//!
//! ```text
//! POST /location-info  Classify roads near two points and resolve both places
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpRequest, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{LocationLookupRequest, LookupResult};
use crate::domain::{ClassifiedRoad, PlaceAddress};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CoordinateFields, FieldName, parse_coordinate_pair, require_present,
};

const LAT1: FieldName = FieldName::new("lat1");
const LON1: FieldName = FieldName::new("lon1");
const LAT2: FieldName = FieldName::new("lat2");
const LON2: FieldName = FieldName::new("lon2");

/// Location info request body.
///
/// Each field accepts a JSON number or a numeric string. Absent or falsy
/// values (`null`, `0`, `""`, `false`) are rejected.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LocationInfoRequest {
    /// Latitude of the first point.
    #[schema(example = 12.9716)]
    pub lat1: Option<Value>,
    /// Longitude of the first point.
    #[schema(example = 77.5946)]
    pub lon1: Option<Value>,
    /// Latitude of the second point.
    #[schema(example = "13.0827")]
    pub lat2: Option<Value>,
    /// Longitude of the second point.
    #[schema(example = "80.2707")]
    pub lon2: Option<Value>,
}

impl LocationInfoRequest {
    /// Validate the raw fields into a domain lookup request.
    fn into_lookup_request(self) -> Result<LocationLookupRequest, Error> {
        let raw = [
            (self.lat1.as_ref(), LAT1),
            (self.lon1.as_ref(), LON1),
            (self.lat2.as_ref(), LAT2),
            (self.lon2.as_ref(), LON2),
        ];
        for (value, field) in raw {
            require_present(value, field)?;
        }

        let first = parse_coordinate_pair(
            self.lat1.as_ref(),
            self.lon1.as_ref(),
            CoordinateFields {
                lat: LAT1,
                lon: LON1,
            },
        )?;
        let second = parse_coordinate_pair(
            self.lat2.as_ref(),
            self.lon2.as_ref(),
            CoordinateFields {
                lat: LAT2,
                lon: LON2,
            },
        )?;
        Ok(LocationLookupRequest { first, second })
    }
}

/// One classified road.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadBody {
    /// OSM element identifier.
    #[schema(example = 23_456_789)]
    pub id: i64,
    /// OSM element type.
    #[serde(rename = "type")]
    #[schema(example = "way")]
    pub element_type: String,
    /// Raw `highway` tag value, or `unknown`.
    #[schema(example = "primary")]
    pub road_type: String,
    /// Derived road category.
    #[schema(example = "State Highway")]
    pub road_category: String,
}

impl From<ClassifiedRoad> for RoadBody {
    fn from(road: ClassifiedRoad) -> Self {
        Self {
            id: road.id,
            element_type: road.element_type,
            road_type: road.road_type,
            road_category: road.road_category.label().to_owned(),
        }
    }
}

/// Location info response body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LocationInfoResponse {
    /// Classified roads in provider order.
    pub roads: Vec<RoadBody>,
    /// Two entries in request order; `null` when the place could not be resolved.
    pub places: Vec<Option<BTreeMap<String, String>>>,
}

impl From<LookupResult> for LocationInfoResponse {
    fn from(result: LookupResult) -> Self {
        let LookupResult { roads, places } = result;
        Self {
            roads: roads.into_iter().map(RoadBody::from).collect(),
            places: places
                .into_iter()
                .map(|place| place.map(PlaceAddress::into_components))
                .collect(),
        }
    }
}

/// JSON extractor configuration mapping body errors to `400` responses.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    })
}

/// Classify roads near two points and resolve both places.
///
/// # Errors
///
/// - `400 Bad Request`: a coordinate field is missing, falsy, non-numeric, or
///   out of range, or the body is not JSON.
/// - `500 Internal Server Error`: the Overpass query failed.
#[utoipa::path(
    post,
    path = "/location-info",
    request_body = LocationInfoRequest,
    responses(
        (status = 200, description = "Roads and places", body = LocationInfoResponse),
        (status = 400, description = "Missing or invalid coordinates", body = String, content_type = "text/plain"),
        (status = 500, description = "Overpass query failed", body = String, content_type = "text/plain")
    ),
    tags = ["location"],
    operation_id = "locationInfo"
)]
#[post("/location-info")]
pub async fn location_info(
    state: web::Data<HttpState>,
    payload: web::Json<LocationInfoRequest>,
) -> ApiResult<web::Json<LocationInfoResponse>> {
    let request = payload.into_inner().into_lookup_request()?;
    info!(
        first = %request.first,
        second = %request.second,
        "location info requested"
    );

    let result = state.road_lookup.lookup(request).await?;
    Ok(web::Json(LocationInfoResponse::from(result)))
}

#[cfg(test)]
#[path = "location_info_tests.rs"]
mod tests;
