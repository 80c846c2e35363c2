//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the location info endpoint, its request and response
//! bodies, and the health probes. The generated document is served by
//! Swagger UI in debug builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::location_info::{LocationInfoRequest, LocationInfoResponse, RoadBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Road lookup API",
        description = "Classify roads near two coordinates and resolve their addresses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::location_info::location_info,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(LocationInfoRequest, LocationInfoResponse, RoadBody)),
    tags(
        (name = "location", description = "Road classification and reverse geocoding"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[test]
    fn registers_all_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/location-info", "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn request_schema_lists_coordinate_fields() {
        let fields = schema_fields("LocationInfoRequest");
        assert_eq!(fields, ["lat1", "lat2", "lon1", "lon2"]);
    }

    #[test]
    fn road_schema_uses_wire_names() {
        let fields = schema_fields("RoadBody");
        for field in ["id", "type", "roadType", "roadCategory"] {
            assert!(fields.iter().any(|f| f == field), "missing field {field}");
        }
    }
}
