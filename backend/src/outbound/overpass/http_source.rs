//! Reqwest-backed Overpass road source adapter.
//!
//! This adapter owns transport details only: query serialisation, timeout and
//! HTTP error mapping, and JSON decoding into domain road elements.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::OverpassResponseDto;
use crate::domain::ports::{RoadElementKinds, RoadQuery, RoadSource, RoadSourceError};
use crate::domain::{HIGHWAY_TAG, RoadElement};
use crate::outbound::body_preview;

/// Public Overpass interpreter endpoint.
pub const DEFAULT_OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
/// Default `[timeout:N]` directive embedded in queries, in seconds.
pub const DEFAULT_OVERPASS_QUERY_TIMEOUT_SECONDS: u32 = 25;

/// Overpass source adapter that POSTs Overpass QL text to one endpoint.
pub struct OverpassHttpSource {
    client: Client,
    endpoint: Url,
    query_timeout_seconds: u32,
}

impl OverpassHttpSource {
    /// Build an adapter around a client configured with timeout and user agent.
    /// ```rust,ignore
    /// let client = outbound::build_http_client(timeout, "road-lookup/0.1")?;
    /// let source = OverpassHttpSource::new(client, endpoint, 25);
    /// ```
    #[must_use]
    pub fn new(client: Client, endpoint: Url, query_timeout_seconds: u32) -> Self {
        Self {
            client,
            endpoint,
            query_timeout_seconds: query_timeout_seconds.max(1),
        }
    }
}

#[async_trait]
impl RoadSource for OverpassHttpSource {
    async fn fetch_roads(&self, query: &RoadQuery) -> Result<Vec<RoadElement>, RoadSourceError> {
        let body = build_overpass_query(query, self.query_timeout_seconds)?;
        debug!(query = %body, "sending Overpass query");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_elements(body.as_ref())
    }
}

fn parse_elements(body: &[u8]) -> Result<Vec<RoadElement>, RoadSourceError> {
    let decoded: OverpassResponseDto = serde_json::from_slice(body).map_err(|error| {
        RoadSourceError::decode(format!("invalid Overpass JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain_elements())
}

fn build_overpass_query(
    query: &RoadQuery,
    query_timeout_seconds: u32,
) -> Result<String, RoadSourceError> {
    if query.points.is_empty() {
        return Err(RoadSourceError::invalid_request(
            "road query must include at least one point",
        ));
    }
    if query.radius_metres == 0 {
        return Err(RoadSourceError::invalid_request(
            "search radius must be positive",
        ));
    }

    let element_types: &[&str] = match query.kinds {
        RoadElementKinds::NodesAndWays => &["node", "way"],
        RoadElementKinds::WaysOnly => &["way"],
    };

    let mut lines = Vec::with_capacity(element_types.len() * query.points.len());
    for element_type in element_types {
        for point in &query.points {
            lines.push(format!(
                "  {element_type}(around:{radius},{lat},{lon})[\"{HIGHWAY_TAG}\"];",
                radius = query.radius_metres,
                lat = point.lat(),
                lon = point.lon(),
            ));
        }
    }

    Ok(format!(
        "[out:json][timeout:{query_timeout_seconds}];\n(\n{query_lines}\n);\nout body;",
        query_lines = lines.join("\n")
    ))
}

fn map_transport_error(error: reqwest::Error) -> RoadSourceError {
    if error.is_timeout() {
        RoadSourceError::timeout(error.to_string())
    } else {
        RoadSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RoadSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RoadSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => RoadSourceError::status(status.as_u16(), body_preview(body)),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network Overpass mapping helpers.

    use super::*;
    use crate::domain::CoordinatePair;
    use rstest::rstest;

    fn point(lat: f64, lon: f64) -> CoordinatePair {
        CoordinatePair::new(lat, lon).expect("valid point")
    }

    fn two_point_query() -> RoadQuery {
        RoadQuery::around(vec![point(12.9716, 77.5946), point(13.0827, 80.2707)])
    }

    #[test]
    fn builds_two_point_query_with_nodes_before_ways() {
        let query = build_overpass_query(&two_point_query(), 25).expect("query should build");

        let expected = [
            "[out:json][timeout:25];",
            "(",
            "  node(around:50,12.9716,77.5946)[\"highway\"];",
            "  node(around:50,13.0827,80.2707)[\"highway\"];",
            "  way(around:50,12.9716,77.5946)[\"highway\"];",
            "  way(around:50,13.0827,80.2707)[\"highway\"];",
            ");",
            "out body;",
        ]
        .join("\n");
        assert_eq!(query, expected);
    }

    #[test]
    fn ways_only_query_omits_node_selectors() {
        let request =
            RoadQuery::around(vec![point(51.5, -0.12)]).with_kinds(RoadElementKinds::WaysOnly);
        let query = build_overpass_query(&request, 25).expect("query should build");

        assert!(query.contains("way(around:50,51.5,-0.12)[\"highway\"];"));
        assert!(!query.contains("node("), "ways-only query must not select nodes");
    }

    #[test]
    fn rejects_query_without_points() {
        let error = build_overpass_query(&RoadQuery::around(Vec::new()), 25)
            .expect_err("empty query must fail");
        assert!(matches!(error, RoadSourceError::InvalidRequest { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, false)]
    #[case::bad_request(StatusCode::BAD_REQUEST, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn maps_http_statuses_to_domain_errors(#[case] status: StatusCode, #[case] timeout: bool) {
        let error = map_status_error(status, b"{\"remark\":\"runtime error\"}");
        if timeout {
            assert!(matches!(error, RoadSourceError::Timeout { .. }));
        } else {
            assert_eq!(
                error,
                RoadSourceError::status(status.as_u16(), "{\"remark\":\"runtime error\"}")
            );
        }
    }

    #[test]
    fn parses_elements_with_and_without_tags() {
        let body = r#"{
            "version": 0.6,
            "elements": [
                { "type": "way", "id": 101, "nodes": [1, 2], "tags": { "highway": "primary", "name": "MG Road" } },
                { "type": "node", "id": 102, "lat": 12.97, "lon": 77.59 }
            ]
        }"#;

        let elements = parse_elements(body.as_bytes()).expect("JSON should decode");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].element_type, "way");
        assert_eq!(elements[0].highway_tag(), Some("primary"));
        assert_eq!(elements[1].id, 102);
        assert!(elements[1].tags.is_empty());
    }

    #[rstest]
    #[case::not_json("<html>busy</html>")]
    #[case::missing_elements("{\"remark\":\"no elements\"}")]
    #[case::string_id("{\"elements\":[{\"type\":\"way\",\"id\":\"x\"}]}")]
    fn rejects_malformed_bodies(#[case] body: &str) {
        let error = parse_elements(body.as_bytes()).expect_err("decode should fail");
        assert!(matches!(error, RoadSourceError::Decode { .. }));
    }
}
