//! Scenario-world methods for location info BDD tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{App, test, web};
use road_lookup::domain::RoadElement;
use road_lookup::domain::RoadLookupService;
use road_lookup::inbound::http::location_info::{json_config, location_info};
use road_lookup::inbound::http::state::HttpState;
use serde_json::Value;

use crate::{LocationInfoWorld, ResponseSnapshot, ScriptedGeocoder, ScriptedRoadSource};

fn element(id: i64, element_type: &str, highway: Option<&str>) -> RoadElement {
    RoadElement {
        id,
        element_type: element_type.to_owned(),
        tags: highway
            .map(|value| BTreeMap::from([("highway".to_owned(), value.to_owned())]))
            .unwrap_or_default(),
    }
}

/// Elements covering a known category, a service road, an unlisted tag, and
/// a missing tag, in that order.
pub fn mixed_elements() -> Vec<RoadElement> {
    vec![
        element(101, "way", Some("motorway")),
        element(102, "way", Some("service")),
        element(103, "node", Some("footway")),
        element(104, "node", None),
    ]
}

impl LocationInfoWorld {
    pub fn use_road_source(&self, source: ScriptedRoadSource) {
        self.road_source.set(Arc::new(source));
    }

    pub fn use_geocoder(&self, geocoder: ScriptedGeocoder) {
        self.geocoder.set(Arc::new(geocoder));
    }

    /// Post `body` to `/location-info` through the real handler and service.
    pub fn post_location_info(&self, body: Value) {
        let road_source = self.road_source.get().expect("road source should be set");
        let geocoder = self.geocoder.get().expect("geocoder should be set");
        let service = RoadLookupService::new(road_source, geocoder);
        let state = HttpState::new(Arc::new(service));

        let snapshot = actix_rt::System::new().block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .app_data(json_config())
                    .service(location_info),
            )
            .await;
            let request = test::TestRequest::post()
                .uri("/location-info")
                .set_json(&body)
                .to_request();
            let response = test::call_service(&app, request).await;
            let status = response.status().as_u16();
            let bytes = test::read_body(response).await;
            ResponseSnapshot {
                status,
                body: String::from_utf8(bytes.to_vec()).expect("utf8 body"),
            }
        });
        self.response.set(snapshot);
    }

    pub fn last_response(&self) -> ResponseSnapshot {
        self.response.get().expect("a request should have been sent")
    }
}
