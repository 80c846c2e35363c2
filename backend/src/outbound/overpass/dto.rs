//! DTOs for decoding Overpass JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! road elements in one pass.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::RoadElement;

#[derive(Debug, Deserialize)]
pub(super) struct OverpassResponseDto {
    pub(super) elements: Vec<OverpassElementDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OverpassElementDto {
    #[serde(rename = "type")]
    pub(super) element_type: String,
    pub(super) id: i64,
    #[serde(default)]
    pub(super) tags: Option<BTreeMap<String, String>>,
}

impl OverpassResponseDto {
    pub(super) fn into_domain_elements(self) -> Vec<RoadElement> {
        self.elements
            .into_iter()
            .map(OverpassElementDto::into_domain_element)
            .collect()
    }
}

impl OverpassElementDto {
    fn into_domain_element(self) -> RoadElement {
        RoadElement {
            id: self.id,
            element_type: self.element_type,
            tags: self.tags.unwrap_or_default(),
        }
    }
}
