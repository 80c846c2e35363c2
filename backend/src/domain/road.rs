//! Road elements returned by the road-data provider and their classification.
//!
//! Classification is a pure lookup on the OSM `highway` tag value. Every
//! entry point (HTTP and CLI) goes through [`RoadCategory::from_highway_tag`]
//! so there is exactly one rule table.

use std::collections::BTreeMap;

use serde::Serialize;

/// OSM tag key carrying the road class.
pub const HIGHWAY_TAG: &str = "highway";

/// Road type reported when an element carries no `highway` tag.
pub const UNKNOWN_ROAD_TYPE: &str = "unknown";

/// Coarse road category derived from the `highway` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoadCategory {
    /// `motorway`, `trunk`.
    #[serde(rename = "National Highway")]
    NationalHighway,
    /// `primary`, `secondary`.
    #[serde(rename = "State Highway")]
    StateHighway,
    /// `service`.
    #[serde(rename = "Service Road")]
    ServiceRoad,
    /// `residential`, `tertiary`.
    #[serde(rename = "Local Road")]
    LocalRoad,
    /// Any other value, or no tag at all.
    Unknown,
}

impl RoadCategory {
    /// Classify a raw `highway` tag value. Matching is exact and case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use road_lookup::domain::RoadCategory;
    ///
    /// assert_eq!(RoadCategory::from_highway_tag(Some("trunk")), RoadCategory::NationalHighway);
    /// assert_eq!(RoadCategory::from_highway_tag(Some("Trunk")), RoadCategory::Unknown);
    /// assert_eq!(RoadCategory::from_highway_tag(None), RoadCategory::Unknown);
    /// ```
    #[must_use]
    pub fn from_highway_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("motorway" | "trunk") => Self::NationalHighway,
            Some("primary" | "secondary") => Self::StateHighway,
            Some("service") => Self::ServiceRoad,
            Some("residential" | "tertiary") => Self::LocalRoad,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label, identical to the serialised form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NationalHighway => "National Highway",
            Self::StateHighway => "State Highway",
            Self::ServiceRoad => "Service Road",
            Self::LocalRoad => "Local Road",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RoadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One map element returned by the road-data provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadElement {
    /// Raw OSM element identifier.
    pub id: i64,
    /// OSM element type (`node` or `way`).
    pub element_type: String,
    /// Raw OSM tags; empty when the provider sent none.
    pub tags: BTreeMap<String, String>,
}

impl RoadElement {
    /// Value of the `highway` tag, if present.
    #[must_use]
    pub fn highway_tag(&self) -> Option<&str> {
        self.tags.get(HIGHWAY_TAG).map(String::as_str)
    }

    /// Classify this element.
    #[must_use]
    pub fn classify(&self) -> ClassifiedRoad {
        let tag = self.highway_tag();
        ClassifiedRoad {
            id: self.id,
            element_type: self.element_type.clone(),
            road_type: tag.unwrap_or(UNKNOWN_ROAD_TYPE).to_owned(),
            road_category: RoadCategory::from_highway_tag(tag),
        }
    }
}

/// A road element annotated with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRoad {
    /// Raw OSM element identifier.
    pub id: i64,
    /// OSM element type.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Raw `highway` tag value, or `unknown`.
    pub road_type: String,
    /// Derived category; always set.
    pub road_category: RoadCategory,
}

/// Classify elements, preserving provider order.
#[must_use]
pub fn classify_roads(elements: &[RoadElement]) -> Vec<ClassifiedRoad> {
    elements.iter().map(RoadElement::classify).collect()
}
