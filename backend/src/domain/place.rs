//! Place addresses resolved by reverse geocoding.

use std::collections::BTreeMap;

use serde::Serialize;

/// Address components returned by the geocoder (country, city, road, ...).
///
/// The domain treats the mapping as opaque and passes it through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlaceAddress(BTreeMap<String, String>);

impl PlaceAddress {
    /// Wrap raw address components.
    #[must_use]
    pub fn new(components: BTreeMap<String, String>) -> Self {
        Self(components)
    }

    /// Look up one address component.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use road_lookup::domain::PlaceAddress;
    ///
    /// let address = PlaceAddress::new(BTreeMap::from([
    ///     ("city".to_owned(), "Bengaluru".to_owned()),
    /// ]));
    /// assert_eq!(address.get("city"), Some("Bengaluru"));
    /// assert_eq!(address.get("country"), None);
    /// ```
    #[must_use]
    pub fn get(&self, component: &str) -> Option<&str> {
        self.0.get(component).map(String::as_str)
    }

    /// Consume the address, yielding its raw components.
    #[must_use]
    pub fn into_components(self) -> BTreeMap<String, String> {
        self.0
    }

    /// Whether the geocoder returned no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for PlaceAddress {
    fn from(components: BTreeMap<String, String>) -> Self {
        Self::new(components)
    }
}
