use crate::ids::{PlaceID, RouteID};

/// Curated pilgrimage route over the places catalog.
///
/// `places` is ordered; positions drive the numbered stop badges, so the
/// sequence must survive storage and projection untouched. Routes are
/// read-only from the browsing layer's point of view.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteID,
    pub name: String,
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub places: Vec<PlaceID>,
}

impl Route {
    pub fn stop_count(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
