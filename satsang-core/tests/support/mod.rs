//! Shared fixtures for catalog integration tests.
#![allow(dead_code)]

use satsang_model::{
    BookCategory, BookID, BookSummary, CatalogEntry, GeoPoint, PlaceCategory,
    PlaceID, PlaceSummary, Route, RouteID, TeachingCategory, TeachingID,
    TeachingSummary,
};

pub fn place(
    title: &str,
    description: &str,
    category: PlaceCategory,
) -> (PlaceID, CatalogEntry) {
    let id = PlaceID::new();
    (id, place_with_id(id, title, description, category, None))
}

pub fn place_at(
    title: &str,
    description: &str,
    category: PlaceCategory,
    lat: f64,
    lng: f64,
) -> (PlaceID, CatalogEntry) {
    let id = PlaceID::new();
    (
        id,
        place_with_id(
            id,
            title,
            description,
            category,
            Some(GeoPoint { lat, lng }),
        ),
    )
}

pub fn place_with_id(
    id: PlaceID,
    title: &str,
    description: &str,
    category: PlaceCategory,
    coordinates: Option<GeoPoint>,
) -> CatalogEntry {
    CatalogEntry::Place(PlaceSummary {
        id,
        title: title.into(),
        description: description.into(),
        category,
        thumbnail: None,
        coordinates,
    })
}

pub fn teaching(
    title: &str,
    description: &str,
    category: TeachingCategory,
) -> CatalogEntry {
    CatalogEntry::Teaching(TeachingSummary {
        id: TeachingID::new(),
        title: title.into(),
        description: description.into(),
        category,
        thumbnail: None,
        duration_secs: None,
        author: None,
    })
}

pub fn book(
    title: &str,
    description: &str,
    category: BookCategory,
    chapter_count: u32,
) -> CatalogEntry {
    CatalogEntry::Book(BookSummary {
        id: BookID::new(),
        title: title.into(),
        description: description.into(),
        category,
        thumbnail: None,
        chapter_count,
        author: None,
    })
}

pub fn route(name: &str, places: Vec<PlaceID>) -> Route {
    Route {
        id: RouteID::new(),
        name: name.into(),
        description: format!("{name} fixture route"),
        thumbnail: None,
        places,
    }
}

/// Three Varanasi-area places: the city, a temple whose description
/// mentions the city, and a ghat. Covers title hits, description hits,
/// and category splits in one fixture.
pub fn varanasi_places() -> (Vec<PlaceID>, Vec<CatalogEntry>) {
    let (city_id, city) = place_at(
        "Varanasi",
        "City of light on the Ganga",
        PlaceCategory::City,
        25.3176,
        82.9739,
    );
    let (temple_id, temple) = place_at(
        "Kashi Vishwanath Temple",
        "Jyotirlinga shrine in Varanasi",
        PlaceCategory::Temple,
        25.3109,
        83.0107,
    );
    let (ghat_id, ghat) = place_at(
        "Dashashwamedh Ghat",
        "Evening aarti steps in Varanasi",
        PlaceCategory::Ghat,
        25.3052,
        83.0111,
    );
    (vec![city_id, temple_id, ghat_id], vec![city, temple, ghat])
}
