//! Shared fixtures for browse integration tests.
#![allow(dead_code)]

use satsang_core::{Catalog, CatalogRepository};
use satsang_model::{
    BookCategory, BookID, BookSummary, CatalogEntry, CatalogKind, EntryID,
    EntryLike, GeoPoint, PlaceCategory, PlaceID, PlaceSummary, Route,
    RouteID,
};

pub fn place(
    title: &str,
    description: &str,
    category: PlaceCategory,
) -> (PlaceID, CatalogEntry) {
    let id = PlaceID::new();
    let entry = CatalogEntry::Place(PlaceSummary {
        id,
        title: title.into(),
        description: description.into(),
        category,
        thumbnail: None,
        coordinates: Some(GeoPoint { lat: 25.3, lng: 83.0 }),
    });
    (id, entry)
}

pub fn book(title: &str, description: &str) -> CatalogEntry {
    CatalogEntry::Book(BookSummary {
        id: BookID::new(),
        title: title.into(),
        description: description.into(),
        category: BookCategory::Scripture,
        thumbnail: None,
        chapter_count: 18,
        author: None,
    })
}

pub struct PlacesFixture {
    pub catalog: Catalog,
    /// city, kashi temple, ghat, kedarnath
    pub ids: Vec<PlaceID>,
    /// Walks ghat -> city, deliberately against catalog order
    pub walk: RouteID,
}

/// Four places: three tied to Varanasi by title or description, plus
/// Kedarnath as the odd one out, and one curated walk.
pub fn varanasi_fixture() -> PlacesFixture {
    let (city, city_entry) = place(
        "Varanasi",
        "City of light on the Ganga",
        PlaceCategory::City,
    );
    let (temple, temple_entry) = place(
        "Kashi Vishwanath Temple",
        "Jyotirlinga shrine in Varanasi",
        PlaceCategory::Temple,
    );
    let (ghat, ghat_entry) = place(
        "Dashashwamedh Ghat",
        "Evening aarti steps in Varanasi",
        PlaceCategory::Ghat,
    );
    let (kedarnath, kedarnath_entry) = place(
        "Kedarnath Temple",
        "High Himalayan shrine",
        PlaceCategory::Temple,
    );

    let walk = RouteID::new();
    let route = Route {
        id: walk,
        name: "Evening walk".into(),
        description: "Ghat first, then back through the lanes".into(),
        thumbnail: None,
        places: vec![ghat, city],
    };

    let catalog = Catalog::new(
        CatalogKind::Places,
        vec![city_entry, temple_entry, ghat_entry, kedarnath_entry],
        vec![route],
    );

    PlacesFixture {
        catalog,
        ids: vec![city, temple, ghat, kedarnath],
        walk,
    }
}

/// Bare-bones repository over plain vectors, standing in for a non-resident
/// backend. Proves sessions only need the port, not the concrete catalog.
#[derive(Debug)]
pub struct ScriptedRepository {
    pub kind: CatalogKind,
    pub entries: Vec<CatalogEntry>,
    pub routes: Vec<Route>,
}

impl CatalogRepository for ScriptedRepository {
    fn kind(&self) -> CatalogKind {
        self.kind
    }

    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn entry(&self, id: &EntryID) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.entry_id() == *id)
    }

    fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn route(&self, id: &RouteID) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == *id)
    }
}
