//! Assembly-time hygiene: what a catalog accepts, skips, and sanitizes.

mod support;

use satsang_core::{Catalog, CatalogSnapshot};
use satsang_model::{
    CatalogKind, EntryID, EntryLike, PlaceCategory, PlaceID,
    TeachingCategory,
};
use support::{place, place_with_id, route, teaching, varanasi_places};

#[test]
fn duplicate_entry_ids_keep_the_first_occurrence() {
    let id = PlaceID::new();
    let first = place_with_id(
        id,
        "Kedarnath Temple",
        "High Himalayan shrine",
        PlaceCategory::Temple,
        None,
    );
    let second = place_with_id(
        id,
        "Kedarnath Temple (stale)",
        "Republished row",
        PlaceCategory::Temple,
        None,
    );

    let catalog =
        Catalog::new(CatalogKind::Places, vec![first, second], Vec::new());

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].title(), "Kedarnath Temple");
}

#[test]
fn foreign_kind_entries_are_skipped() {
    let (_, kedarnath) = place(
        "Kedarnath Temple",
        "High Himalayan shrine",
        PlaceCategory::Temple,
    );
    let stray = teaching(
        "On Stillness",
        "Morning talk",
        TeachingCategory::Audio,
    );

    let catalog =
        Catalog::new(CatalogKind::Places, vec![stray, kedarnath], Vec::new());

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].kind(), CatalogKind::Places);
}

#[test]
fn out_of_range_coordinates_are_stripped_but_entry_survives() {
    let id = PlaceID::new();
    let entry = place_with_id(
        id,
        "Nowhere Shrine",
        "Bad publishing coordinates",
        PlaceCategory::Temple,
        Some(satsang_model::GeoPoint { lat: 95.0, lng: 83.0 }),
    );

    let catalog = Catalog::new(CatalogKind::Places, vec![entry], Vec::new());

    let kept = catalog
        .entry(&EntryID::Place(id))
        .and_then(|entry| entry.as_place())
        .expect("entry survives with its id intact");
    assert!(kept.coordinates.is_none());
}

#[test]
fn in_range_coordinates_are_untouched() {
    let (ids, entries) = varanasi_places();

    let catalog = Catalog::new(CatalogKind::Places, entries, Vec::new());

    let city = catalog
        .entry(&EntryID::Place(ids[0]))
        .and_then(|entry| entry.as_place())
        .expect("city place");
    assert!(city.coordinates.is_some());
}

#[test]
fn routes_on_a_non_places_catalog_are_discarded() {
    let gita = teaching(
        "Reading the Gita Slowly",
        "Guided reading course",
        TeachingCategory::Course,
    );
    let stray_route = route("Char Dham", vec![PlaceID::new()]);

    let catalog = Catalog::new(
        CatalogKind::Teachings,
        vec![gita],
        vec![stray_route],
    );

    assert_eq!(catalog.len(), 1);
    assert!(catalog.routes().is_empty());
}

#[test]
fn snapshot_assembly_applies_the_same_hygiene() {
    let id = PlaceID::new();
    let snapshot = CatalogSnapshot {
        kind: CatalogKind::Places,
        generated_at: None,
        entries: vec![
            place_with_id(id, "Varanasi", "City of light", PlaceCategory::City, None),
            place_with_id(id, "Varanasi (dup)", "Again", PlaceCategory::City, None),
            teaching("Stray", "Wrong family", TeachingCategory::Article),
        ],
        routes: Vec::new(),
    };

    let catalog = Catalog::from_snapshot(snapshot);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].title(), "Varanasi");
}

#[test]
fn point_lookup_finds_assembled_entries() {
    let (ids, entries) = varanasi_places();
    let catalog = Catalog::new(CatalogKind::Places, entries, Vec::new());

    let ghat = catalog.entry(&EntryID::Place(ids[2])).expect("ghat by id");
    assert_eq!(ghat.title(), "Dashashwamedh Ghat");
    assert!(catalog.entry(&EntryID::Place(PlaceID::new())).is_none());
}
