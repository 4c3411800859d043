//! Session-level visibility: filters, route projection, and the
//! repository seam.

mod common;

use std::sync::Arc;

use common::{book, varanasi_fixture, ScriptedRepository};
use satsang_browse::{BrowseSession, ViewMode};
use satsang_model::{
    CatalogKind, EntryLike, PlaceCategory, Route, RouteID,
};

#[test]
fn session_adopts_the_catalog_family() {
    let fixture = varanasi_fixture();
    let session = BrowseSession::new(Arc::new(fixture.catalog));
    assert_eq!(session.state().kind, CatalogKind::Places);
}

#[test]
fn search_then_chip_narrows_then_clear_restores() {
    let fixture = varanasi_fixture();
    let mut session = BrowseSession::new(Arc::new(fixture.catalog));
    assert_eq!(session.visible().len(), 4);

    session.set_search_term("Varanasi");
    let hits = session.visible();
    assert_eq!(hits.len(), 3);
    // Catalog order survives filtering.
    assert_eq!(hits[0].title(), "Varanasi");
    assert_eq!(hits[1].title(), "Kashi Vishwanath Temple");
    assert_eq!(hits[2].title(), "Dashashwamedh Ghat");

    session.toggle_category(PlaceCategory::Temple.into());
    let narrowed = session.visible();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].title(), "Kashi Vishwanath Temple");

    // Untoggling the chip re-widens to the term matches.
    session.toggle_category(PlaceCategory::Temple.into());
    assert_eq!(session.visible().len(), 3);

    session.toggle_category(PlaceCategory::Temple.into());
    session.clear_filters();
    assert_eq!(session.visible().len(), 4);
}

#[test]
fn conflicting_term_and_chip_yield_an_empty_page() {
    let (_, varanasi) =
        common::place("Varanasi", "City of light", PlaceCategory::City);
    let (_, kedarnath) = common::place(
        "Kedarnath Temple",
        "High Himalayan shrine",
        PlaceCategory::Temple,
    );
    let repository = ScriptedRepository {
        kind: CatalogKind::Places,
        entries: vec![varanasi, kedarnath],
        routes: Vec::new(),
    };
    let mut session = BrowseSession::new(Arc::new(repository));

    session.set_search_term("temple");
    let hits = session.visible();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title(), "Kedarnath Temple");

    // The only term match is a temple; the city chip empties the page.
    session.toggle_category(PlaceCategory::City.into());
    assert!(session.visible().is_empty());

    session.clear_filters();
    let all = session.visible();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title(), "Varanasi");
    assert_eq!(all[1].title(), "Kedarnath Temple");
}

#[test]
fn chip_alone_filters_by_family_category() {
    let fixture = varanasi_fixture();
    let mut session = BrowseSession::new(Arc::new(fixture.catalog));

    session.toggle_category(PlaceCategory::Temple.into());
    let temples = session.visible();
    assert_eq!(temples.len(), 2);
    assert!(temples.iter().all(|entry| {
        entry.category() == PlaceCategory::Temple.into()
    }));
}

#[test]
fn selected_route_replaces_filter_results() {
    let fixture = varanasi_fixture();
    let walk = fixture.walk;
    let mut session = BrowseSession::new(Arc::new(fixture.catalog));

    session.set_search_term("Kedarnath");
    assert_eq!(session.visible().len(), 1);

    session.select_route(walk);
    let stops = session.visible();
    // Route order, not catalog order, and the filter does not leak in.
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].title(), "Dashashwamedh Ghat");
    assert_eq!(stops[1].title(), "Varanasi");

    // The filter itself is untouched while the route is shown.
    assert!(session.state().is_filtered());

    session.clear_route();
    let back = session.visible();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].title(), "Kedarnath Temple");
}

#[test]
fn route_stops_are_numbered_from_one() {
    let fixture = varanasi_fixture();
    let walk = fixture.walk;
    let mut session = BrowseSession::new(Arc::new(fixture.catalog));

    assert!(session.route_stops().is_empty());

    session.select_route(walk);
    let stops = session.route_stops();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].0, 1);
    assert_eq!(stops[0].1.title(), "Dashashwamedh Ghat");
    assert_eq!(stops[1].0, 2);
    assert_eq!(stops[1].1.title(), "Varanasi");
}

#[test]
fn unknown_route_shows_an_empty_page() {
    let fixture = varanasi_fixture();
    let mut session = BrowseSession::new(Arc::new(fixture.catalog));

    session.select_route(RouteID::new());
    assert!(session.visible().is_empty());
    assert!(session.route_stops().is_empty());
}

#[test]
fn dangling_route_references_are_omitted() {
    let entries: Vec<_> = ["Varanasi", "Rishikesh"]
        .into_iter()
        .map(|title| {
            common::place(title, "River town", PlaceCategory::City)
        })
        .collect();
    let kept = entries[1].0;
    let route_id = RouteID::new();
    let repository = ScriptedRepository {
        kind: CatalogKind::Places,
        entries: entries.into_iter().map(|(_, entry)| entry).collect(),
        routes: vec![Route {
            id: route_id,
            name: "Partial walk".into(),
            description: "One stop has been retired".into(),
            thumbnail: None,
            places: vec![satsang_model::PlaceID::new(), kept],
        }],
    };

    let mut session = BrowseSession::new(Arc::new(repository));
    session.select_route(route_id);

    let stops = session.route_stops();
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0], (1, session.visible()[0]));
    assert_eq!(stops[0].1.title(), "Rishikesh");
}

#[test]
fn empty_catalog_is_a_valid_page() {
    let repository = ScriptedRepository {
        kind: CatalogKind::Books,
        entries: Vec::new(),
        routes: Vec::new(),
    };
    let mut session = BrowseSession::new(Arc::new(repository));

    assert!(session.visible().is_empty());
    session.set_search_term("gita");
    assert!(session.visible().is_empty());
}

#[test]
fn sessions_work_against_any_repository_impl() {
    let repository = ScriptedRepository {
        kind: CatalogKind::Books,
        entries: vec![
            book("Bhagavad Gītā", "Song of the Lord"),
            book("Jnaneshwari", "Verse commentary on the Gita"),
        ],
        routes: Vec::new(),
    };
    let mut session = BrowseSession::new(Arc::new(repository));

    session.set_search_term("gita");
    let hits = session.visible();
    // Unicode lowercase matching: the ASCII needle only hits the plain
    // description, not the composed title.
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title(), "Jnaneshwari");
}

#[test]
fn view_mode_round_trip_leaves_visibility_alone() {
    let fixture = varanasi_fixture();
    let mut session = BrowseSession::new(Arc::new(fixture.catalog));
    session.set_search_term("Varanasi");
    let before = session.visible().len();

    session.set_view_mode(ViewMode::Map);
    session.measure_surface(1280.0, 720.0);
    assert!(session.map_ready());
    assert_eq!(session.visible().len(), before);

    session.set_view_mode(ViewMode::Grid);
    assert!(!session.map_ready());
    assert_eq!(session.visible().len(), before);
}
