//! Session facade tying browse state to a resident catalog.

use std::fmt;
use std::sync::Arc;

use satsang_core::{CatalogRepository, FilterSpec};
use satsang_model::{CatalogEntry, Category, EntryID, Route, RouteID};

use crate::messages::Message;
use crate::state::{BrowseState, ViewMode};
use crate::update::update;

/// One user's view onto one catalog.
///
/// Owns the page state plus a handle to the loaded catalog; every catalog
/// page gets an independent session and nothing mutable is shared between
/// them. All reads run synchronously against already-resident data, so
/// hosts can call [`BrowseSession::visible`] on every keystroke.
pub struct BrowseSession {
    repository: Arc<dyn CatalogRepository>,
    state: BrowseState,
}

impl BrowseSession {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        let state = BrowseState::new(repository.kind());
        BrowseSession { repository, state }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Feeds one message through the reducer.
    pub fn apply(&mut self, message: Message) {
        update(&mut self.state, message);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.apply(Message::SearchTermChanged(term.into()));
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.apply(Message::CategoryToggled(category));
    }

    pub fn clear_filters(&mut self) {
        self.apply(Message::FiltersCleared);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.apply(Message::ViewModeSet(mode));
    }

    pub fn select_route(&mut self, route_id: RouteID) {
        self.apply(Message::RouteSelected(route_id));
    }

    pub fn clear_route(&mut self) {
        self.apply(Message::RouteCleared);
    }

    pub fn measure_surface(&mut self, width: f32, height: f32) {
        self.apply(Message::SurfaceMeasured { width, height });
    }

    pub fn map_ready(&self) -> bool {
        self.state.map_ready()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    /// Filter derived from the live state, ready to run against the
    /// catalog slice.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::new(
            self.state.search_term.clone(),
            self.state.selected_category,
        )
    }

    /// What the page shows right now.
    ///
    /// With a route selected this is exactly that route's stops in route
    /// order; otherwise the current filter applied to the catalog in
    /// source order. Empty is a normal result, never an error.
    pub fn visible(&self) -> Vec<&CatalogEntry> {
        if let Some(route_id) = self.state.selected_route {
            return match self.repository.route(&route_id) {
                Some(route) => self.project(route),
                None => {
                    log::warn!(
                        "Selected route {route_id} is unknown to the catalog"
                    );
                    Vec::new()
                }
            };
        }
        self.filter_spec().apply(self.repository.entries())
    }

    /// Numbered stops for the selected route, 1-based so sequence badges
    /// read naturally. Empty when no route is selected.
    pub fn route_stops(&self) -> Vec<(usize, &CatalogEntry)> {
        let Some(route_id) = self.state.selected_route else {
            return Vec::new();
        };
        match self.repository.route(&route_id) {
            Some(route) => self
                .project(route)
                .into_iter()
                .enumerate()
                .map(|(index, entry)| (index + 1, entry))
                .collect(),
            None => {
                log::warn!(
                    "Selected route {route_id} is unknown to the catalog"
                );
                Vec::new()
            }
        }
    }

    // Dangling references are dropped; the sequence just shortens.
    fn project(&self, route: &Route) -> Vec<&CatalogEntry> {
        route
            .places
            .iter()
            .filter_map(|place_id| {
                self.repository.entry(&EntryID::Place(*place_id))
            })
            .collect()
    }
}

impl fmt::Debug for BrowseSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowseSession")
            .field("kind", &self.repository.kind())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
