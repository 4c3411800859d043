//! Browse state for one catalog page.

use satsang_model::{CatalogKind, Category, RouteID};

/// How the catalog page presents its visible entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Card grid, the landing presentation for every catalog
    #[default]
    Grid,
    /// Map with one pin per located place
    Map,
}

/// Mount gate for the map container.
///
/// The map widget must not render before its container reports a final
/// non-zero size; painting into an unsized surface leaves a corrupt first
/// frame behind. The surface is torn down with its container, so leaving
/// map view always returns to `Unmounted`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MapSurface {
    /// Not in map view; no container exists
    #[default]
    Unmounted,
    /// Map view entered, waiting on the first real measurement
    Pending,
    /// Container measured; safe to render
    Ready { width: f32, height: f32 },
}

/// Per-page browsing state. Created fresh for every catalog page and
/// never persisted; a reload starts from defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    /// Which catalog family this page browses
    pub kind: CatalogKind,
    /// Raw search text as typed; empty means no text filter
    pub search_term: String,
    /// Exclusive category chip; at most one active
    pub selected_category: Option<Category>,
    pub view_mode: ViewMode,
    /// When set, the page shows that route's stops instead of filter results
    pub selected_route: Option<RouteID>,
    pub map_surface: MapSurface,
}

impl BrowseState {
    pub fn new(kind: CatalogKind) -> Self {
        BrowseState {
            kind,
            search_term: String::new(),
            selected_category: None,
            view_mode: ViewMode::default(),
            selected_route: None,
            map_surface: MapSurface::default(),
        }
    }

    /// Drops the search term and category chip. View mode and route
    /// selection are presentation choices, not filters; they stay.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_category = None;
    }

    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || self.selected_category.is_some()
    }

    /// True only in map view with a measured, non-zero surface.
    pub fn map_ready(&self) -> bool {
        self.view_mode == ViewMode::Map
            && matches!(self.map_surface, MapSurface::Ready { .. })
    }
}
