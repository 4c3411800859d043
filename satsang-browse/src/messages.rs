//! Browse domain messages

use satsang_model::{Category, RouteID};

use crate::state::ViewMode;

/// Browse domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // User actions
    /// Replace the search term with the text as typed
    SearchTermChanged(String),
    /// Exclusive category toggle: same value clears, different replaces
    CategoryToggled(Category),
    /// Reset search term and category together
    FiltersCleared,
    /// Switch between grid and map presentation
    ViewModeSet(ViewMode),
    /// Show a curated route instead of filter results
    RouteSelected(RouteID),
    /// Return from route view to filter results
    RouteCleared,

    // Host shell events
    /// Map container reported its size
    SurfaceMeasured { width: f32, height: f32 },
}
