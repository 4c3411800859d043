//! Browse domain update logic

use crate::messages::Message;
use crate::state::{BrowseState, MapSurface, ViewMode};

/// Synchronous state transition; no tasks, no I/O. Applying the same
/// message twice is always safe.
pub fn update(state: &mut BrowseState, message: Message) {
    match message {
        Message::SearchTermChanged(term) => {
            state.search_term = term;
        }

        Message::CategoryToggled(category) => {
            if category.kind() != state.kind {
                log::warn!(
                    "Ignoring {} category toggle on {} page",
                    category.kind(),
                    state.kind
                );
                return;
            }
            state.selected_category =
                if state.selected_category == Some(category) {
                    None
                } else {
                    Some(category)
                };
        }

        Message::FiltersCleared => {
            state.clear_filters();
        }

        Message::ViewModeSet(mode) => {
            if state.view_mode == mode {
                return;
            }
            state.view_mode = mode;
            state.map_surface = match mode {
                // The container mounts with the view; wait for its size.
                ViewMode::Map => MapSurface::Pending,
                // Leaving tears the container down; measurements go stale.
                ViewMode::Grid => MapSurface::Unmounted,
            };
        }

        Message::RouteSelected(route_id) => {
            state.selected_route = Some(route_id);
        }

        Message::RouteCleared => {
            state.selected_route = None;
        }

        Message::SurfaceMeasured { width, height } => {
            if state.view_mode != ViewMode::Map {
                log::debug!(
                    "Dropping surface measurement {width}x{height} outside map view"
                );
                return;
            }
            if width <= 0.0 || height <= 0.0 {
                log::debug!(
                    "Dropping zero-size surface measurement {width}x{height}"
                );
                return;
            }
            state.map_surface = MapSurface::Ready { width, height };
        }
    }
}
