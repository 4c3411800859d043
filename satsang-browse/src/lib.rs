//! Satsang browse library
//!
//! This crate contains the headless browsing state used by catalog pages:
//! the per-page reducer, its messages, and the session facade that derives
//! visible entries from a loaded catalog. Rendering is the host shell's
//! job; everything here is synchronous and side-effect free so the same
//! state machine drives the desktop and embedded shells alike.

pub mod messages;
pub mod session;
pub mod state;
pub mod update;

pub use messages::Message;
pub use session::BrowseSession;
pub use state::{BrowseState, MapSurface, ViewMode};
pub use update::update;
