//! Browse/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in satsang-browse or other presentation layers.

pub use super::catalog_kind::CatalogKind;
pub use super::category::{
    BookCategory, Category, MeditationCategory, PlaceCategory,
    TeachingCategory,
};
pub use super::entry::{
    BookSummary, CatalogEntry, EntryLike, MeditationSummary, PlaceSummary,
    TeachingSummary,
};
pub use super::entry_id::EntryID;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::geo::GeoPoint;
pub use super::ids::{BookID, MeditationID, PlaceID, RouteID, TeachingID};
pub use super::route::Route;
