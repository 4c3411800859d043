//! Core data model definitions shared across Satsang crates.
#![allow(missing_docs)]

pub mod catalog_kind;
pub mod category;
pub mod entry;
pub mod entry_id;
pub mod error;
pub mod geo;
pub mod ids;
pub mod prelude;
pub mod route;

// Intentionally curated re-exports for downstream consumers.
pub use catalog_kind::CatalogKind;
pub use category::{
    BookCategory, Category, MeditationCategory, PlaceCategory,
    TeachingCategory,
};
pub use entry::{
    BookSummary, CatalogEntry, EntryLike, MeditationSummary, PlaceSummary,
    TeachingSummary,
};
pub use entry_id::EntryID;
pub use error::{ModelError, Result as ModelResult};
pub use geo::GeoPoint;
pub use ids::{BookID, MeditationID, PlaceID, RouteID, TeachingID};
pub use route::Route;
