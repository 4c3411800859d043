//! # Satsang Core
//!
//! Core library for the Satsang platform: catalog assembly, filtering, and
//! library manifest loading for the place, teaching, book, and meditation
//! families.
//!
//! ## Overview
//!
//! - **Catalog Assembly**: Snapshot decoding with row-level hygiene so one
//!   bad entry never poisons a load
//! - **Query System**: Pure, order-preserving search and category filtering
//! - **Routes**: Curated pilgrimage sequences projected against the places
//!   catalog
//! - **Repository Port**: Trait seam between resident catalogs and the
//!   browsing layer
//!
//! ## Feature Flags
//!
//! - `demo`: Synthetic seed catalogs for demos and examples
//!
//! ## Examples
//!
//! ```
//! use satsang_core::{Catalog, FilterSpec};
//! use satsang_model::{
//!     CatalogEntry, CatalogKind, PlaceCategory, PlaceID, PlaceSummary,
//! };
//!
//! let entries = vec![CatalogEntry::Place(PlaceSummary {
//!     id: PlaceID::new(),
//!     title: "Kedarnath Temple".into(),
//!     description: "High Himalayan shrine".into(),
//!     category: PlaceCategory::Temple,
//!     thumbnail: None,
//!     coordinates: None,
//! })];
//!
//! let catalog = Catalog::new(CatalogKind::Places, entries, Vec::new());
//! let spec = FilterSpec::new("kedar", None);
//! assert_eq!(spec.apply(catalog.entries()).len(), 1);
//! ```
#![allow(missing_docs)]

pub mod catalog;
pub mod config;
#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
pub mod query;
pub mod repository;
pub mod snapshot;

pub use catalog::Catalog;
pub use config::{CatalogSource, LibraryConfig};
pub use error::{CatalogError, Result};
pub use query::FilterSpec;
pub use repository::CatalogRepository;
pub use snapshot::CatalogSnapshot;
