use crate::catalog_kind::CatalogKind;
use crate::category::{
    BookCategory, Category, MeditationCategory, PlaceCategory,
    TeachingCategory,
};
use crate::entry_id::EntryID;
use crate::geo::GeoPoint;
use crate::ids::{BookID, MeditationID, PlaceID, TeachingID};

/// One catalog entry of any family. The `kind` tag on the wire selects the
/// summary variant; every variant carries the shared base fields (id,
/// title, description, category, thumbnail) plus its own extras.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum CatalogEntry {
    /// Pilgrimage place summary
    Place(PlaceSummary),
    /// Recorded teaching summary
    Teaching(TeachingSummary),
    /// Book summary
    Book(BookSummary),
    /// Guided meditation summary
    Meditation(MeditationSummary),
}

/// Lightweight place reference for lists and map pins
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceSummary {
    pub id: PlaceID,
    pub title: String,
    pub description: String,
    pub category: PlaceCategory,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub coordinates: Option<GeoPoint>,
}

/// Lightweight teaching reference for lists
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeachingSummary {
    pub id: TeachingID,
    pub title: String,
    pub description: String,
    pub category: TeachingCategory,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration_secs: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub author: Option<String>,
}

/// Lightweight book reference for lists
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookSummary {
    pub id: BookID,
    pub title: String,
    pub description: String,
    pub category: BookCategory,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chapter_count: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub author: Option<String>,
}

/// Lightweight meditation reference for lists
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeditationSummary {
    pub id: MeditationID,
    pub title: String,
    pub description: String,
    pub category: MeditationCategory,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration_secs: Option<u32>,
}

/// Shared read surface over every summary shape.
///
/// Presentation code and the query layer work against this trait so cards,
/// chips, and search never match on the concrete variant.
pub trait EntryLike {
    fn entry_id(&self) -> EntryID;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> Category;
    fn thumbnail(&self) -> Option<&str>;

    fn kind(&self) -> CatalogKind {
        self.category().kind()
    }
}

impl EntryLike for PlaceSummary {
    fn entry_id(&self) -> EntryID {
        EntryID::Place(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Category {
        Category::Place(self.category)
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

impl EntryLike for TeachingSummary {
    fn entry_id(&self) -> EntryID {
        EntryID::Teaching(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Category {
        Category::Teaching(self.category)
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

impl EntryLike for BookSummary {
    fn entry_id(&self) -> EntryID {
        EntryID::Book(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Category {
        Category::Book(self.category)
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

impl EntryLike for MeditationSummary {
    fn entry_id(&self) -> EntryID {
        EntryID::Meditation(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Category {
        Category::Meditation(self.category)
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

impl EntryLike for CatalogEntry {
    fn entry_id(&self) -> EntryID {
        match self {
            CatalogEntry::Place(place) => place.entry_id(),
            CatalogEntry::Teaching(teaching) => teaching.entry_id(),
            CatalogEntry::Book(book) => book.entry_id(),
            CatalogEntry::Meditation(meditation) => meditation.entry_id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            CatalogEntry::Place(place) => place.title(),
            CatalogEntry::Teaching(teaching) => teaching.title(),
            CatalogEntry::Book(book) => book.title(),
            CatalogEntry::Meditation(meditation) => meditation.title(),
        }
    }

    fn description(&self) -> &str {
        match self {
            CatalogEntry::Place(place) => place.description(),
            CatalogEntry::Teaching(teaching) => teaching.description(),
            CatalogEntry::Book(book) => book.description(),
            CatalogEntry::Meditation(meditation) => meditation.description(),
        }
    }

    fn category(&self) -> Category {
        match self {
            CatalogEntry::Place(place) => place.category(),
            CatalogEntry::Teaching(teaching) => teaching.category(),
            CatalogEntry::Book(book) => book.category(),
            CatalogEntry::Meditation(meditation) => meditation.category(),
        }
    }

    fn thumbnail(&self) -> Option<&str> {
        match self {
            CatalogEntry::Place(place) => place.thumbnail(),
            CatalogEntry::Teaching(teaching) => teaching.thumbnail(),
            CatalogEntry::Book(book) => book.thumbnail(),
            CatalogEntry::Meditation(meditation) => meditation.thumbnail(),
        }
    }
}

impl CatalogEntry {
    pub fn as_place(&self) -> Option<&PlaceSummary> {
        match self {
            CatalogEntry::Place(place) => Some(place),
            _ => None,
        }
    }

    pub fn as_teaching(&self) -> Option<&TeachingSummary> {
        match self {
            CatalogEntry::Teaching(teaching) => Some(teaching),
            _ => None,
        }
    }

    pub fn as_book(&self) -> Option<&BookSummary> {
        match self {
            CatalogEntry::Book(book) => Some(book),
            _ => None,
        }
    }

    pub fn as_meditation(&self) -> Option<&MeditationSummary> {
        match self {
            CatalogEntry::Meditation(meditation) => Some(meditation),
            _ => None,
        }
    }
}

impl From<PlaceSummary> for CatalogEntry {
    fn from(summary: PlaceSummary) -> Self {
        CatalogEntry::Place(summary)
    }
}

impl From<TeachingSummary> for CatalogEntry {
    fn from(summary: TeachingSummary) -> Self {
        CatalogEntry::Teaching(summary)
    }
}

impl From<BookSummary> for CatalogEntry {
    fn from(summary: BookSummary) -> Self {
        CatalogEntry::Book(summary)
    }
}

impl From<MeditationSummary> for CatalogEntry {
    fn from(summary: MeditationSummary) -> Self {
        CatalogEntry::Meditation(summary)
    }
}
