use crate::catalog_kind::CatalogKind;
use crate::ids::{BookID, MeditationID, PlaceID, TeachingID};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryID {
    Place(PlaceID),
    Teaching(TeachingID),
    Book(BookID),
    Meditation(MeditationID),
}

impl EntryID {
    pub fn as_uuid(&self) -> &Uuid {
        match &self {
            EntryID::Place(place_id) => place_id.as_uuid(),
            EntryID::Teaching(teaching_id) => teaching_id.as_uuid(),
            EntryID::Book(book_id) => book_id.as_uuid(),
            EntryID::Meditation(meditation_id) => meditation_id.as_uuid(),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self {
            EntryID::Place(_) => CatalogKind::Places,
            EntryID::Teaching(_) => CatalogKind::Teachings,
            EntryID::Book(_) => CatalogKind::Books,
            EntryID::Meditation(_) => CatalogKind::Meditations,
        }
    }
}

impl std::fmt::Display for EntryID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryID::Place(id) => write!(f, "Place({})", id.as_str()),
            EntryID::Teaching(id) => write!(f, "Teaching({})", id.as_str()),
            EntryID::Book(id) => write!(f, "Book({})", id.as_str()),
            EntryID::Meditation(id) => write!(f, "Meditation({})", id.as_str()),
        }
    }
}

impl From<PlaceID> for EntryID {
    fn from(id: PlaceID) -> Self {
        EntryID::Place(id)
    }
}

impl From<TeachingID> for EntryID {
    fn from(id: TeachingID) -> Self {
        EntryID::Teaching(id)
    }
}

impl From<BookID> for EntryID {
    fn from(id: BookID) -> Self {
        EntryID::Book(id)
    }
}

impl From<MeditationID> for EntryID {
    fn from(id: MeditationID) -> Self {
        EntryID::Meditation(id)
    }
}
