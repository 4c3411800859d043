use crate::catalog_kind::CatalogKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlaceCategory {
    Temple,
    City,
    Ashram,
    Ghat,
    Cave,
    Mountain,
}

impl PlaceCategory {
    pub fn all() -> &'static [PlaceCategory] {
        use PlaceCategory::*;
        &[Temple, City, Ashram, Ghat, Cave, Mountain]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Temple => "Temple",
            PlaceCategory::City => "City",
            PlaceCategory::Ashram => "Ashram",
            PlaceCategory::Ghat => "Ghat",
            PlaceCategory::Cave => "Cave",
            PlaceCategory::Mountain => "Mountain",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TeachingCategory {
    Video,
    Audio,
    Article,
    Course,
}

impl TeachingCategory {
    pub fn all() -> &'static [TeachingCategory] {
        use TeachingCategory::*;
        &[Video, Audio, Article, Course]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeachingCategory::Video => "Video",
            TeachingCategory::Audio => "Audio",
            TeachingCategory::Article => "Article",
            TeachingCategory::Course => "Course",
        }
    }
}

impl fmt::Display for TeachingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BookCategory {
    Scripture,
    Commentary,
    Biography,
    Practice,
}

impl BookCategory {
    pub fn all() -> &'static [BookCategory] {
        use BookCategory::*;
        &[Scripture, Commentary, Biography, Practice]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookCategory::Scripture => "Scripture",
            BookCategory::Commentary => "Commentary",
            BookCategory::Biography => "Biography",
            BookCategory::Practice => "Practice",
        }
    }
}

impl fmt::Display for BookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeditationCategory {
    Guided,
    Mantra,
    Breath,
    Silent,
}

impl MeditationCategory {
    pub fn all() -> &'static [MeditationCategory] {
        use MeditationCategory::*;
        &[Guided, Mantra, Breath, Silent]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeditationCategory::Guided => "Guided",
            MeditationCategory::Mantra => "Mantra",
            MeditationCategory::Breath => "Breath",
            MeditationCategory::Silent => "Silent",
        }
    }
}

impl fmt::Display for MeditationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category union across catalog families. An entry's category always
/// belongs to the same family as the entry itself; summary structs embed
/// their own category enum so the pairing holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Place(PlaceCategory),
    Teaching(TeachingCategory),
    Book(BookCategory),
    Meditation(MeditationCategory),
}

impl Category {
    pub fn kind(&self) -> CatalogKind {
        match self {
            Category::Place(_) => CatalogKind::Places,
            Category::Teaching(_) => CatalogKind::Teachings,
            Category::Book(_) => CatalogKind::Books,
            Category::Meditation(_) => CatalogKind::Meditations,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Place(c) => c.label(),
            Category::Teaching(c) => c.label(),
            Category::Book(c) => c.label(),
            Category::Meditation(c) => c.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<PlaceCategory> for Category {
    fn from(category: PlaceCategory) -> Self {
        Category::Place(category)
    }
}

impl From<TeachingCategory> for Category {
    fn from(category: TeachingCategory) -> Self {
        Category::Teaching(category)
    }
}

impl From<BookCategory> for Category {
    fn from(category: BookCategory) -> Self {
        Category::Book(category)
    }
}

impl From<MeditationCategory> for Category {
    fn from(category: MeditationCategory) -> Self {
        Category::Meditation(category)
    }
}
