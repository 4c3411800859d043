use std::fmt;

/// The four browsable catalog families on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CatalogKind {
    Places,
    Teachings,
    Books,
    Meditations,
}

impl CatalogKind {
    pub fn all() -> &'static [CatalogKind] {
        use CatalogKind::*;
        &[Places, Teachings, Books, Meditations]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Places => "Places",
            CatalogKind::Teachings => "Teachings",
            CatalogKind::Books => "Books",
            CatalogKind::Meditations => "Meditations",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
