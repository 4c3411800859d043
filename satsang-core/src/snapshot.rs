use std::path::Path;

use chrono::{DateTime, Utc};
use satsang_model::{CatalogEntry, CatalogKind, Route};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// On-disk form of one catalog family, shipped to clients as JSON.
///
/// Decoding is strict about shape but deliberately lenient about content;
/// row-level hygiene happens in
/// [`Catalog::from_snapshot`](crate::Catalog::from_snapshot) so one bad row
/// never poisons a whole load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub kind: CatalogKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl CatalogSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Reading catalog snapshot from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
