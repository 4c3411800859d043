use std::path::{Path, PathBuf};

use satsang_model::CatalogKind;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::snapshot::CatalogSnapshot;

/// One snapshot reference inside a library manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSource {
    pub kind: CatalogKind,
    pub path: PathBuf,
}

/// Top-level library manifest (`library.toml`): which catalog families a
/// deployment ships and where their snapshots live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub catalogs: Vec<CatalogSource>,
}

impl LibraryConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Reads a manifest and rebases relative snapshot paths onto the
    /// manifest's directory, keeping a library relocatable as a unit.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&raw)?;
        if let Some(base) = path.parent() {
            for source in &mut config.catalogs {
                if source.path.is_relative() {
                    source.path = base.join(&source.path);
                }
            }
        }
        Ok(config)
    }

    /// Loads every referenced snapshot and assembles the catalogs, in
    /// manifest order. A snapshot whose declared kind disagrees with the
    /// manifest entry is a publishing error and fails the whole load.
    pub fn load_catalogs(&self) -> Result<Vec<Catalog>> {
        let mut catalogs = Vec::with_capacity(self.catalogs.len());
        for source in &self.catalogs {
            let snapshot = CatalogSnapshot::from_path(&source.path)?;
            if snapshot.kind != source.kind {
                return Err(CatalogError::InvalidSnapshot(format!(
                    "{} declares kind {} but manifest expects {}",
                    source.path.display(),
                    snapshot.kind,
                    source.kind
                )));
            }
            let catalog = Catalog::from_snapshot(snapshot);
            info!(
                "Loaded {} catalog with {} entries",
                catalog.kind(),
                catalog.len()
            );
            catalogs.push(catalog);
        }
        Ok(catalogs)
    }
}
