//! Guided tour of a demo library: seeds snapshots to disk, loads them back
//! through the manifest pipeline, then drives one browsing session the way
//! a catalog page would.
//!
//! Run with:
//! `cargo run -p satsang-browse --example catalog_tour --features demo`

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use satsang_browse::{BrowseSession, ViewMode};
use satsang_core::{LibraryConfig, demo};
use satsang_model::{CatalogKind, EntryLike, PlaceCategory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dir = tempfile::tempdir().context("create demo library dir")?;
    let mut manifest = String::new();

    for kind in CatalogKind::all() {
        let file = format!("{}.json", kind.label().to_lowercase());
        let snapshot = demo::seed_snapshot(*kind);
        let json = serde_json::to_string_pretty(&snapshot)
            .context("encode seed snapshot")?;
        fs::write(dir.path().join(&file), json)
            .with_context(|| format!("write {file}"))?;
        manifest.push_str(&format!(
            "[[catalogs]]\nkind = \"{}\"\npath = \"{file}\"\n\n",
            kind.label().to_lowercase()
        ));
    }

    let manifest_path = dir.path().join("library.toml");
    fs::write(&manifest_path, manifest).context("write library.toml")?;

    let config = LibraryConfig::from_path(&manifest_path)
        .context("parse library manifest")?;
    let catalogs = config.load_catalogs().context("load demo catalogs")?;

    let places = catalogs
        .into_iter()
        .find(|catalog| catalog.kind() == CatalogKind::Places)
        .context("demo library ships a places catalog")?;
    let char_dham = places
        .routes()
        .iter()
        .find(|route| route.name.starts_with("Char Dham"))
        .map(|route| route.id)
        .context("demo places include the Char Dham route")?;

    let mut session = BrowseSession::new(Arc::new(places));

    println!("The whole catalog:");
    for entry in session.visible() {
        println!("  {} [{}]", entry.title(), entry.category());
    }

    session.set_search_term("ganga");
    println!("\nSearch \"ganga\":");
    for entry in session.visible() {
        println!("  {}", entry.title());
    }

    session.toggle_category(PlaceCategory::Ghat.into());
    println!("\n... narrowed to the Ghat chip:");
    for entry in session.visible() {
        println!("  {}", entry.title());
    }

    session.clear_filters();
    session.set_view_mode(ViewMode::Map);
    println!("\nSwitched to map view; ready = {}", session.map_ready());
    session.measure_surface(1280.0, 720.0);
    println!("Container measured;   ready = {}", session.map_ready());

    session.select_route(char_dham);
    println!("\nWalking the Char Dham:");
    for (number, stop) in session.route_stops() {
        println!("  {number}. {}", stop.title());
    }

    Ok(())
}
