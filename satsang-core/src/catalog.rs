use std::collections::HashMap;

use satsang_model::{
    CatalogEntry, CatalogKind, EntryID, EntryLike, Route, RouteID,
};
use tracing::{debug, warn};

use crate::repository::CatalogRepository;
use crate::snapshot::CatalogSnapshot;

/// In-memory catalog for a single family, indexed for point lookups.
///
/// Construction is where data hygiene happens: entries belonging to a
/// foreign family are skipped, duplicate ids keep their first occurrence,
/// and out-of-range coordinates are stripped so the map layer never sees
/// them. Once built, a catalog does not change for the lifetime of the
/// sessions reading it.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    entries: Vec<CatalogEntry>,
    entry_index: HashMap<EntryID, usize>,
    routes: Vec<Route>,
    route_index: HashMap<RouteID, usize>,
}

impl Catalog {
    pub fn new(
        kind: CatalogKind,
        entries: Vec<CatalogEntry>,
        routes: Vec<Route>,
    ) -> Self {
        let mut accepted = Vec::with_capacity(entries.len());
        let mut entry_index = HashMap::with_capacity(entries.len());

        for mut entry in entries {
            if entry.kind() != kind {
                warn!(
                    "Skipping {} entry '{}' in {} catalog",
                    entry.kind(),
                    entry.title(),
                    kind
                );
                continue;
            }

            let id = entry.entry_id();
            if entry_index.contains_key(&id) {
                warn!("Duplicate entry id {}, keeping first occurrence", id);
                continue;
            }

            if let CatalogEntry::Place(place) = &mut entry {
                let out_of_range = place
                    .coordinates
                    .as_ref()
                    .is_some_and(|point| !point.is_valid());
                if out_of_range {
                    warn!(
                        "Dropping out-of-range coordinates on place '{}'",
                        place.title
                    );
                    place.coordinates = None;
                }
            }

            entry_index.insert(id, accepted.len());
            accepted.push(entry);
        }

        let mut kept_routes = Vec::with_capacity(routes.len());
        let mut route_index = HashMap::with_capacity(routes.len());

        if kind == CatalogKind::Places {
            for route in routes {
                if route_index.contains_key(&route.id) {
                    warn!(
                        "Duplicate route id {}, keeping first occurrence",
                        route.id
                    );
                    continue;
                }
                route_index.insert(route.id, kept_routes.len());
                kept_routes.push(route);
            }
        } else if !routes.is_empty() {
            warn!(
                "Ignoring {} route(s) on {} catalog; routes reference places",
                routes.len(),
                kind
            );
        }

        Catalog {
            kind,
            entries: accepted,
            entry_index,
            routes: kept_routes,
            route_index,
        }
    }

    /// Builds a catalog from a decoded snapshot, applying the same hygiene
    /// rules as [`Catalog::new`]. Never fails: suspect rows are dropped or
    /// sanitized rather than poisoning the whole load.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        if let Some(generated_at) = snapshot.generated_at {
            debug!(
                "Loading {} snapshot generated at {}",
                snapshot.kind, generated_at
            );
        }
        Self::new(snapshot.kind, snapshot.entries, snapshot.routes)
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &EntryID) -> Option<&CatalogEntry> {
        self.entry_index.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, id: &RouteID) -> Option<&Route> {
        self.route_index.get(id).map(|&idx| &self.routes[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a route's stops against this catalog, in route order.
    /// References to ids the catalog no longer holds are dropped silently;
    /// the stop sequence simply shortens.
    pub fn project_route(&self, route: &Route) -> Vec<&CatalogEntry> {
        let mut stops = Vec::with_capacity(route.places.len());
        for place_id in &route.places {
            match self.entry(&EntryID::Place(*place_id)) {
                Some(entry) => stops.push(entry),
                None => debug!(
                    "Route '{}' references missing place {}",
                    route.name, place_id
                ),
            }
        }
        stops
    }
}

impl CatalogRepository for Catalog {
    fn kind(&self) -> CatalogKind {
        self.kind
    }

    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn entry(&self, id: &EntryID) -> Option<&CatalogEntry> {
        Catalog::entry(self, id)
    }

    fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn route(&self, id: &RouteID) -> Option<&Route> {
        Catalog::route(self, id)
    }
}
