use satsang_model::{CatalogEntry, CatalogKind, EntryID, Route, RouteID};

/// Read-only port over one catalog family.
///
/// Browsing sessions depend on this trait rather than on
/// [`Catalog`](crate::Catalog) directly, so a session can be fed from an
/// in-memory snapshot today and a remote cache tomorrow without touching
/// any reducer code. Implementations must hand back entries in stable
/// catalog order on every call; visible-order guarantees upstream lean on
/// that.
pub trait CatalogRepository: Send + Sync {
    /// Which catalog family this repository serves.
    fn kind(&self) -> CatalogKind;

    /// Every entry of the catalog, in catalog order.
    fn entries(&self) -> &[CatalogEntry];

    /// Point lookup by typed id.
    fn entry(&self, id: &EntryID) -> Option<&CatalogEntry>;

    /// Curated routes over this catalog. Empty for non-place families.
    fn routes(&self) -> &[Route];

    /// Point lookup for a single route.
    fn route(&self, id: &RouteID) -> Option<&Route>;
}
