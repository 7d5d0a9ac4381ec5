//! # Catalog State
//!
//! Holds the validated tier catalog for the lifetime of the app.
//!
//! ## Thread Safety
//! The catalog is read-only after initialization, so no mutex is needed.
//! If tier editing is ever added, this would become an `RwLock`.

use crumb_core::Catalog;

/// Tauri-managed catalog state.
///
/// Built once in the setup hook and shared by every command that needs
/// tier data (sale registration, catalog listing).
#[derive(Debug)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Wraps an already-validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Returns the catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(Catalog::default())
    }
}
