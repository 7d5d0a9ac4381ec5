//! # Catalog Commands
//!
//! Tauri commands for tier catalog retrieval.

use tauri::State;
use tracing::debug;

use crate::state::CatalogState;
use crumb_core::Tier;

/// Gets the full ordered tier list.
///
/// ## When Used
/// - App startup, so the frontend can preload every dessert image and
///   render the unlock progression
///
/// ## Returns
/// All tiers in catalog order (ascending thresholds)
#[tauri::command]
pub fn get_catalog(catalog: State<'_, CatalogState>) -> Vec<Tier> {
    debug!("get_catalog command");
    catalog.catalog().tiers().to_vec()
}
