//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `craftgrid-adapters` crate provides implementations.

use std::sync::Arc;

use crate::domain::{RecipeCollection, RecipeGroup};
use crate::error::CraftResult;

/// Port for the session's recipe catalog.
///
/// Implemented by:
/// - `craftgrid_adapters::recipe_store::InMemoryRecipeStore`
///
/// ## Design Notes
///
/// - A catalog is loaded once per session and then only read
/// - Readers get an `Arc` snapshot, so a later `replace` never changes a
///   catalog someone is matching against
#[cfg_attr(test, mockall::automock)]
pub trait RecipeStore: Send + Sync {
    /// The current catalog.
    fn snapshot(&self) -> CraftResult<Arc<RecipeCollection>>;

    /// Look up one group by name.
    fn group(&self, name: &str) -> CraftResult<Option<RecipeGroup>>;

    /// Replace the catalog wholesale.
    fn replace(&self, catalog: RecipeCollection) -> CraftResult<()>;
}

/// Port for wherever a catalog comes from.
///
/// Implemented by:
/// - `craftgrid_adapters::catalog_loader::JsonCatalogLoader` (files/directories)
/// - `craftgrid_adapters::builtin_catalog::BuiltinCatalog` (shipped recipes)
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    /// Produce the catalog, preserving group and variant order.
    fn load(&self) -> CraftResult<RecipeCollection>;
}
