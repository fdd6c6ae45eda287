//! Infrastructure adapters for craftgrid.
//!
//! This crate implements the ports defined in `craftgrid-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_catalog;
pub mod catalog_loader;
pub mod grid_reader;
pub mod recipe_store;

// Re-export commonly used adapters
pub use builtin_catalog::BuiltinCatalog;
pub use catalog_loader::{CatalogParseError, JsonCatalogLoader};
pub use grid_reader::{GridParseError, parse_grid, read_grid_file};
pub use recipe_store::InMemoryRecipeStore;
