//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `craftgrid-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RecipeStore`: holds the session's catalog
//!   - `CatalogSource`: produces a catalog (file, directory, built-in)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CatalogSource, RecipeStore};

#[cfg(test)]
pub use output::{MockCatalogSource, MockRecipeStore};
