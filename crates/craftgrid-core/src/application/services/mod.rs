//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "craft this grid" or "list recipes".

pub mod catalog_service;
pub mod crafting_service;

pub use catalog_service::{CatalogIssue, CatalogReport, CatalogService, RecipeInfo};
pub use crafting_service::CraftingService;
