//! Application layer for craftgrid.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CraftingService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! matching logic itself. All recipe rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogIssue,
    CatalogReport,
    CatalogService,
    CraftingService,
    RecipeInfo, // DTO for recipe metadata
};

// Re-export port traits (for adapter implementation)
pub use ports::{CatalogSource, RecipeStore};

pub use error::ApplicationError;
