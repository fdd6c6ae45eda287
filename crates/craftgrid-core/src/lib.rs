//! Craftgrid Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for craftgrid,
//! a crafting-recipe recognizer: given the materials placed on a small
//! square table, it reports which recipe (if any) they make.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          craftgrid-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (CraftingService, CatalogService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: RecipeStore, Source)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    craftgrid-adapters (Infrastructure)  │
//! │ (InMemoryRecipeStore, JsonCatalogLoader)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Grid, RecipeCollection, Resolver)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use craftgrid_core::domain::{
//!     CraftingGrid, Ingredient, MatchResult, RecipeCollection, RecipeVariant, ShapelessRecipe,
//!     craft,
//! };
//!
//! let catalog = RecipeCollection::new().with(
//!     "torch",
//!     RecipeVariant::shapeless(
//!         "0",
//!         "Torch",
//!         ShapelessRecipe::new(vec![Ingredient::material("coal"), Ingredient::material("stick")]),
//!     ),
//! );
//!
//! let grid = CraftingGrid::from_names(&[
//!     &[None, Some("stick"), None],
//!     &[None, None, Some("coal")],
//! ])
//! .unwrap();
//!
//! assert_eq!(craft(&grid, &catalog), Some(MatchResult::new("torch", "0")));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogIssue, CatalogReport, CatalogService, CraftingService, RecipeInfo,
        ports::{CatalogSource, RecipeStore},
        services::crafting_service::DEFAULT_TABLE_SIZE,
    };
    pub use crate::domain::{
        AlternativeSet, CraftingGrid, Grid, Ingredient, MatchResult, MaterialId, RecipeCollection,
        RecipeGroup, RecipeKind, RecipeResolver, RecipeVariant, ShapedTemplate, ShapelessRecipe,
        Slot, craft,
    };
    pub use crate::error::{CraftError, CraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
