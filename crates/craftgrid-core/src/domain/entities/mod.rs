pub mod grid;
pub mod recipe;

pub use crate::domain::DomainError;
pub use grid::{CraftingGrid, Grid};
pub use recipe::{
    MatchResult, RecipeCollection, RecipeGroup, RecipeKind, RecipeVariant, ShapedTemplate,
    ShapelessRecipe,
};
