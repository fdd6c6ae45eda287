// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for craftgrid.
//!
//! This module contains the recipe model and the matching engine. All
//! catalog loading and grid input concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: matching is synchronous and completes in one call
//! - **No I/O**: grids and catalogs arrive fully built
//! - **No external crates**: only std, thiserror and serde derives
//! - **Immutable catalog**: resolution never mutates a `RecipeCollection`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod matching;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    grid::{CraftingGrid, Grid},
    recipe::{
        MatchResult, RecipeCollection, RecipeGroup, RecipeKind, RecipeVariant, ShapedTemplate,
        ShapelessRecipe,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use matching::{MaterialPool, RecipeResolver, craft, match_shaped, match_shapeless};

pub use value_objects::{AlternativeSet, GENERIC_ITEM_TAG, Ingredient, MaterialId, Slot};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Catalog fixtures
    // ========================================================================

    fn any(names: &[&str]) -> Ingredient {
        Ingredient::any_of(names.iter().copied()).unwrap()
    }

    fn arrow_catalog() -> RecipeCollection {
        RecipeCollection::new().with(
            "arrow",
            RecipeVariant::shapeless(
                "0",
                "Arrow",
                ShapelessRecipe::new(vec![any(&["stick"]), any(&["stick"])])
                    .with_optional(vec![Ingredient::material("feather")]),
            ),
        )
    }

    fn table(rows: &[&[Option<&str>]]) -> CraftingGrid {
        CraftingGrid::from_names(rows).unwrap()
    }

    const STICK: Option<&str> = Some("stick");
    const FEATHER: Option<&str> = Some("feather");
    const COAL: Option<&str> = Some("coal");
    const EMPTY: Option<&str> = None;

    // ========================================================================
    // Shapeless scenarios
    // ========================================================================

    #[test]
    fn shapeless_sticks_match_anywhere() {
        let grid = table(&[
            &[EMPTY, EMPTY, STICK],
            &[EMPTY, EMPTY, EMPTY],
            &[STICK, EMPTY, EMPTY],
        ]);
        assert_eq!(
            craft(&grid, &arrow_catalog()),
            Some(MatchResult::new("arrow", "0"))
        );
    }

    #[test]
    fn shapeless_optional_feather_is_accepted() {
        let grid = table(&[&[STICK, FEATHER, STICK]]);
        assert!(craft(&grid, &arrow_catalog()).is_some());
    }

    #[test]
    fn shapeless_extra_coal_is_rejected() {
        let grid = table(&[&[STICK, COAL, STICK]]);
        assert_eq!(craft(&grid, &arrow_catalog()), None);
    }

    // ========================================================================
    // Shaped scenarios
    // ========================================================================

    #[test]
    fn shaped_ring_keeps_its_hole() {
        let plank = || Some(Ingredient::material("planks"));
        let chest = RecipeCollection::new().with(
            "chest",
            RecipeVariant::shaped(
                "0",
                "Chest",
                ShapedTemplate::from_ingredients(vec![
                    vec![plank(), plank(), plank()],
                    vec![plank(), None, plank()],
                    vec![plank(), plank(), plank()],
                ])
                .unwrap(),
            ),
        );

        let p = Some("planks");
        let ring = table(&[&[p, p, p], &[p, EMPTY, p], &[p, p, p]]);
        let filled = table(&[&[p, p, p], &[p, p, p], &[p, p, p]]);

        assert_eq!(craft(&ring, &chest), Some(MatchResult::new("chest", "0")));
        assert_eq!(craft(&filled, &chest), None);
    }

    #[test]
    fn blank_grid_matches_nothing_in_a_real_catalog() {
        assert_eq!(craft(&CraftingGrid::empty(3, 3), &arrow_catalog()), None);
    }
}
