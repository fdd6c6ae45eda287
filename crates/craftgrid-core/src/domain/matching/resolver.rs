//! Catalog-wide resolution of a crafting grid.

use crate::domain::{
    entities::{
        grid::CraftingGrid,
        recipe::{MatchResult, RecipeCollection, RecipeKind, RecipeVariant},
    },
    matching::{
        shaped::match_shaped,
        shapeless::{MaterialPool, match_shapeless},
    },
};

/// Walks a catalog in stored order and reports which variants a grid makes.
///
/// The first variant to match wins. Ties between variants that would both
/// accept a grid are settled by catalog position, never by group or kind.
#[derive(Debug, Clone, Copy)]
pub struct RecipeResolver<'a> {
    catalog: &'a RecipeCollection,
}

impl<'a> RecipeResolver<'a> {
    pub fn new(catalog: &'a RecipeCollection) -> Self {
        Self { catalog }
    }

    /// The earliest variant the grid satisfies, if any.
    pub fn resolve(&self, grid: &CraftingGrid) -> Option<MatchResult> {
        self.matches(grid).next()
    }

    /// Every variant the grid satisfies, in catalog order.
    pub fn resolve_all(&self, grid: &CraftingGrid) -> Vec<MatchResult> {
        self.matches(grid).collect()
    }

    fn matches(&self, grid: &CraftingGrid) -> impl Iterator<Item = MatchResult> {
        let grid = grid.clone().normalized();
        self.catalog
            .variants()
            .filter(move |(_, variant)| variant_matches(&grid, variant))
            .map(|(group, variant)| MatchResult::new(group, variant.id.clone()))
    }
}

/// Whether a normalized grid satisfies one variant.
pub fn variant_matches(grid: &CraftingGrid, variant: &RecipeVariant) -> bool {
    match &variant.kind {
        RecipeKind::Shapeless(recipe) => {
            let mut pool: MaterialPool = grid.occupied().cloned().collect();
            match_shapeless(&mut pool, recipe)
        }
        RecipeKind::Shaped(template) => match_shaped(grid, &template.normalized()),
    }
}

/// Resolve `grid` against `catalog`; shorthand for [`RecipeResolver::resolve`].
pub fn craft(grid: &CraftingGrid, catalog: &RecipeCollection) -> Option<MatchResult> {
    RecipeResolver::new(catalog).resolve(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::recipe::{ShapedTemplate, ShapelessRecipe},
        value_objects::Ingredient,
    };

    fn two_sticks_shapeless(id: &str) -> RecipeVariant {
        RecipeVariant::shapeless(
            id,
            "Sticks",
            ShapelessRecipe::new(vec![Ingredient::material("stick"), Ingredient::material("stick")]),
        )
    }

    fn two_sticks_vertical(id: &str) -> RecipeVariant {
        RecipeVariant::shaped(
            id,
            "Pole",
            ShapedTemplate::from_ingredients(vec![
                vec![Some(Ingredient::material("stick"))],
                vec![Some(Ingredient::material("stick"))],
            ])
            .unwrap(),
        )
    }

    fn vertical_sticks_grid() -> CraftingGrid {
        CraftingGrid::from_names(&[
            &[None, Some("stick"), None],
            &[None, Some("stick"), None],
            &[None, None, None],
        ])
        .unwrap()
    }

    #[test]
    fn empty_catalog_never_matches() {
        let catalog = RecipeCollection::new();
        assert_eq!(craft(&vertical_sticks_grid(), &catalog), None);
        assert_eq!(craft(&CraftingGrid::empty(3, 3), &catalog), None);
    }

    #[test]
    fn earliest_variant_wins_across_groups() {
        let catalog = RecipeCollection::new()
            .with("pole", two_sticks_vertical("7"))
            .with("bundle", two_sticks_shapeless("0"));

        assert_eq!(
            craft(&vertical_sticks_grid(), &catalog),
            Some(MatchResult::new("pole", "7"))
        );

        let reversed = RecipeCollection::new()
            .with("bundle", two_sticks_shapeless("0"))
            .with("pole", two_sticks_vertical("7"));

        assert_eq!(
            craft(&vertical_sticks_grid(), &reversed),
            Some(MatchResult::new("bundle", "0"))
        );
    }

    #[test]
    fn resolve_all_reports_every_match_in_order() {
        let catalog = RecipeCollection::new()
            .with("bundle", two_sticks_shapeless("0"))
            .with("pole", two_sticks_vertical("0"))
            .with("pole", two_sticks_vertical("1"));

        let all = RecipeResolver::new(&catalog).resolve_all(&vertical_sticks_grid());
        assert_eq!(
            all,
            vec![
                MatchResult::new("bundle", "0"),
                MatchResult::new("pole", "0"),
                MatchResult::new("pole", "1"),
            ]
        );
    }

    #[test]
    fn shaped_variant_checks_position() {
        let catalog = RecipeCollection::new().with("pole", two_sticks_vertical("0"));
        let horizontal = CraftingGrid::from_names(&[&[Some("stick"), Some("stick")]]).unwrap();
        assert_eq!(craft(&horizontal, &catalog), None);
    }

    #[test]
    fn catalog_is_not_mutated_by_resolution() {
        let catalog = RecipeCollection::new().with(
            "pole",
            RecipeVariant::shaped(
                "0",
                "Pole",
                ShapedTemplate::from_ingredients(vec![
                    vec![None, Some(Ingredient::material("stick")), None],
                    vec![None, Some(Ingredient::material("stick")), None],
                    vec![None, None, None],
                ])
                .unwrap(),
            ),
        );
        let before = catalog.clone();
        assert!(craft(&vertical_sticks_grid(), &catalog).is_some());
        assert_eq!(catalog, before);
    }
}
