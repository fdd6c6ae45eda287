//! Recipes that ship with craftgrid.
//!
//! The starter catalog is embedded in the binary so the CLI works with no
//! data on disk. It uses the same JSON format as user catalogs, and
//! `craftgrid init --catalog` writes it out as a starting point.

use tracing::{debug, instrument};

use craftgrid_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::RecipeCollection,
    error::CraftResult,
};

use crate::catalog_loader::parse_catalog;

/// Raw JSON of the built-in catalog.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../catalog/builtin.json");

/// [`CatalogSource`] for the embedded starter recipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Raw JSON, for writing the catalog to disk.
    pub fn json() -> &'static str {
        BUILTIN_CATALOG_JSON
    }
}

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "built-in recipes".into()
    }

    #[instrument(skip(self))]
    fn load(&self) -> CraftResult<RecipeCollection> {
        let catalog = parse_catalog(BUILTIN_CATALOG_JSON).map_err(|e| {
            ApplicationError::CatalogLoad {
                source_name: self.describe(),
                reason: e.to_string(),
            }
        })?;
        debug!(variants = catalog.variant_count(), "loaded built-in catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftgrid_core::domain::{CraftingGrid, DomainValidator, MatchResult, craft};

    fn catalog() -> RecipeCollection {
        BuiltinCatalog.load().unwrap()
    }

    #[test]
    fn builtin_catalog_is_valid_for_large_table() {
        assert!(DomainValidator::catalog_issues(&catalog(), 3).is_empty());
    }

    #[test]
    fn some_builtin_recipes_do_not_fit_small_table() {
        let issues = DomainValidator::catalog_issues(&catalog(), 2);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|e| e.to_string().contains("larger than")));
    }

    #[test]
    fn torch_can_be_made_from_charcoal() {
        let grid = CraftingGrid::from_names(&[
            &[None, None, None],
            &[None, None, Some("charcoal")],
            &[None, None, Some("stick")],
        ])
        .unwrap();

        assert_eq!(craft(&grid, &catalog()), Some(MatchResult::new("torch", "0")));
    }

    #[test]
    fn second_stick_variant_is_reported() {
        let grid = CraftingGrid::from_names(&[&[Some("bamboo")], &[Some("bamboo")]]).unwrap();
        assert_eq!(craft(&grid, &catalog()), Some(MatchResult::new("stick", "1")));
    }

    #[test]
    fn logs_make_planks_shapelessly() {
        let grid = CraftingGrid::from_names(&[&[None, None], &[None, Some("spruce_log")]]).unwrap();
        assert_eq!(craft(&grid, &catalog()), Some(MatchResult::new("planks", "0")));
    }

    #[test]
    fn filled_chest_ring_is_nothing() {
        let p = Some("planks");
        let grid = CraftingGrid::from_names(&[&[p, p, p], &[p, p, p], &[p, p, p]]).unwrap();
        assert_eq!(craft(&grid, &catalog()), None);
    }
}
