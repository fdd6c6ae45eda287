//! Catalog Service - loading and browsing recipes.
//!
//! Handles catalog loading, listing, search and validation.
//! Separated from CraftingService for single responsibility.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CatalogSource, RecipeStore},
    },
    domain::{DomainValidator, RecipeCollection, RecipeGroup, RecipeVariant},
    error::CraftResult,
};

/// Summary of one recipe variant, for listing and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeInfo {
    pub group: String,
    pub id: String,
    pub name: String,
    pub shapeless: bool,
    pub rows: usize,
    pub cols: usize,
    /// Whether the recipe can be made on the requested table.
    pub fits: bool,
    /// Cell contents as shown on the table; alternatives are joined by `|`.
    pub layout: Vec<Vec<Option<String>>>,
}

impl RecipeInfo {
    fn from_variant(group: &str, variant: &RecipeVariant, table_size: usize) -> Self {
        let grid = variant.display_grid(table_size);
        let (rows, cols) = grid.dimensions();
        let layout = grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(ToString::to_string))
                    .collect()
            })
            .collect();

        Self {
            group: group.to_owned(),
            id: variant.id.clone(),
            name: variant.name.clone(),
            shapeless: variant.is_shapeless(),
            rows,
            cols,
            fits: variant.fits(table_size),
            layout,
        }
    }
}

/// One problem found while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Outcome of [`CatalogService::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    /// Variants in the catalog, counting malformed ones.
    pub variants: usize,
    pub issues: Vec<CatalogIssue>,
}

impl CatalogReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Service for catalog operations.
pub struct CatalogService {
    store: Box<dyn RecipeStore>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(store: Box<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Load a catalog from `source` into the store, replacing what was there.
    ///
    /// Malformed catalogs (empty groups, blank templates) are rejected and
    /// the store keeps its previous contents. Returns the number of variants
    /// loaded.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn load_from(&self, source: &dyn CatalogSource) -> CraftResult<usize> {
        let catalog = source.load()?;
        DomainValidator::validate_structure(&catalog)?;
        let (groups, variants) = (catalog.group_count(), catalog.variant_count());

        if catalog.is_empty() {
            warn!("Catalog contains no recipes");
        }

        self.store.replace(catalog)?;
        info!(groups, variants, "Catalog loaded");
        Ok(variants)
    }

    /// All variants in catalog order.
    ///
    /// With `include_oversized` false, recipes that cannot be laid out on a
    /// `table_size` table are left out.
    pub fn list(&self, table_size: usize, include_oversized: bool) -> CraftResult<Vec<RecipeInfo>> {
        DomainValidator::validate_table_size(table_size)?;
        let catalog = self.store.snapshot()?;

        Ok(catalog
            .variants()
            .filter(|(_, v)| include_oversized || v.fits(table_size))
            .map(|(group, v)| RecipeInfo::from_variant(group, v, table_size))
            .collect())
    }

    /// Variants whose group has at least one variant matching `query`.
    ///
    /// A variant matches when its name or any material it mentions contains
    /// `query`, ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str, table_size: usize) -> CraftResult<Vec<RecipeInfo>> {
        DomainValidator::validate_table_size(table_size)?;
        let catalog = self.store.snapshot()?;
        let needle = query.trim().to_lowercase();

        Ok(catalog
            .groups()
            .iter()
            .filter(|g| g.variants.iter().any(|v| mentions(v, &needle)))
            .flat_map(|g| {
                g.variants
                    .iter()
                    .filter(|v| v.fits(table_size))
                    .map(|v| RecipeInfo::from_variant(&g.name, v, table_size))
            })
            .collect())
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> CraftResult<RecipeGroup> {
        self.store
            .group(name)?
            .ok_or_else(|| ApplicationError::GroupNotFound { group: name.into() }.into())
    }

    /// Every variant of a group, ready for display on a `table_size` table.
    pub fn show(&self, name: &str, table_size: usize) -> CraftResult<Vec<RecipeInfo>> {
        DomainValidator::validate_table_size(table_size)?;
        let group = self.group(name)?;
        Ok(group
            .variants
            .iter()
            .map(|v| RecipeInfo::from_variant(&group.name, v, table_size))
            .collect())
    }

    /// Every problem in the catalog `source` produces, for a `table_size`
    /// table.
    ///
    /// The catalog is read but never stored. [`Self::load_from`] stops at
    /// the first empty group or blank recipe; here those are reported next
    /// to oversized recipes. Documents that do not parse at all are still
    /// an error.
    #[instrument(skip_all, fields(source = %source.describe(), table_size))]
    pub fn validate(source: &dyn CatalogSource, table_size: usize) -> CraftResult<CatalogReport> {
        let catalog = source.load()?;
        let report = CatalogReport {
            variants: catalog.variant_count(),
            issues: issues_in(&catalog, table_size),
        };

        if report.is_valid() {
            info!(variants = report.variants, "Catalog is valid");
        } else {
            warn!(count = report.issues.len(), "Catalog has problems");
        }
        Ok(report)
    }
}

fn issues_in(catalog: &RecipeCollection, table_size: usize) -> Vec<CatalogIssue> {
    DomainValidator::catalog_issues(catalog, table_size)
        .into_iter()
        .map(|e| CatalogIssue {
            message: e.to_string(),
            suggestions: e.suggestions(),
        })
        .collect()
}

fn mentions(variant: &RecipeVariant, needle: &str) -> bool {
    variant.name.to_lowercase().contains(needle)
        || variant
            .materials()
            .any(|m| m.as_str().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::ports::{MockCatalogSource, MockRecipeStore},
        domain::{Ingredient, ShapedTemplate, ShapelessRecipe},
        error::CraftError,
    };

    fn sample_catalog() -> RecipeCollection {
        let stick = || Some(Ingredient::material("stick"));
        RecipeCollection::new()
            .with(
                "torch",
                RecipeVariant::shapeless(
                    "0",
                    "Torch",
                    ShapelessRecipe::new(vec![
                        Ingredient::any_of(["coal", "charcoal"]).unwrap(),
                        Ingredient::material("stick"),
                    ]),
                ),
            )
            .with(
                "rail",
                RecipeVariant::shaped(
                    "0",
                    "Rail",
                    ShapedTemplate::from_ingredients(vec![
                        vec![stick(), None, stick()],
                        vec![stick(), stick(), stick()],
                        vec![stick(), None, stick()],
                    ])
                    .unwrap(),
                ),
            )
    }

    fn store_with(catalog: RecipeCollection) -> Box<MockRecipeStore> {
        let catalog = Arc::new(catalog);
        let lookup = Arc::clone(&catalog);
        let mut store = MockRecipeStore::new();
        store
            .expect_snapshot()
            .returning(move || Ok(Arc::clone(&catalog)));
        store
            .expect_group()
            .returning(move |name| Ok(lookup.group(name).cloned()));
        Box::new(store)
    }

    #[test]
    fn load_from_replaces_store_contents() {
        let replaced = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&replaced);

        let mut store = MockRecipeStore::new();
        store.expect_replace().times(1).returning(move |c| {
            *sink.lock().unwrap() = Some(c);
            Ok(())
        });

        let mut source = MockCatalogSource::new();
        source.expect_describe().return_const("test".to_string());
        source.expect_load().returning(|| Ok(sample_catalog()));

        let service = CatalogService::new(Box::new(store));
        assert_eq!(service.load_from(&source).unwrap(), 2);
        assert_eq!(replaced.lock().unwrap().as_ref(), Some(&sample_catalog()));
    }

    #[test]
    fn failed_load_leaves_store_untouched() {
        let mut store = MockRecipeStore::new();
        store.expect_replace().never();

        let mut source = MockCatalogSource::new();
        source.expect_describe().return_const("broken".to_string());
        source.expect_load().returning(|| {
            Err(ApplicationError::CatalogLoad {
                source_name: "broken".into(),
                reason: "bad json".into(),
            }
            .into())
        });

        let service = CatalogService::new(Box::new(store));
        assert!(service.load_from(&source).is_err());
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let mut store = MockRecipeStore::new();
        store.expect_replace().never();

        let mut source = MockCatalogSource::new();
        source.expect_describe().return_const("blank".to_string());
        source.expect_load().returning(|| {
            Ok(RecipeCollection::new().with(
                "nothing",
                RecipeVariant::shapeless("0", "Nothing", ShapelessRecipe::default()),
            ))
        });

        let service = CatalogService::new(Box::new(store));
        assert!(matches!(
            service.load_from(&source).unwrap_err(),
            CraftError::Domain(_)
        ));
    }

    #[test]
    fn list_hides_recipes_larger_than_the_table() {
        let service = CatalogService::new(store_with(sample_catalog()));

        let big = service.list(3, false).unwrap();
        assert_eq!(big.len(), 2);

        let small = service.list(2, false).unwrap();
        assert_eq!(small.len(), 1);
        assert_eq!(small[0].group, "torch");

        let all = service.list(2, true).unwrap();
        assert_eq!(all.len(), 2);
        assert!(!all[1].fits);
    }

    #[test]
    fn shapeless_layout_is_row_major() {
        let service = CatalogService::new(store_with(sample_catalog()));
        let torch = &service.list(3, false).unwrap()[0];

        assert!(torch.shapeless);
        assert_eq!((torch.rows, torch.cols), (1, 2));
        assert_eq!(
            torch.layout,
            vec![vec![Some("coal|charcoal".to_string()), Some("stick".to_string())]]
        );
    }

    #[test]
    fn search_matches_names_and_materials() {
        let service = CatalogService::new(store_with(sample_catalog()));

        let by_name = service.search("TOR", 3).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].group, "torch");

        let by_material = service.search("charcoal", 3).unwrap();
        assert_eq!(by_material.len(), 1);

        let sticks = service.search("stick", 3).unwrap();
        assert_eq!(sticks.len(), 2);

        assert!(service.search("diamond", 3).unwrap().is_empty());
    }

    #[test]
    fn show_unknown_group_is_not_found() {
        let service = CatalogService::new(store_with(sample_catalog()));

        assert!(matches!(
            service.show("anvil", 3).unwrap_err(),
            CraftError::Application(ApplicationError::GroupNotFound { .. })
        ));
        assert_eq!(service.show("rail", 3).unwrap()[0].rows, 3);
    }

    fn source_of(catalog: RecipeCollection) -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source.expect_describe().return_const("test".to_string());
        source.expect_load().returning(move || Ok(catalog.clone()));
        source
    }

    #[test]
    fn validate_reports_oversized_recipes() {
        let source = source_of(sample_catalog());

        let report = CatalogService::validate(&source, 3).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.variants, 2);

        let report = CatalogService::validate(&source, 2).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].message.contains("rail"));
    }

    #[test]
    fn validate_lists_every_malformed_group() {
        let mut catalog = sample_catalog()
            .with(
                "nothing",
                RecipeVariant::shapeless("0", "Nothing", ShapelessRecipe::default()),
            )
            .with(
                "blank",
                RecipeVariant::shaped(
                    "0",
                    "Blank",
                    ShapedTemplate::from_ingredients(vec![vec![None]]).unwrap(),
                ),
            );
        catalog.insert_group("hollow", vec![]).unwrap();

        let report = CatalogService::validate(&source_of(catalog), 3).unwrap();
        let messages: Vec<&str> = report.issues.iter().map(|i| i.message.as_str()).collect();

        assert_eq!(report.issues.len(), 3, "{messages:?}");
        assert!(messages[0].contains("nothing"));
        assert!(messages[1].contains("blank"));
        assert!(messages[2].contains("hollow"));
    }
}
