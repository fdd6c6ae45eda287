use crate::domain::{
    entities::{
        grid::Grid,
        recipe::{RecipeCollection, RecipeKind, RecipeVariant},
    },
    error::DomainError,
};

/// Centralized domain validation.
///
/// The matchers assume well-formed input; these checks are what callers run
/// before handing grids and catalogs to them.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_table_size(table_size: usize) -> Result<(), DomainError> {
        if table_size == 0 {
            return Err(DomainError::InvalidTableSize);
        }
        Ok(())
    }

    /// A crafting grid must not be larger than the table it was placed on.
    pub fn validate_grid_fits<T>(grid: &Grid<T>, table_size: usize) -> Result<(), DomainError> {
        Self::validate_table_size(table_size)?;
        if !grid.fits(table_size) {
            let (rows, cols) = grid.dimensions();
            return Err(DomainError::ExceedsTable {
                what: "Crafting grid".into(),
                rows,
                cols,
                table_size,
            });
        }
        Ok(())
    }

    /// Check that a variant is well formed, whatever table it is used on.
    pub fn validate_variant_structure(
        group: &str,
        variant: &RecipeVariant,
    ) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidRecipe {
            group: group.to_owned(),
            id: variant.id.clone(),
            reason: reason.to_owned(),
        };

        if variant.id.trim().is_empty() {
            return Err(invalid("variant id is empty"));
        }

        match &variant.kind {
            RecipeKind::Shaped(template) if template.grid().is_blank() => {
                Err(invalid("shaped template has no ingredients"))
            }
            RecipeKind::Shapeless(recipe) if recipe.required.is_empty() => {
                Err(invalid("shapeless recipe has no required ingredients"))
            }
            _ => Ok(()),
        }
    }

    /// Check one variant in `group` for a `table_size` table.
    pub fn validate_variant(
        group: &str,
        variant: &RecipeVariant,
        table_size: usize,
    ) -> Result<(), DomainError> {
        Self::validate_variant_structure(group, variant)?;

        let exceeds = |rows, cols| DomainError::ExceedsTable {
            what: format!("Recipe '{}/{}'", group, variant.id),
            rows,
            cols,
            table_size,
        };

        match &variant.kind {
            RecipeKind::Shaped(template) => {
                let trimmed = template.normalized();
                if !trimmed.fits(table_size) {
                    let (rows, cols) = trimmed.dimensions();
                    return Err(exceeds(rows, cols));
                }
            }
            RecipeKind::Shapeless(recipe) => {
                if !recipe.fits(table_size) {
                    let count = recipe.required.len();
                    return Err(exceeds(
                        count.div_ceil(table_size.max(1)),
                        table_size.min(count),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Reject catalogs the resolver cannot safely run against: empty groups
    /// and malformed variants. Table fit is not checked.
    pub fn validate_structure(catalog: &RecipeCollection) -> Result<(), DomainError> {
        for group in catalog.groups() {
            if group.variants.is_empty() {
                return Err(DomainError::EmptyGroup {
                    group: group.name.clone(),
                });
            }
            for variant in &group.variants {
                Self::validate_variant_structure(&group.name, variant)?;
            }
        }
        Ok(())
    }

    /// Every problem in the catalog, in catalog order.
    pub fn catalog_issues(catalog: &RecipeCollection, table_size: usize) -> Vec<DomainError> {
        if let Err(e) = Self::validate_table_size(table_size) {
            return vec![e];
        }

        let mut issues = Vec::new();
        for group in catalog.groups() {
            if group.variants.is_empty() {
                issues.push(DomainError::EmptyGroup {
                    group: group.name.clone(),
                });
            }
            for variant in &group.variants {
                if let Err(e) = Self::validate_variant(&group.name, variant, table_size) {
                    issues.push(e);
                }
            }
        }
        issues
    }

    /// First problem in the catalog, if any.
    pub fn validate_catalog(
        catalog: &RecipeCollection,
        table_size: usize,
    ) -> Result<(), DomainError> {
        match Self::catalog_issues(catalog, table_size).into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
