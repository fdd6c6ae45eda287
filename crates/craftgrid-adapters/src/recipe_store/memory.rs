//! In-memory recipe store.

use std::sync::{Arc, RwLock};

use craftgrid_core::{
    application::{ApplicationError, ports::{CatalogSource, RecipeStore}},
    domain::{RecipeCollection, RecipeGroup},
    error::CraftResult,
};

use crate::builtin_catalog::BuiltinCatalog;

/// Thread-safe in-memory recipe store.
///
/// Holds the catalog behind an `Arc` so readers keep a consistent snapshot
/// while another thread swaps in a new catalog.
#[derive(Clone)]
pub struct InMemoryRecipeStore {
    inner: Arc<RwLock<Arc<RecipeCollection>>>,
}

impl InMemoryRecipeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_catalog(RecipeCollection::new())
    }

    /// Create a store holding `catalog`.
    pub fn with_catalog(catalog: RecipeCollection) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Create a store with the built-in recipes loaded.
    pub fn with_builtin() -> CraftResult<Self> {
        Ok(Self::with_catalog(BuiltinCatalog.load()?))
    }

    /// Number of recipe variants held.
    pub fn len(&self) -> usize {
        self.snapshot().map(|c| c.variant_count()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every recipe.
    pub fn clear(&self) -> CraftResult<()> {
        self.replace(RecipeCollection::new())
    }
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore for InMemoryRecipeStore {
    fn snapshot(&self) -> CraftResult<Arc<RecipeCollection>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(Arc::clone(&*inner))
    }

    fn group(&self, name: &str) -> CraftResult<Option<RecipeGroup>> {
        Ok(self.snapshot()?.group(name).cloned())
    }

    fn replace(&self, catalog: RecipeCollection) -> CraftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        *inner = Arc::new(catalog);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftgrid_core::domain::{Ingredient, RecipeVariant, ShapelessRecipe};

    fn one_recipe() -> RecipeCollection {
        RecipeCollection::new().with(
            "planks",
            RecipeVariant::shapeless(
                "0",
                "Planks",
                ShapelessRecipe::new(vec![Ingredient::material("log")]),
            ),
        )
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryRecipeStore::new();
        assert!(store.is_empty());
        assert!(store.group("planks").unwrap().is_none());
    }

    #[test]
    fn replace_is_visible_through_clones() {
        let store = InMemoryRecipeStore::new();
        let other = store.clone();

        store.replace(one_recipe()).unwrap();

        assert_eq!(other.len(), 1);
        assert_eq!(other.group("planks").unwrap().unwrap().variants.len(), 1);
    }

    #[test]
    fn old_snapshot_survives_replace() {
        let store = InMemoryRecipeStore::with_catalog(one_recipe());
        let before = store.snapshot().unwrap();

        store.clear().unwrap();

        assert_eq!(before.variant_count(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn builtin_store_has_recipes() {
        let store = InMemoryRecipeStore::with_builtin().unwrap();
        assert!(!store.is_empty());
    }
}
