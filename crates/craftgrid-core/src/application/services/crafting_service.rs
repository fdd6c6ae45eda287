//! Crafting Service - resolve a grid against the session catalog.
//!
//! This service coordinates a crafting attempt:
//! 1. Check the grid against the table it was placed on
//! 2. Take a snapshot of the loaded catalog
//! 3. Run the resolver and report the winning variant

use tracing::{debug, info, instrument};

use crate::{
    application::ports::RecipeStore,
    domain::{
        CraftingGrid, DomainValidator, MatchResult, RecipeResolver, Slot,
    },
    error::CraftResult,
};

/// Default crafting table edge length.
pub const DEFAULT_TABLE_SIZE: usize = 3;

/// Main crafting service.
pub struct CraftingService {
    store: Box<dyn RecipeStore>,
    table_size: usize,
}

impl CraftingService {
    /// Create a crafting service for the standard 3x3 table.
    pub fn new(store: Box<dyn RecipeStore>) -> Self {
        Self {
            store,
            table_size: DEFAULT_TABLE_SIZE,
        }
    }

    /// Use a different table size (2 for the small table).
    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Resolve a grid to the earliest matching recipe.
    ///
    /// `Ok(None)` means the grid is valid but makes nothing.
    #[instrument(skip_all, fields(rows = grid.height(), cols = grid.width()))]
    pub fn craft(&self, grid: &CraftingGrid) -> CraftResult<Option<MatchResult>> {
        DomainValidator::validate_grid_fits(grid, self.table_size)?;

        let catalog = self.store.snapshot()?;
        let result = RecipeResolver::new(&catalog).resolve(grid);

        match &result {
            Some(found) => info!(group = %found.group, id = %found.id, "Grid resolved"),
            None => debug!(variants = catalog.variant_count(), "No recipe matches grid"),
        }
        Ok(result)
    }

    /// Every recipe the grid satisfies, in catalog order.
    #[instrument(skip_all, fields(rows = grid.height(), cols = grid.width()))]
    pub fn craft_all(&self, grid: &CraftingGrid) -> CraftResult<Vec<MatchResult>> {
        DomainValidator::validate_grid_fits(grid, self.table_size)?;

        let catalog = self.store.snapshot()?;
        let results = RecipeResolver::new(&catalog).resolve_all(grid);
        debug!(matches = results.len(), "Grid resolved against full catalog");
        Ok(results)
    }

    /// Resolve raw UI slots, extracting materials from their tags first.
    pub fn craft_slots(&self, slots: Vec<Vec<Option<Slot>>>) -> CraftResult<Option<MatchResult>> {
        let grid = CraftingGrid::from_slots(slots)?;
        self.craft(&grid)
    }
}
