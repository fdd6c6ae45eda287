//! Cell-by-cell comparison of a crafting grid with a shaped template.

use crate::domain::{
    entities::grid::{CraftingGrid, Grid},
    value_objects::AlternativeSet,
};

/// Compare two already-normalized grids.
///
/// Shapes must agree exactly. An empty template cell demands an empty grid
/// cell; an occupied one demands a grid material that belongs to its set.
pub fn match_shaped(grid: &CraftingGrid, template: &Grid<AlternativeSet>) -> bool {
    if grid.dimensions() != template.dimensions() {
        return false;
    }

    grid.rows()
        .iter()
        .zip(template.rows())
        .all(|(grid_row, template_row)| {
            grid_row
                .iter()
                .zip(template_row)
                .all(|(cell, slot)| match (cell, slot) {
                    (None, None) => true,
                    (Some(material), Some(set)) => set.contains(material),
                    _ => false,
                })
        })
}
