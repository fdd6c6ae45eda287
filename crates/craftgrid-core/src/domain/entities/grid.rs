use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{MaterialId, Slot},
};

/// A grid of materials as placed on the crafting table.
pub type CraftingGrid = Grid<MaterialId>;

/// Rectangular rows of optional cells.
///
/// Invariant: every row has the same length. Enforced at construction and
/// preserved by [`Grid::normalized`], which only ever drops whole rows or
/// the same column position from every row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: Vec<Vec<Option<T>>>,
}

impl<T> Grid<T> {
    /// Build a grid from rows, rejecting ragged input.
    pub fn new(rows: Vec<Vec<Option<T>>>) -> Result<Self, DomainError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|(_, len)| *len != expected)
            {
                return Err(DomainError::NonRectangularGrid {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { rows })
    }

    /// An all-empty `height` x `width` grid.
    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            rows: (0..height)
                .map(|_| (0..width).map(|_| None).collect())
                .collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn rows(&self) -> &[Vec<Option<T>>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Option<T>>> {
        self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Non-empty cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flatten().filter_map(Option::as_ref)
    }

    /// True when no cell holds anything (including the 0x0 grid).
    pub fn is_blank(&self) -> bool {
        self.occupied().next().is_none()
    }

    /// Whether the grid fits inside a `size` x `size` table.
    pub fn fits(&self, size: usize) -> bool {
        self.height() <= size && self.width() <= size
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.map(&mut f)).collect())
                .collect(),
        }
    }

    /// Trim empty border rows and columns.
    ///
    /// Two passes of rows-then-columns. Within a pass, each index is kept
    /// if any of its cells is occupied, or if it sits at the middle
    /// position of an axis whose *current* length is at least 3. "Current"
    /// accounts for removals made earlier in the same pass, so a leading
    /// empty row can shrink a 3-row axis to 2 and cancel the exemption for
    /// what was the middle row.
    pub fn normalized(self) -> Self {
        let mut rows = self.rows;
        for _ in 0..TRIM_PASSES {
            rows = trim_rows(rows);
            rows = trim_columns(rows);
        }
        Self { rows }
    }
}

impl CraftingGrid {
    /// Build a crafting grid from raw slots using the tag extraction rule.
    pub fn from_slots(slots: Vec<Vec<Option<Slot>>>) -> Result<Self, DomainError> {
        Self::new(
            slots
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|slot| slot.and_then(|s| s.material()))
                        .collect()
                })
                .collect(),
        )
    }

    /// Build a crafting grid from string rows, `None` marking empty slots.
    pub fn from_names(rows: &[&[Option<&str>]]) -> Result<Self, DomainError> {
        let mut built = Vec::with_capacity(rows.len());
        for row in rows {
            let mut cells = Vec::with_capacity(row.len());
            for cell in row.iter() {
                cells.push(match cell {
                    Some(name) => Some(name.parse::<MaterialId>()?),
                    None => None,
                });
            }
            built.push(cells);
        }
        Self::new(built)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.as_ref().map_or_else(|| "_".to_string(), T::to_string))
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

const TRIM_PASSES: usize = 2;

/// Index protected from trimming on an axis of `len`, if any.
fn middle_index(len: usize) -> Option<usize> {
    (len >= 3).then(|| (len - 1) / 2)
}

/// Decide which indices of an axis survive, given each index's occupancy.
fn retained(occupied: &[bool]) -> Vec<bool> {
    let total = occupied.len();
    let mut kept = 0;
    occupied
        .iter()
        .enumerate()
        .map(|(index, &has_content)| {
            let current_len = kept + (total - index);
            let keep = has_content || middle_index(current_len) == Some(kept);
            if keep {
                kept += 1;
            }
            keep
        })
        .collect()
}

fn trim_rows<T>(rows: Vec<Vec<Option<T>>>) -> Vec<Vec<Option<T>>> {
    let occupied: Vec<bool> = rows
        .iter()
        .map(|row| row.iter().any(Option::is_some))
        .collect();
    rows.into_iter()
        .zip(retained(&occupied))
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect()
}

fn trim_columns<T>(rows: Vec<Vec<Option<T>>>) -> Vec<Vec<Option<T>>> {
    let width = rows.first().map_or(0, Vec::len);
    let occupied: Vec<bool> = (0..width)
        .map(|col| rows.iter().any(|row| row[col].is_some()))
        .collect();
    let keep = retained(&occupied);
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&keep)
                .filter_map(|(cell, &keep)| keep.then_some(cell))
                .collect()
        })
        .collect()
}
