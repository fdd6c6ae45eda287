//! Text input for crafting grids.
//!
//! # Format
//!
//! ```text
//! # torch, placed in the right column
//! _  _  _
//! _  _  charcoal
//! _  _  stick
//! ```
//!
//! - one row per line (or per `;` for inline grids)
//! - cells separated by whitespace or commas
//! - `_`, `.` or `-` is an empty slot
//! - blank lines and lines starting with `#` are ignored

use std::{fs, path::Path};

use thiserror::Error;
use tracing::debug;

use craftgrid_core::{
    application::ApplicationError,
    domain::{CraftingGrid, DomainError, MaterialId},
    error::CraftResult,
};

/// Tokens that mark an empty slot.
pub const EMPTY_MARKERS: [&str; 3] = ["_", ".", "-"];

/// Why a grid description was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,

    #[error("line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Domain(String),
}

impl From<DomainError> for GridParseError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e.to_string())
    }
}

/// Parse a grid description.
pub fn parse_grid(input: &str) -> Result<CraftingGrid, GridParseError> {
    let mut rows: Vec<Vec<Option<MaterialId>>> = Vec::new();
    let mut width = None;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for segment in line.split(';') {
            let row: Vec<Option<MaterialId>> = segment
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(parse_cell)
                .collect();
            if row.is_empty() {
                continue;
            }

            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(GridParseError::Ragged {
                        line: index + 1,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(GridParseError::Empty);
    }
    Ok(CraftingGrid::new(rows)?)
}

fn parse_cell(token: &str) -> Option<MaterialId> {
    if EMPTY_MARKERS.contains(&token) {
        None
    } else {
        Some(MaterialId::new(token))
    }
}

/// Read and parse a grid file.
pub fn read_grid_file(path: &Path) -> CraftResult<CraftingGrid> {
    let input_error = |reason: String| ApplicationError::GridInput {
        path: path.to_path_buf(),
        reason,
    };

    let raw = fs::read_to_string(path).map_err(|e| input_error(e.to_string()))?;
    let grid = parse_grid(&raw).map_err(|e| input_error(e.to_string()))?;

    debug!(
        path = %path.display(),
        rows = grid.height(),
        cols = grid.width(),
        "read grid file"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftgrid_core::error::CraftError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_whitespace_and_commas() {
        let grid = parse_grid("_ stick _\n., stick ,-").unwrap();

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(0, 1), Some(&MaterialId::new("stick")));
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(1, 2), None);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "# a torch\n\n  coal\n\n# and its handle\nstick\n";
        assert_eq!(parse_grid(input).unwrap().dimensions(), (2, 1));
    }

    #[test]
    fn semicolons_split_inline_rows() {
        let grid = parse_grid("planks planks; planks planks").unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            parse_grid("a b\nc").unwrap_err(),
            GridParseError::Ragged {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn comment_lines_may_contain_semicolons() {
        let grid = parse_grid("# torch; placed right\n_ coal _\n_ stick _\n").unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(0, 1), Some(&MaterialId::new("coal")));
    }

    #[test]
    fn ragged_row_reports_physical_line() {
        assert_eq!(
            parse_grid("a b; c d\n e\n").unwrap_err(),
            GridParseError::Ragged {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_grid("# nothing\n\n").unwrap_err(), GridParseError::Empty);
    }

    #[test]
    fn blank_grid_is_allowed() {
        let grid = parse_grid("_ _\n_ _").unwrap();
        assert!(grid.is_blank());
    }

    #[test]
    fn reads_grid_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "wheat wheat wheat").unwrap();

        let grid = read_grid_file(file.path()).unwrap();
        assert_eq!(grid.dimensions(), (1, 3));
    }

    #[test]
    fn unreadable_file_is_grid_input_error() {
        let err = read_grid_file(Path::new("/definitely/not/here.grid")).unwrap_err();
        assert!(matches!(
            err,
            CraftError::Application(ApplicationError::GridInput { .. })
        ));
    }
}
