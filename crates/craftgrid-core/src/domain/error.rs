// ============================================================================
// domain/error.rs - RECIPE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Matching itself never fails: "no match" is `None`, not an error. These
/// errors are raised while *building* grids and catalogs, i.e. when a caller
/// breaks a precondition the engine relies on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid recipe '{group}/{id}': {reason}")]
    InvalidRecipe {
        group: String,
        id: String,
        reason: String,
    },

    #[error("Alternative set cannot be empty")]
    EmptyAlternativeSet,

    #[error("Material identifier cannot be empty")]
    EmptyMaterialId,

    #[error("Recipe group '{group}' has no variants")]
    EmptyGroup { group: String },

    // ========================================================================
    // Table Constraints
    // ========================================================================
    #[error("{what} is {rows}x{cols}, larger than the {table_size}x{table_size} crafting table")]
    ExceedsTable {
        what: String,
        rows: usize,
        cols: usize,
        table_size: usize,
    },

    #[error("Crafting table size must be at least 1")]
    InvalidTableSize,

    // ========================================================================
    // Catalog Constraints
    // ========================================================================
    #[error("Duplicate recipe group: {group}")]
    DuplicateGroup { group: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NonRectangularGrid { row, expected, .. } => vec![
                format!("Give row {} exactly {} cells", row + 1, expected),
                "Mark empty slots with '_' instead of leaving them out".into(),
            ],
            Self::InvalidRecipe { group, .. } => vec![
                format!("Fix the '{}' entry in your recipe catalog", group),
                "Try: craftgrid validate".into(),
            ],
            Self::ExceedsTable { table_size, .. } => vec![
                format!("The crafting table is {0}x{0}", table_size),
                "Use --table-size to select a larger table".into(),
            ],
            Self::DuplicateGroup { group } => vec![
                format!("Group '{}' is defined more than once", group),
                "Merge the variants into a single group entry".into(),
            ],
            Self::EmptyGroup { group } => vec![
                format!("Add at least one variant to '{}' or remove it", group),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NonRectangularGrid { .. }
            | Self::EmptyAlternativeSet
            | Self::EmptyMaterialId
            | Self::InvalidRecipe { .. }
            | Self::EmptyGroup { .. } => ErrorCategory::Validation,
            Self::ExceedsTable { .. } | Self::InvalidTableSize => ErrorCategory::Compatibility,
            Self::DuplicateGroup { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
}
