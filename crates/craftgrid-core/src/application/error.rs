//! Application layer errors.
//!
//! These errors represent failures in orchestration, not recipe logic.
//! Recipe and grid errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A catalog source could not be read or parsed.
    #[error("Failed to load recipe catalog from {source_name}: {reason}")]
    CatalogLoad { source_name: String, reason: String },

    /// No catalog has been loaded into the store yet.
    #[error("No recipe catalog loaded")]
    CatalogNotLoaded,

    /// A grid description could not be read or parsed.
    #[error("Invalid grid input at {path}: {reason}")]
    GridInput { path: PathBuf, reason: String },

    /// Requested recipe group does not exist.
    #[error("Recipe group not found: {group}")]
    GroupNotFound { group: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Recipe store error")]
    StoreLockError,

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogLoad { source_name, .. } => vec![
                format!("Could not read recipes from: {}", source_name),
                "Check that the file is valid JSON in the catalog format".into(),
                "Omit --catalog to use the built-in recipes".into(),
            ],
            Self::CatalogNotLoaded => vec![
                "Load a catalog before crafting".into(),
                "This is likely a configuration error".into(),
            ],
            Self::GridInput { path, .. } => vec![
                format!("Check the grid file: {}", path.display()),
                "One row per line, cells separated by spaces or commas".into(),
                "Use '_' for an empty slot".into(),
            ],
            Self::GroupNotFound { group } => vec![
                format!("No recipes are registered under '{}'", group),
                "Try: craftgrid list to see available recipes".into(),
            ],
            Self::StoreLockError => vec![
                "The recipe store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogLoad { .. } => ErrorCategory::Configuration,
            Self::CatalogNotLoaded => ErrorCategory::Configuration,
            Self::GridInput { .. } => ErrorCategory::Validation,
            Self::GroupNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
