//! Unified error handling for craftgrid core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for craftgrid core operations.
///
/// "No match" is never an error; it is the `None` a resolver returns. This
/// enum only covers broken inputs and infrastructure failures.
#[derive(Debug, Error, Clone)]
pub enum CraftError {
    /// Errors from the domain layer (invalid grids or recipes).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (store and catalog failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CraftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CraftResult<T> = Result<T, CraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_category_is_mapped() {
        let err: CraftError = DomainError::InvalidTableSize.into();
        assert_eq!(err.category(), ErrorCategory::Compatibility);
    }

    #[test]
    fn application_category_passes_through() {
        let lock: CraftError = ApplicationError::StoreLockError.into();
        assert_eq!(lock.category(), ErrorCategory::Internal);

        let missing: CraftError = ApplicationError::GroupNotFound {
            group: "anvil".into(),
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert!(missing.suggestions().iter().any(|s| s.contains("anvil")));
    }
}
