//! Error infrastructure for aoplan-core.
//!
//! The evaluator and the aggregator never fail: malformed catalog data is
//! tolerated and defaulted. Errors only arise where raw catalog records are
//! turned into typed values, or when a caller asks for an entry that does not
//! exist.
//!
//! # Design Principles
//!
//! - **Type Safety**: one error enum per boundary, variants carry the offending value
//! - **Severity Classification**: errors are categorized for recovery strategies

use crate::catalog::EntryId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request can be retried with different input.
    ///
    /// Examples: looking up an entry id that is not in the catalog
    Recoverable,

    /// The data itself is invalid and must be fixed at the source.
    ///
    /// Examples: unknown operator code, duplicate entry id
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all aoplan-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while building or querying a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown criterion operator code {code}")]
    UnknownOperator { code: i32 },

    #[error("catalog entry {id} is defined more than once")]
    DuplicateEntry { id: EntryId },

    #[error("catalog entry {id} does not exist")]
    UnknownEntry { id: EntryId },
}

impl PlannerError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownOperator { .. } | Self::DuplicateEntry { .. } => ErrorSeverity::Validation,
            Self::UnknownEntry { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOperator { .. } => "CATALOG_UNKNOWN_OPERATOR",
            Self::DuplicateEntry { .. } => "CATALOG_DUPLICATE_ENTRY",
            Self::UnknownEntry { .. } => "CATALOG_UNKNOWN_ENTRY",
        }
    }
}
