//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a single field value was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// Text was empty or whitespace only.
    Blank,
    /// A number that must be non-negative was below zero.
    Negative,
    /// A floating point value was NaN or infinite.
    NotFinite,
    /// A number fell outside an inclusive range.
    OutOfRange { min: i64, max: i64 },
}

impl core::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationReason::Blank => f.write_str("cannot be blank"),
            ValidationReason::Negative => f.write_str("cannot be negative"),
            ValidationReason::NotFinite => f.write_str("must be a finite number"),
            ValidationReason::OutOfRange { min, max } => {
                write!(f, "must be between {min} and {max}")
            }
        }
    }
}

/// Domain-level error.
///
/// Every failure is synchronous and local to the call that produced it. The
/// domain never retries and never logs; callers translate these into
/// user-facing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single field failed validation.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: ValidationReason,
    },

    /// The item number is already claimed by another entry.
    #[error("the item number {0} is already in use")]
    DuplicateKey(String),

    /// No entry exists for the item number.
    #[error("no item registered with item number: {0}")]
    NotFound(String),

    /// The operation would leave an entry in an invalid state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A caller-supplied argument was unacceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: ValidationReason) -> Self {
        Self::Validation { field, reason }
    }

    pub fn duplicate(item_number: impl Into<String>) -> Self {
        Self::DuplicateKey(item_number.into())
    }

    pub fn not_found(item_number: impl Into<String>) -> Self {
        Self::NotFound(item_number.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Field name for validation failures, `None` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
