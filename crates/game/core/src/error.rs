//! Error types for the progression engine.
//!
//! Every error here is synchronous and non-retryable: it reports a caller or
//! input mistake, never a transient condition. Operations validate their
//! arguments before touching state, so a returned error always means nothing
//! was mutated.

use crate::stats::StatKind;

/// Result alias used across progression-core.
pub type ProgressionResult<T> = Result<T, ProgressionError>;

/// Failure raised by a progression operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionError {
    /// The named sub-stat or derived field does not exist on the category,
    /// or anywhere when `category` is `None`.
    #[error("no such attribute named \"{name}\"{}", scope(.category))]
    UnknownAttribute {
        category: Option<StatKind>,
        name: String,
    },

    /// An argument is out of range (negative experience or a negative factor).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl ProgressionError {
    pub(crate) fn unknown(category: Option<StatKind>, name: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            category,
            name: name.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAttribute { .. } => "UNKNOWN_ATTRIBUTE",
            Self::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

fn scope(category: &Option<StatKind>) -> String {
    category
        .map(|category| format!(" on {category}"))
        .unwrap_or_default()
}

/// Converts a signed experience amount into an unsigned deposit.
pub(crate) fn non_negative(amount: i64, what: &str) -> ProgressionResult<u64> {
    u64::try_from(amount).map_err(|_| {
        ProgressionError::invalid(format!("{what} must not be negative, got {amount}"))
    })
}
