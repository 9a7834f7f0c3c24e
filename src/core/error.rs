use thiserror::Error;

use super::ruc::RucError;

/// Errors that can occur while building or assembling an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturaError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The draft has no client selected.
    #[error("a client is required to issue the invoice")]
    MissingClient,

    /// A legal-person client has no RUC.
    #[error("client is a legal person and must carry a RUC")]
    MissingTaxId,

    /// A geography id has no known name and the caller supplied none.
    #[error("unknown {kind} id {id}: supply its name explicitly")]
    UnknownGeography {
        /// "department", "district" or "city".
        kind: &'static str,
        id: u32,
    },

    /// RUC failed validation.
    ///
    /// Produced by `?` on [`Ruc::parse`](super::ruc::Ruc::parse) or
    /// [`validate_ruc`](super::ruc::validate_ruc) in caller code. Client
    /// validation reports RUC problems as [`ValidationError`]s instead.
    #[error(transparent)]
    Ruc(#[from] RucError),

    /// Document numbering error.
    #[error("numbering error: {0}")]
    Numbering(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into a single `FacturaError::Validation`.
pub(crate) fn join_errors(errors: &[ValidationError]) -> FacturaError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    FacturaError::Validation(msg)
}
