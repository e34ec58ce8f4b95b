//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic failures while interpreting values
/// (tokens, identifiers). Load/transport failures belong to the catalog crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A token did not name any known variant (sort mode, price bucket, ...).
    #[error("unknown {kind} token: {token:?}")]
    InvalidToken { kind: &'static str, token: String },

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::InvalidToken {
            kind,
            token: token.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
