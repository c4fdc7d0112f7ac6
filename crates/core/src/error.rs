//! Domain error model.

use thiserror::Error;
use uuid::Uuid;

use crate::entity::EntityKind;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (lookups,
/// validation). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested entity was not found.
    ///
    /// `id` is `None` when the lookup was by a non-id field (email, name,
    /// availability flag).
    #[error("{}", not_found_message(.kind, .id))]
    NotFound { kind: EntityKind, id: Option<Uuid> },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

fn not_found_message(kind: &EntityKind, id: &Option<Uuid>) -> String {
    match id {
        Some(id) => format!("{kind} not found: {id}"),
        None => format!("{kind} not found"),
    }
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: impl Into<Uuid>) -> Self {
        Self::NotFound {
            kind,
            id: Some(id.into()),
        }
    }

    /// Not-found for a lookup that was not keyed by id.
    pub fn not_found_unkeyed(kind: EntityKind) -> Self {
        Self::NotFound { kind, id: None }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
