//! Entity trait: identity + continuity across state changes.

use serde::{Deserialize, Serialize};

/// Entity marker + minimal interface.
///
/// Entities are transient request-scoped views; the entity store owns the
/// persisted state.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Strongly-typed entity identifier.
    type Id: Copy
        + Eq
        + Ord
        + core::hash::Hash
        + core::fmt::Debug
        + Into<uuid::Uuid>
        + Send
        + Sync
        + 'static;

    /// Entity kind tag, used in not-found errors.
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// The kinds of entity this system stores.
///
/// One tag per entity rather than one error type per entity; the API layer
/// matches on the kind where it needs per-resource messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Role,
    Employee,
    ItemCategory,
    Item,
    StoredItem,
    EventType,
    Event,
    Bill,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Role => "role",
            EntityKind::Employee => "employee",
            EntityKind::ItemCategory => "item category",
            EntityKind::Item => "item",
            EntityKind::StoredItem => "stored item",
            EntityKind::EventType => "event type",
            EntityKind::Event => "event",
            EntityKind::Bill => "bill",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
