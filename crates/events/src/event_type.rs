use serde::{Deserialize, Serialize};

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::EntityStore;

entity_id! {
    /// Unique identifier for an event type.
    pub struct EventTypeId
}

/// A kind of booking ("wedding", "festival", ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventType {
    pub id: EventTypeId,
    pub name: String,
    pub description: String,
}

impl Entity for EventType {
    type Id = EventTypeId;
    const KIND: EntityKind = EntityKind::EventType;

    fn id(&self) -> EventTypeId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEventType {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventTypeUpdate {
    pub name: String,
    pub description: String,
}

pub struct EventTypeService<S> {
    store: S,
}

impl<S: EntityStore<EventType>> EventTypeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<EventType> {
        self.store.list()
    }

    pub fn get(&self, id: EventTypeId) -> DomainResult<EventType> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::EventType, id))
    }

    pub fn create(&self, new: NewEventType) -> EventType {
        let event_type = EventType {
            id: EventTypeId::new(),
            name: new.name,
            description: new.description,
        };
        self.store.upsert(event_type.clone());
        event_type
    }

    pub fn update(&self, id: EventTypeId, changes: EventTypeUpdate) -> DomainResult<EventType> {
        let mut event_type = self.get(id)?;
        event_type.name = changes.name;
        event_type.description = changes.description;
        self.store.upsert(event_type.clone());
        Ok(event_type)
    }

    pub fn delete(&self, id: EventTypeId) -> DomainResult<()> {
        self.get(id)?;
        self.store.remove(&id);
        Ok(())
    }
}
