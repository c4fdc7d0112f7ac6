use serde::{Deserialize, Serialize};

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::EntityStore;

entity_id! {
    /// Unique identifier for a crew role.
    pub struct RoleId
}

/// A job a crew member can fill on an event (driver, sound tech, ...).
///
/// Role names are unique by convention only; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
}

impl Entity for Role {
    type Id = RoleId;
    const KIND: EntityKind = EntityKind::Role;

    fn id(&self) -> RoleId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRole {
    pub name: String,
    pub description: String,
}

/// Full overwrite of the mutable fields; the identifier never changes.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleUpdate {
    pub name: String,
    pub description: String,
}

pub struct RoleService<S> {
    store: S,
}

impl<S: EntityStore<Role>> RoleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Role> {
        self.store.list()
    }

    pub fn get(&self, id: RoleId) -> DomainResult<Role> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Role, id))
    }

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> DomainResult<Role> {
        self.store
            .list()
            .into_iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::not_found_unkeyed(EntityKind::Role))
    }

    pub fn create(&self, new: NewRole) -> Role {
        let role = Role {
            id: RoleId::new(),
            name: new.name,
            description: new.description,
        };
        self.store.upsert(role.clone());
        role
    }

    pub fn update(&self, id: RoleId, changes: RoleUpdate) -> DomainResult<Role> {
        let mut role = self.get(id)?;
        role.name = changes.name;
        role.description = changes.description;
        self.store.upsert(role.clone());
        Ok(role)
    }

    pub fn delete(&self, id: RoleId) -> DomainResult<()> {
        self.get(id)?;
        self.store.remove(&id);
        Ok(())
    }
}
