use serde::{Deserialize, Serialize};

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::EntityStore;

use crate::item::ItemId;

entity_id! {
    /// Unique identifier for a stored (physical, rentable) item.
    pub struct StoredItemId
}

/// A physical unit in storage: which catalog item it is, what renting it
/// costs, and whether it is currently available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredItem {
    pub id: StoredItemId,
    pub item_id: Option<ItemId>,
    pub rent_price: f64,
    pub availability: bool,
}

impl Entity for StoredItem {
    type Id = StoredItemId;
    const KIND: EntityKind = EntityKind::StoredItem;

    fn id(&self) -> StoredItemId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStoredItem {
    pub item_id: Option<ItemId>,
    pub rent_price: f64,
    pub availability: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoredItemUpdate {
    pub item_id: Option<ItemId>,
    pub rent_price: f64,
    pub availability: bool,
}

pub struct StoredItemService<S> {
    store: S,
}

impl<S: EntityStore<StoredItem>> StoredItemService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<StoredItem> {
        self.store.list()
    }

    pub fn get(&self, id: StoredItemId) -> DomainResult<StoredItem> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::StoredItem, id))
    }

    /// Units filtered by the availability flag.
    ///
    /// An empty result is a not-found failure, not an empty list.
    pub fn find_by_availability(&self, available: bool) -> DomainResult<Vec<StoredItem>> {
        let units: Vec<StoredItem> = self
            .store
            .list()
            .into_iter()
            .filter(|s| s.availability == available)
            .collect();

        if units.is_empty() {
            return Err(DomainError::not_found_unkeyed(EntityKind::StoredItem));
        }
        Ok(units)
    }

    pub fn create(&self, new: NewStoredItem) -> StoredItem {
        let unit = StoredItem {
            id: StoredItemId::new(),
            item_id: new.item_id,
            rent_price: new.rent_price,
            availability: new.availability,
        };
        self.store.upsert(unit.clone());
        unit
    }

    pub fn update(&self, id: StoredItemId, changes: StoredItemUpdate) -> DomainResult<StoredItem> {
        let mut unit = self.get(id)?;
        unit.item_id = changes.item_id;
        unit.rent_price = changes.rent_price;
        unit.availability = changes.availability;
        self.store.upsert(unit.clone());
        Ok(unit)
    }

    pub fn delete(&self, id: StoredItemId) -> DomainResult<()> {
        self.get(id)?;
        self.store.remove(&id);
        Ok(())
    }
}
