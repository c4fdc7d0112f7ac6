use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::EntityStore;

use crate::category::{ItemCategory, ItemCategoryId};

entity_id! {
    /// Unique identifier for a catalog item.
    pub struct ItemId
}

/// A catalog entry ("Speaker", "Par can"). Physical rentable copies are
/// tracked separately as stored items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category_id: Option<ItemCategoryId>,
}

impl Entity for Item {
    type Id = ItemId;
    const KIND: EntityKind = EntityKind::Item;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub category_id: Option<ItemCategoryId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemUpdate {
    pub name: String,
    pub description: String,
    pub category_id: Option<ItemCategoryId>,
}

pub struct ItemService<S, C> {
    store: S,
    categories: C,
}

impl<S, C> ItemService<S, C>
where
    S: EntityStore<Item>,
    C: EntityStore<ItemCategory>,
{
    pub fn new(store: S, categories: C) -> Self {
        Self { store, categories }
    }

    pub fn list(&self) -> Vec<Item> {
        self.store.list()
    }

    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Item, id))
    }

    /// A provided non-nil category id is preserved as given; a nil or absent
    /// one is cleared.
    pub fn create(&self, new: NewItem) -> Item {
        let item = Item {
            id: ItemId::new(),
            name: new.name,
            description: new.description,
            category_id: new.category_id.filter(|c| *c.as_uuid() != Uuid::nil()),
        };
        self.store.upsert(item.clone());
        item
    }

    /// The category reference is re-resolved from the store; a dangling or
    /// absent id leaves the category unset.
    pub fn update(&self, id: ItemId, changes: ItemUpdate) -> DomainResult<Item> {
        let mut item = self.get(id)?;
        item.name = changes.name;
        item.description = changes.description;
        item.category_id = changes
            .category_id
            .and_then(|category_id| self.categories.get(&category_id))
            .map(|category| category.id);
        self.store.upsert(item.clone());
        Ok(item)
    }

    /// Detaches the category reference before removing the record.
    pub fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut item = self.get(id)?;
        if item.category_id.take().is_some() {
            self.store.upsert(item);
        }
        self.store.remove(&id);
        Ok(())
    }
}
