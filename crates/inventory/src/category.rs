use serde::{Deserialize, Serialize};

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::EntityStore;

use crate::item::Item;

entity_id! {
    /// Unique identifier for an item category.
    pub struct ItemCategoryId
}

/// A grouping for catalog items ("Audio", "Lighting", ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCategory {
    pub id: ItemCategoryId,
    pub name: String,
    pub description: String,
}

impl Entity for ItemCategory {
    type Id = ItemCategoryId;
    const KIND: EntityKind = EntityKind::ItemCategory;

    fn id(&self) -> ItemCategoryId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewItemCategory {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemCategoryUpdate {
    pub name: String,
    pub description: String,
}

pub struct ItemCategoryService<S, I> {
    store: S,
    items: I,
}

impl<S, I> ItemCategoryService<S, I>
where
    S: EntityStore<ItemCategory>,
    I: EntityStore<Item>,
{
    pub fn new(store: S, items: I) -> Self {
        Self { store, items }
    }

    pub fn list(&self) -> Vec<ItemCategory> {
        self.store.list()
    }

    pub fn get(&self, id: ItemCategoryId) -> DomainResult<ItemCategory> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::ItemCategory, id))
    }

    pub fn create(&self, new: NewItemCategory) -> ItemCategory {
        let category = ItemCategory {
            id: ItemCategoryId::new(),
            name: new.name,
            description: new.description,
        };
        self.store.upsert(category.clone());
        category
    }

    pub fn update(&self, id: ItemCategoryId, changes: ItemCategoryUpdate) -> DomainResult<ItemCategory> {
        let mut category = self.get(id)?;
        category.name = changes.name;
        category.description = changes.description;
        self.store.upsert(category.clone());
        Ok(category)
    }

    /// Deleting a category nulls the reference on every dependent item
    /// before the category itself is removed.
    pub fn delete(&self, id: ItemCategoryId) -> DomainResult<()> {
        self.get(id)?;

        for mut item in self.items.list() {
            if item.category_id == Some(id) {
                item.category_id = None;
                self.items.upsert(item);
            }
        }

        self.store.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemService, NewItem};
    use backline_store::InMemoryStore;
    use std::sync::Arc;

    type MemCategories = Arc<InMemoryStore<ItemCategory>>;
    type MemItems = Arc<InMemoryStore<Item>>;

    struct Fixture {
        categories: ItemCategoryService<MemCategories, MemItems>,
        items: ItemService<MemItems, MemCategories>,
    }

    fn fixture() -> Fixture {
        let category_store: MemCategories = Arc::new(InMemoryStore::new());
        let item_store: MemItems = Arc::new(InMemoryStore::new());
        Fixture {
            categories: ItemCategoryService::new(category_store.clone(), item_store.clone()),
            items: ItemService::new(item_store, category_store),
        }
    }

    #[test]
    fn create_then_get_returns_equal_record() {
        let fx = fixture();
        let created = fx.categories.create(NewItemCategory {
            name: "Audio".to_string(),
            description: "Speakers, mixers".to_string(),
        });
        assert_eq!(fx.categories.get(created.id).unwrap(), created);
    }

    #[test]
    fn delete_nulls_the_reference_on_dependent_items() {
        let fx = fixture();
        let audio = fx.categories.create(NewItemCategory {
            name: "Audio".to_string(),
            description: String::new(),
        });
        let speaker = fx.items.create(NewItem {
            name: "Speaker".to_string(),
            description: String::new(),
            category_id: Some(audio.id),
        });
        assert_eq!(fx.items.get(speaker.id).unwrap().category_id, Some(audio.id));

        fx.categories.delete(audio.id).unwrap();

        assert!(fx.categories.get(audio.id).is_err());
        assert_eq!(fx.items.get(speaker.id).unwrap().category_id, None);
    }

    #[test]
    fn delete_missing_category_fails_with_not_found() {
        let fx = fixture();
        let id = ItemCategoryId::new();
        assert_eq!(
            fx.categories.delete(id).unwrap_err(),
            DomainError::not_found(EntityKind::ItemCategory, id)
        );
    }
}
