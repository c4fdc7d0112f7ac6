//! Rental inventory domain.
//!
//! Catalog items grouped into categories, and stored units (the physical,
//! rentable copies with a price and an availability flag).

pub mod category;
pub mod item;
pub mod stored_item;

pub use category::{ItemCategory, ItemCategoryId, ItemCategoryService, ItemCategoryUpdate, NewItemCategory};
pub use item::{Item, ItemId, ItemService, ItemUpdate, NewItem};
pub use stored_item::{NewStoredItem, StoredItem, StoredItemId, StoredItemService, StoredItemUpdate};
