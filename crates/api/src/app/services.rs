use std::sync::Arc;

use backline_auth::Hs256TokenCodec;
use backline_crew::{AuthService, Employee, EmployeeService, Role, RoleService};
use backline_events::{Bill, BillService, Event, EventService, EventType, EventTypeService};
use backline_inventory::{
    Item, ItemCategory, ItemCategoryService, ItemService, StoredItem, StoredItemService,
};
use backline_store::InMemoryStore;

/// Shared in-process store handle, one per entity kind.
pub type Store<E> = Arc<InMemoryStore<E>>;

/// All domain services, wired over the same underlying stores so that
/// cross-entity rules (association checks, cascades) see one state.
pub struct AppServices {
    pub roles: RoleService<Store<Role>>,
    pub employees: EmployeeService<Store<Employee>, Store<Role>>,
    pub auth: AuthService<Store<Employee>>,
    pub item_categories: ItemCategoryService<Store<ItemCategory>, Store<Item>>,
    pub items: ItemService<Store<Item>, Store<ItemCategory>>,
    pub stored_items: StoredItemService<Store<StoredItem>>,
    pub event_types: EventTypeService<Store<EventType>>,
    pub bills: BillService<Store<Bill>>,
    pub events: EventService<Store<Event>, Store<Employee>, Store<StoredItem>, Store<Bill>>,
}

pub fn build_services(tokens: Arc<Hs256TokenCodec>) -> AppServices {
    let roles: Store<Role> = Arc::new(InMemoryStore::new());
    let employees: Store<Employee> = Arc::new(InMemoryStore::new());
    let categories: Store<ItemCategory> = Arc::new(InMemoryStore::new());
    let items: Store<Item> = Arc::new(InMemoryStore::new());
    let stored_items: Store<StoredItem> = Arc::new(InMemoryStore::new());
    let event_types: Store<EventType> = Arc::new(InMemoryStore::new());
    let bills: Store<Bill> = Arc::new(InMemoryStore::new());
    let events: Store<Event> = Arc::new(InMemoryStore::new());

    AppServices {
        roles: RoleService::new(Arc::clone(&roles)),
        employees: EmployeeService::new(Arc::clone(&employees), Arc::clone(&roles)),
        auth: AuthService::new(Arc::clone(&employees), tokens),
        item_categories: ItemCategoryService::new(Arc::clone(&categories), Arc::clone(&items)),
        items: ItemService::new(Arc::clone(&items), Arc::clone(&categories)),
        stored_items: StoredItemService::new(Arc::clone(&stored_items)),
        event_types: EventTypeService::new(Arc::clone(&event_types)),
        bills: BillService::new(Arc::clone(&bills)),
        events: EventService::new(events, employees, stored_items, bills),
    }
}
