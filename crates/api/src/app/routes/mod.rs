use axum::Router;

pub mod auth;
pub mod bills;
pub mod employees;
pub mod event_types;
pub mod events;
pub mod item_categories;
pub mod items;
pub mod roles;
pub mod stored_items;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/roles", roles::router())
        .nest("/employees", employees::router())
        .nest("/item-categories", item_categories::router())
        .nest("/items", items::router())
        .nest("/stored-items", stored_items::router())
        .nest("/event-types", event_types::router())
        .nest("/events", events::router())
        .nest("/bills", bills::router())
}
