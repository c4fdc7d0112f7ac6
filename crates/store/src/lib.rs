//! Entity persistence seam.
//!
//! The [`EntityStore`] trait is the only boundary the domain services see;
//! the relational engine behind it is deliberately out of scope. An
//! in-memory implementation ships for dev/test wiring.

pub mod entity_store;

pub use entity_store::{EntityStore, InMemoryStore, resolve_all};
