use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use backline_core::{DomainError, DomainResult, Entity};

/// Keyed entity storage: find-by-id, find-all, save (insert-or-update), delete.
///
/// Entities returned from the store are owned copies; mutating them does
/// nothing until they are passed back through [`EntityStore::upsert`].
pub trait EntityStore<E: Entity>: Send + Sync {
    fn get(&self, id: &E::Id) -> Option<E>;
    fn list(&self) -> Vec<E>;
    fn upsert(&self, entity: E);
    /// Removes the record; returns whether it existed.
    fn remove(&self, id: &E::Id) -> bool;
}

impl<E, S> EntityStore<E> for Arc<S>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    fn get(&self, id: &E::Id) -> Option<E> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<E> {
        (**self).list()
    }

    fn upsert(&self, entity: E) {
        (**self).upsert(entity)
    }

    fn remove(&self, id: &E::Id) -> bool {
        (**self).remove(id)
    }
}

/// Resolve every id in `ids`, failing before any mutation if one is missing.
///
/// The error names the first unresolvable id. Duplicate ids resolve to
/// duplicate copies; owners that keep edge sets dedupe on insert.
pub fn resolve_all<E, S>(store: &S, ids: &[E::Id]) -> DomainResult<Vec<E>>
where
    E: Entity,
    S: EntityStore<E>,
{
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        match store.get(id) {
            Some(entity) => resolved.push(entity),
            None => return Err(DomainError::not_found(E::KIND, *id)),
        }
    }
    Ok(resolved)
}

/// In-memory entity store for tests/dev.
#[derive(Debug)]
pub struct InMemoryStore<E: Entity> {
    inner: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    fn get(&self, id: &E::Id) -> Option<E> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<E> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn upsert(&self, entity: E) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(entity.id(), entity);
        }
    }

    fn remove(&self, id: &E::Id) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backline_core::EntityKind;

    backline_core::entity_id! {
        pub struct GadgetId
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Gadget {
        id: GadgetId,
        name: String,
    }

    impl Entity for Gadget {
        type Id = GadgetId;
        const KIND: EntityKind = EntityKind::Item;

        fn id(&self) -> GadgetId {
            self.id
        }
    }

    fn gadget(name: &str) -> Gadget {
        Gadget {
            id: GadgetId::new(),
            name: name.to_string(),
        }
    }

    #[test]
    fn upsert_then_get_returns_the_record() {
        let store = InMemoryStore::new();
        let g = gadget("mixer");
        store.upsert(g.clone());
        assert_eq!(store.get(&g.id), Some(g));
    }

    #[test]
    fn upsert_overwrites_existing_record() {
        let store = InMemoryStore::new();
        let mut g = gadget("mixer");
        store.upsert(g.clone());
        g.name = "desk".to_string();
        store.upsert(g.clone());
        assert_eq!(store.get(&g.id).unwrap().name, "desk");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn remove_reports_whether_the_record_existed() {
        let store = InMemoryStore::new();
        let g = gadget("cable");
        store.upsert(g.clone());
        assert!(store.remove(&g.id));
        assert!(!store.remove(&g.id));
        assert_eq!(store.get(&g.id), None);
    }

    #[test]
    fn resolve_all_returns_every_entity() {
        let store = InMemoryStore::new();
        let a = gadget("a");
        let b = gadget("b");
        store.upsert(a.clone());
        store.upsert(b.clone());

        let resolved = resolve_all(&store, &[a.id, b.id]).unwrap();
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn resolve_all_fails_on_the_first_missing_id() {
        let store = InMemoryStore::new();
        let a = gadget("a");
        store.upsert(a.clone());
        let missing = GadgetId::new();

        let err = resolve_all(&store, &[a.id, missing]).unwrap_err();
        assert_eq!(
            err,
            DomainError::not_found(EntityKind::Item, missing)
        );
    }
}
