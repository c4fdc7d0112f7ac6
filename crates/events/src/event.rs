use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_crew::{Employee, EmployeeId};
use backline_inventory::{StoredItem, StoredItemId};
use backline_store::{EntityStore, resolve_all};

use crate::bill::{Bill, BillId};
use crate::event_type::EventTypeId;

entity_id! {
    /// Unique identifier for an event.
    pub struct EventId
}

/// A booking: where and when it happens, its run-of-show times, and the
/// crew, gear and bills attached to it.
///
/// The event is the sole owner of each association edge. Removing an id
/// from one of the sets detaches the related record without touching it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub address: String,
    pub date: NaiveDate,
    pub meetup_time: String,
    pub arrival_time: String,
    pub ready_time: String,
    pub sound_check_time: String,
    pub guest_time: String,
    pub end_time: String,
    pub event_type_id: Option<EventTypeId>,
    pub employees: BTreeSet<EmployeeId>,
    pub stored_items: BTreeSet<StoredItemId>,
    pub bills: BTreeSet<BillId>,
}

impl Entity for Event {
    type Id = EventId;
    const KIND: EntityKind = EntityKind::Event;

    fn id(&self) -> EventId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub address: String,
    pub date: NaiveDate,
    pub meetup_time: String,
    pub arrival_time: String,
    pub ready_time: String,
    pub sound_check_time: String,
    pub guest_time: String,
    pub end_time: String,
    pub event_type_id: Option<EventTypeId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventUpdate {
    pub title: String,
    pub address: String,
    pub date: NaiveDate,
    pub meetup_time: String,
    pub arrival_time: String,
    pub ready_time: String,
    pub sound_check_time: String,
    pub guest_time: String,
    pub end_time: String,
    pub event_type_id: Option<EventTypeId>,
}

pub struct EventService<S, E, I, B> {
    store: S,
    employees: E,
    stored_items: I,
    bills: B,
}

impl<S, E, I, B> EventService<S, E, I, B>
where
    S: EntityStore<Event>,
    E: EntityStore<Employee>,
    I: EntityStore<StoredItem>,
    B: EntityStore<Bill>,
{
    pub fn new(store: S, employees: E, stored_items: I, bills: B) -> Self {
        Self {
            store,
            employees,
            stored_items,
            bills,
        }
    }

    pub fn list(&self) -> Vec<Event> {
        self.store.list()
    }

    pub fn get(&self, id: EventId) -> DomainResult<Event> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Event, id))
    }

    pub fn create(&self, new: NewEvent) -> Event {
        let event = Event {
            id: EventId::new(),
            title: new.title,
            address: new.address,
            date: new.date,
            meetup_time: new.meetup_time,
            arrival_time: new.arrival_time,
            ready_time: new.ready_time,
            sound_check_time: new.sound_check_time,
            guest_time: new.guest_time,
            end_time: new.end_time,
            event_type_id: new.event_type_id,
            employees: BTreeSet::new(),
            stored_items: BTreeSet::new(),
            bills: BTreeSet::new(),
        };
        self.store.upsert(event.clone());
        event
    }

    /// Overwrites the event's own fields. The association edge sets are
    /// untouched; those change only through the dedicated operations.
    pub fn update(&self, id: EventId, changes: EventUpdate) -> DomainResult<Event> {
        let mut event = self.get(id)?;
        event.title = changes.title;
        event.address = changes.address;
        event.date = changes.date;
        event.meetup_time = changes.meetup_time;
        event.arrival_time = changes.arrival_time;
        event.ready_time = changes.ready_time;
        event.sound_check_time = changes.sound_check_time;
        event.guest_time = changes.guest_time;
        event.end_time = changes.end_time;
        event.event_type_id = changes.event_type_id;
        self.store.upsert(event.clone());
        Ok(event)
    }

    pub fn delete(&self, id: EventId) -> DomainResult<()> {
        self.get(id)?;
        self.store.remove(&id);
        Ok(())
    }

    /// Adds or removes crew on the event. Every id must resolve to an
    /// existing employee or the event is left unchanged.
    pub fn update_employees(
        &self,
        id: EventId,
        employee_ids: &[EmployeeId],
        remove: bool,
    ) -> DomainResult<Event> {
        let mut event = self.get(id)?;
        resolve_all(&self.employees, employee_ids)?;
        apply_edges(&mut event.employees, employee_ids, remove);
        self.store.upsert(event.clone());
        Ok(event)
    }

    /// Adds or removes rented units on the event, same contract as
    /// [`update_employees`](Self::update_employees).
    pub fn update_stored_items(
        &self,
        id: EventId,
        stored_item_ids: &[StoredItemId],
        remove: bool,
    ) -> DomainResult<Event> {
        let mut event = self.get(id)?;
        resolve_all(&self.stored_items, stored_item_ids)?;
        apply_edges(&mut event.stored_items, stored_item_ids, remove);
        self.store.upsert(event.clone());
        Ok(event)
    }

    /// Adds or removes bills on the event, same contract as
    /// [`update_employees`](Self::update_employees).
    pub fn update_bills(
        &self,
        id: EventId,
        bill_ids: &[BillId],
        remove: bool,
    ) -> DomainResult<Event> {
        let mut event = self.get(id)?;
        resolve_all(&self.bills, bill_ids)?;
        apply_edges(&mut event.bills, bill_ids, remove);
        self.store.upsert(event.clone());
        Ok(event)
    }
}

fn apply_edges<Id: Copy + Ord>(edges: &mut BTreeSet<Id>, ids: &[Id], remove: bool) {
    for id in ids {
        if remove {
            edges.remove(id);
        } else {
            edges.insert(*id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::{BillService, NewBill};
    use backline_store::InMemoryStore;
    use std::sync::Arc;

    type Events = EventService<
        Arc<InMemoryStore<Event>>,
        Arc<InMemoryStore<Employee>>,
        Arc<InMemoryStore<StoredItem>>,
        Arc<InMemoryStore<Bill>>,
    >;

    struct Fixture {
        events: Events,
        employees: Arc<InMemoryStore<Employee>>,
        stored_items: Arc<InMemoryStore<StoredItem>>,
        bills: Arc<InMemoryStore<Bill>>,
    }

    fn fixture() -> Fixture {
        let employees = Arc::new(InMemoryStore::new());
        let stored_items = Arc::new(InMemoryStore::new());
        let bills = Arc::new(InMemoryStore::new());
        let events = EventService::new(
            Arc::new(InMemoryStore::new()),
            Arc::clone(&employees),
            Arc::clone(&stored_items),
            Arc::clone(&bills),
        );
        Fixture {
            events,
            employees,
            stored_items,
            bills,
        }
    }

    fn new_event() -> NewEvent {
        NewEvent {
            title: "Summer gala".to_string(),
            address: "Town hall".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            meetup_time: "14:00".to_string(),
            arrival_time: "15:00".to_string(),
            ready_time: "17:00".to_string(),
            sound_check_time: "17:30".to_string(),
            guest_time: "19:00".to_string(),
            end_time: "23:30".to_string(),
            event_type_id: None,
        }
    }

    fn employee(store: &Arc<InMemoryStore<Employee>>) -> Employee {
        let record = Employee {
            id: EmployeeId::new(),
            first_name: "Ona".to_string(),
            last_name: "Petraitė".to_string(),
            address1: String::new(),
            address2: String::new(),
            email: "ona@example.com".to_string(),
            mobile_phone: String::new(),
            password_hash: "hash".to_string(),
            roles: BTreeSet::new(),
        };
        store.upsert(record.clone());
        record
    }

    fn stored_item(store: &Arc<InMemoryStore<StoredItem>>) -> StoredItem {
        let record = StoredItem {
            id: StoredItemId::new(),
            item_id: None,
            rent_price: 30.0,
            availability: true,
        };
        store.upsert(record.clone());
        record
    }

    #[test]
    fn update_overwrites_fields_but_not_edges() {
        let fx = fixture();
        let created = fx.events.create(new_event());
        let worker = employee(&fx.employees);
        fx.events
            .update_employees(created.id, &[worker.id], false)
            .unwrap();

        let mut changes_source = new_event();
        changes_source.title = "Winter gala".to_string();
        let updated = fx
            .events
            .update(
                created.id,
                EventUpdate {
                    title: changes_source.title,
                    address: changes_source.address,
                    date: changes_source.date,
                    meetup_time: changes_source.meetup_time,
                    arrival_time: changes_source.arrival_time,
                    ready_time: changes_source.ready_time,
                    sound_check_time: changes_source.sound_check_time,
                    guest_time: changes_source.guest_time,
                    end_time: changes_source.end_time,
                    event_type_id: changes_source.event_type_id,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Winter gala");
        assert!(updated.employees.contains(&worker.id));
    }

    #[test]
    fn adding_crew_twice_is_idempotent() {
        let fx = fixture();
        let event = fx.events.create(new_event());
        let worker = employee(&fx.employees);

        fx.events
            .update_employees(event.id, &[worker.id, worker.id], false)
            .unwrap();
        let after = fx
            .events
            .update_employees(event.id, &[worker.id], false)
            .unwrap();

        assert_eq!(after.employees.len(), 1);
    }

    #[test]
    fn removing_an_unattached_id_is_a_no_op() {
        let fx = fixture();
        let event = fx.events.create(new_event());
        let unit = stored_item(&fx.stored_items);

        let after = fx
            .events
            .update_stored_items(event.id, &[unit.id], true)
            .unwrap();

        assert!(after.stored_items.is_empty());
    }

    #[test]
    fn one_unknown_id_fails_the_whole_request_without_mutation() {
        let fx = fixture();
        let event = fx.events.create(new_event());
        let worker = employee(&fx.employees);
        let missing = EmployeeId::new();

        let err = fx
            .events
            .update_employees(event.id, &[worker.id, missing], false)
            .unwrap_err();

        assert_eq!(err, DomainError::not_found(EntityKind::Employee, missing));
        assert!(fx.events.get(event.id).unwrap().employees.is_empty());
    }

    #[test]
    fn bills_attach_and_detach() {
        let fx = fixture();
        let event = fx.events.create(new_event());
        let bill = BillService::new(Arc::clone(&fx.bills)).create(NewBill {
            bill_number: "2026-0001".to_string(),
            price: 500.0,
            additional_costs: 0.0,
        });

        let attached = fx.events.update_bills(event.id, &[bill.id], false).unwrap();
        assert!(attached.bills.contains(&bill.id));

        let detached = fx.events.update_bills(event.id, &[bill.id], true).unwrap();
        assert!(detached.bills.is_empty());
    }

    #[test]
    fn unknown_event_is_not_found_before_ids_are_checked() {
        let fx = fixture();
        let missing = EventId::new();

        let err = fx.events.update_bills(missing, &[], false).unwrap_err();
        assert_eq!(err, DomainError::not_found(EntityKind::Event, missing));
    }
}
