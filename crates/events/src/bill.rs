use serde::{Deserialize, Serialize};

use backline_core::{DomainError, DomainResult, Entity, EntityKind, entity_id};
use backline_store::EntityStore;

entity_id! {
    /// Unique identifier for a bill.
    pub struct BillId
}

/// A bill raised against an event.
///
/// Which event a bill belongs to lives in the event's edge set; the bill
/// record itself carries no back-reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub id: BillId,
    pub bill_number: String,
    pub price: f64,
    pub additional_costs: f64,
}

impl Entity for Bill {
    type Id = BillId;
    const KIND: EntityKind = EntityKind::Bill;

    fn id(&self) -> BillId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBill {
    pub bill_number: String,
    pub price: f64,
    pub additional_costs: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillUpdate {
    pub bill_number: String,
    pub price: f64,
    pub additional_costs: f64,
}

pub struct BillService<S> {
    store: S,
}

impl<S: EntityStore<Bill>> BillService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Bill> {
        self.store.list()
    }

    pub fn get(&self, id: BillId) -> DomainResult<Bill> {
        self.store
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Bill, id))
    }

    pub fn create(&self, new: NewBill) -> Bill {
        let bill = Bill {
            id: BillId::new(),
            bill_number: new.bill_number,
            price: new.price,
            additional_costs: new.additional_costs,
        };
        self.store.upsert(bill.clone());
        bill
    }

    pub fn update(&self, id: BillId, changes: BillUpdate) -> DomainResult<Bill> {
        let mut bill = self.get(id)?;
        bill.bill_number = changes.bill_number;
        bill.price = changes.price;
        bill.additional_costs = changes.additional_costs;
        self.store.upsert(bill.clone());
        Ok(bill)
    }

    pub fn delete(&self, id: BillId) -> DomainResult<()> {
        self.get(id)?;
        self.store.remove(&id);
        Ok(())
    }
}
