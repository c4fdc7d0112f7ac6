//! Bookings domain: event types, events, bills.
//!
//! An event owns three association edge sets: the crew working it, the
//! stored items rented out for it, and the bills raised against it.

pub mod bill;
pub mod event;
pub mod event_type;

pub use bill::{Bill, BillId, BillService, BillUpdate, NewBill};
pub use event::{Event, EventId, EventService, EventUpdate, NewEvent};
pub use event_type::{EventType, EventTypeId, EventTypeService, EventTypeUpdate, NewEventType};
