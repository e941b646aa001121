mod event;
mod filter;
mod join;

pub use event::{
    Audience, Career, Event, EventState, EventType, NewEvent, NewEventError, ValidatedNewEvent,
};
pub use filter::{filter_events, published, CatalogFilter, PaymentFilter};
pub use join::{attach_responsables, responsable_ids, EventWithResponsable, ResponsableSummary};
