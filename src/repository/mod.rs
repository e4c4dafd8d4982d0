//! Typed repositories over the helper bridge.
//!
//! Each repository maps a typed, already-validated request into the flat
//! argument vector the helper expects, invokes the bridge, and shapes the
//! returned JSON payload into immutable domain records. Nothing is cached:
//! records are snapshots reconstructed on every read, and identity is the
//! helper-assigned `id`, which this layer only ever forwards.

pub mod args;
pub mod events;
pub mod links;
pub mod records;
pub mod reminders;
pub mod requests;

pub use args::ArgumentVector;
pub use events::EventRepository;
pub use records::{
    Calendar, CalendarEvent, EventsReadResult, Frequency, RecurrenceRule, Reminder,
    ReminderList, ReminderReadResult,
};
pub use reminders::ReminderRepository;
pub use requests::{
    CreateEventData, CreateReminderData, EventFilter, ReminderFilter, UpdateEventData,
    UpdateReminderData,
};
