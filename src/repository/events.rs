//! Repository for calendar events and calendars.

use std::sync::Arc;

use crate::error::{BridgeError, Result};
use crate::helper::executor::HelperBridge;

use super::args::ArgumentVector;
use super::records::{Calendar, CalendarEvent, EventsReadResult, from_payload};
use super::requests::{CreateEventData, EventFilter, UpdateEventData};

/// Repository mapping calendar requests onto helper invocations.
pub struct EventRepository {
    bridge: Arc<dyn HelperBridge>,
}

impl EventRepository {
    /// Create a repository over the given bridge.
    pub fn new(bridge: Arc<dyn HelperBridge>) -> Self {
        Self { bridge }
    }

    /// Create an event and return the stored record.
    pub async fn create_event(&self, data: &CreateEventData) -> Result<CalendarEvent> {
        let args = ArgumentVector::for_action("create-event")
            .flag("--title", &data.title)
            .flag("--start-date", &data.start_date)
            .flag("--end-date", &data.end_date)
            .opt("--calendar", data.calendar.as_deref())
            .opt("--notes", data.notes.as_deref())
            .opt("--location", data.location.as_deref())
            .opt("--url", data.url.as_deref())
            .opt_bool("--is-all-day", data.is_all_day)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        from_payload(payload)
    }

    /// Update an event and return the stored record.
    pub async fn update_event(&self, data: &UpdateEventData) -> Result<CalendarEvent> {
        let args = ArgumentVector::for_action("update-event")
            .flag("--id", &data.id)
            .opt("--title", data.title.as_deref())
            .opt("--start-date", data.start_date.as_deref())
            .opt("--end-date", data.end_date.as_deref())
            .opt("--calendar", data.calendar.as_deref())
            .opt("--notes", data.notes.as_deref())
            .opt("--location", data.location.as_deref())
            .opt("--url", data.url.as_deref())
            .opt_bool("--is-all-day", data.is_all_day)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        from_payload(payload)
    }

    /// Delete an event by identifier.
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let args = ArgumentVector::for_action("delete-event")
            .flag("--id", id)
            .into_vec();
        self.bridge.execute(&args).await?;
        Ok(())
    }

    /// Find a single event by identifier.
    pub async fn find_event_by_id(&self, id: &str) -> Result<CalendarEvent> {
        let args = ArgumentVector::for_action("read-events")
            .flag("--id", id)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        let result: EventsReadResult = from_payload(payload)?;
        result
            .events
            .into_iter()
            .next()
            .ok_or_else(|| BridgeError::CliUser(format!("Event with ID {id} not found")))
    }

    /// Find events matching the filter.
    pub async fn find_events(&self, filter: &EventFilter) -> Result<Vec<CalendarEvent>> {
        let args = ArgumentVector::for_action("read-events")
            .opt("--calendar", filter.calendar.as_deref())
            .opt("--start-date", filter.start_date.as_deref())
            .opt("--end-date", filter.end_date.as_deref())
            .opt("--search", filter.search.as_deref())
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        let result: EventsReadResult = from_payload(payload)?;
        Ok(result.events)
    }

    /// All calendars. Read-only: the helper exposes no calendar mutation.
    pub async fn find_all_calendars(&self) -> Result<Vec<Calendar>> {
        let args = ArgumentVector::for_action("read-calendars").into_vec();
        let payload = self.bridge.execute(&args).await?;
        let result: EventsReadResult = from_payload(payload)?;
        Ok(result.calendars)
    }
}
