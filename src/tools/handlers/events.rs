//! Handlers for calendar event and calendar operations.

use crate::repository::EventRepository;
use crate::repository::records::{Calendar, CalendarEvent};
use crate::tools::response::{ToolResponse, handle_async_operation};
use crate::tools::schemas;

use super::shared::{
    DeleteStyle, format_delete_message, format_list_markdown, format_multiline_notes,
    format_success_message,
};

/// Render one event as markdown bullet lines.
pub(crate) fn format_event_markdown(event: &CalendarEvent) -> Vec<String> {
    let all_day_icon = if event.is_all_day { " 📅" } else { "" };
    let mut lines = vec![format!("- {}{all_day_icon}", event.title)];
    lines.push(format!("  - Calendar: {}", event.calendar));
    lines.push(format!("  - ID: {}", event.id));
    lines.push(format!("  - Start: {}", event.start_date));
    lines.push(format!("  - End: {}", event.end_date));
    if let Some(ref location) = event.location {
        lines.push(format!("  - Location: {location}"));
    }
    if let Some(ref notes) = event.notes {
        lines.push(format!("  - Notes: {}", format_multiline_notes(notes)));
    }
    if let Some(ref url) = event.url {
        lines.push(format!("  - URL: {url}"));
    }
    lines
}

fn format_calendar_markdown(calendar: &Calendar) -> Vec<String> {
    vec![format!("- {} (ID: {})", calendar.title, calendar.id)]
}

/// Handle an events `read` action.
///
/// Like reminders, a raw-input `id` takes the by-identifier path
/// exclusively; filters are ignored.
pub async fn handle_read_calendar_events(
    repository: &EventRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            if let Some(id) = args.get("id").and_then(|v| v.as_str()).filter(|s| !s.is_empty()) {
                let event = repository.find_event_by_id(id).await?;
                let mut lines = vec!["### Event".to_owned(), String::new()];
                lines.extend(format_event_markdown(&event));
                return Ok(lines.join("\n"));
            }

            let filter = schemas::validate_read_events(args)?;
            let events = repository.find_events(&filter).await?;
            Ok(format_list_markdown(
                "Events",
                &events,
                format_event_markdown,
                "No events found matching the criteria.",
            ))
        },
        "read calendar events",
    )
    .await
}

/// Handle an events `create` action.
pub async fn handle_create_calendar_event(
    repository: &EventRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let data = schemas::validate_create_event(args)?;
            let event = repository.create_event(&data).await?;
            Ok(format_success_message("created", "event", &event.title, &event.id))
        },
        "create calendar event",
    )
    .await
}

/// Handle an events `update` action.
pub async fn handle_update_calendar_event(
    repository: &EventRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let data = schemas::validate_update_event(args)?;
            let event = repository.update_event(&data).await?;
            Ok(format_success_message("updated", "event", &event.title, &event.id))
        },
        "update calendar event",
    )
    .await
}

/// Handle an events `delete` action.
pub async fn handle_delete_calendar_event(
    repository: &EventRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let id = schemas::validate_delete_event(args)?;
            repository.delete_event(&id).await?;
            Ok(format_delete_message(
                "event",
                &id,
                DeleteStyle {
                    use_quotes: false,
                    use_id_prefix: true,
                    use_period: false,
                },
            ))
        },
        "delete calendar event",
    )
    .await
}

/// Handle a calendars read (the `calendar_calendars` tool has no actions).
pub async fn handle_read_calendars(repository: &EventRepository) -> ToolResponse {
    handle_async_operation(
        async {
            let calendars = repository.find_all_calendars().await?;
            Ok(format_list_markdown(
                "Calendars",
                &calendars,
                format_calendar_markdown,
                "No calendars found.",
            ))
        },
        "read calendars",
    )
    .await
}
