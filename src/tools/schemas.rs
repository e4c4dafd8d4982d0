//! Argument validation for tool calls.
//!
//! Raw tool arguments arrive as untyped JSON. These validators extract and
//! check each field, producing the typed request data the repositories
//! accept or a `Validation`-class error whose message is surfaced verbatim.
//!
//! The reminders read schema deliberately does *not* extract `id`: the
//! by-identifier path reads it from the raw input before validation (see
//! `tools::handlers::reminders`), so the filter schema stays free of it.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{BridgeError, Result};
use crate::repository::records::RecurrenceRule;
use crate::repository::requests::{
    CreateEventData, CreateReminderData, EventFilter, ReminderFilter, UpdateEventData,
    UpdateReminderData,
};

// ─── Field extraction ─────────────────────────────────────────────────────────

fn validation(message: impl Into<String>) -> BridgeError {
    BridgeError::Validation(message.into())
}

/// Optional string field; empty and whitespace-only values count as absent.
fn opt_string(args: &serde_json::Value, field: &str) -> Option<String> {
    args.get(field)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Required non-empty string field.
fn req_string(args: &serde_json::Value, field: &str) -> Result<String> {
    opt_string(args, field).ok_or_else(|| validation(format!("{field} is required")))
}

fn opt_bool(args: &serde_json::Value, field: &str) -> Result<Option<bool>> {
    match args.get(field) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(validation(format!("{field} must be a boolean"))),
    }
}

/// Optional priority, bounded 0-9.
fn opt_priority(args: &serde_json::Value, field: &str) -> Result<Option<u8>> {
    match args.get(field) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => {
            let n = value
                .as_u64()
                .ok_or_else(|| validation(format!("{field} must be an integer")))?;
            if n > 9 {
                return Err(validation(format!("{field} must be between 0 and 9")));
            }
            Ok(Some(n as u8))
        }
    }
}

/// Optional ISO-8601 date or date-time field, validated but kept as text
/// (the helper owns timezone interpretation).
fn opt_date(args: &serde_json::Value, field: &str) -> Result<Option<String>> {
    let Some(raw) = opt_string(args, field) else {
        return Ok(None);
    };
    if !validate_iso_date(&raw) {
        return Err(validation(format!(
            "{field} must be an ISO-8601 date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)"
        )));
    }
    Ok(Some(raw))
}

fn req_date(args: &serde_json::Value, field: &str) -> Result<String> {
    opt_date(args, field)?.ok_or_else(|| validation(format!("{field} is required")))
}

/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS`.
fn validate_iso_date(raw: &str) -> bool {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

/// Optional recurrence rule with bounds checks.
fn opt_recurrence(args: &serde_json::Value, field: &str) -> Result<Option<RecurrenceRule>> {
    let Some(value) = args.get(field) else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }

    let rule: RecurrenceRule = serde_json::from_value(value.clone())
        .map_err(|e| validation(format!("{field} is invalid: {e}")))?;

    if rule.interval < 1 {
        return Err(validation(format!("{field}.interval must be at least 1")));
    }
    if let Some(ref days) = rule.days_of_week {
        if days.iter().any(|d| !(1..=7).contains(d)) {
            return Err(validation(format!(
                "{field}.daysOfWeek values must be between 1 (Sunday) and 7 (Saturday)"
            )));
        }
    }
    if let Some(ref days) = rule.days_of_month {
        if days.iter().any(|d| !(1..=31).contains(d)) {
            return Err(validation(format!(
                "{field}.daysOfMonth values must be between 1 and 31"
            )));
        }
    }
    if let Some(ref months) = rule.months_of_year {
        if months.iter().any(|m| !(1..=12).contains(m)) {
            return Err(validation(format!(
                "{field}.monthsOfYear values must be between 1 and 12"
            )));
        }
    }
    if let Some(ref end_date) = rule.end_date {
        if !validate_iso_date(end_date) {
            return Err(validation(format!("{field}.endDate must be an ISO-8601 date")));
        }
    }
    Ok(Some(rule))
}

// ─── Reminder task schemas ────────────────────────────────────────────────────

/// Validate `create` arguments for a reminder task.
pub fn validate_create_reminder(args: &serde_json::Value) -> Result<CreateReminderData> {
    Ok(CreateReminderData {
        title: req_string(args, "title")?,
        list: opt_string(args, "targetList"),
        notes: opt_string(args, "note"),
        url: opt_string(args, "url"),
        due_date: opt_date(args, "dueDate")?,
        priority: opt_priority(args, "priority")?,
        is_flagged: opt_bool(args, "flagged")?,
        recurrence: opt_recurrence(args, "recurrence")?,
    })
}

/// Validate `update` arguments for a reminder task.
pub fn validate_update_reminder(args: &serde_json::Value) -> Result<UpdateReminderData> {
    Ok(UpdateReminderData {
        id: req_string(args, "id")?,
        new_title: opt_string(args, "title"),
        list: opt_string(args, "targetList"),
        notes: opt_string(args, "note"),
        url: opt_string(args, "url"),
        is_completed: opt_bool(args, "completed")?,
        due_date: opt_date(args, "dueDate")?,
        priority: opt_priority(args, "priority")?,
        is_flagged: opt_bool(args, "flagged")?,
        recurrence: opt_recurrence(args, "recurrence")?,
        clear_recurrence: opt_bool(args, "clearRecurrence")?.unwrap_or(false),
    })
}

/// Validate `delete` arguments for a reminder task; returns the identifier.
pub fn validate_delete_reminder(args: &serde_json::Value) -> Result<String> {
    req_string(args, "id")
}

/// Validate `read` filter arguments for reminder tasks.
///
/// `id` is intentionally absent here; identifier precedence is handled
/// against the raw input by the read handler.
pub fn validate_read_reminders(args: &serde_json::Value) -> Result<ReminderFilter> {
    Ok(ReminderFilter {
        list: opt_string(args, "filterList"),
        show_completed: opt_bool(args, "showCompleted")?.unwrap_or(false),
        search: opt_string(args, "search"),
        due_within: opt_string(args, "dueWithin"),
        priority: opt_priority(args, "filterPriority")?,
        flagged: opt_bool(args, "filterFlagged")?,
        recurring: opt_bool(args, "filterRecurring")?,
    })
}

// ─── Reminder list schemas ────────────────────────────────────────────────────

/// Validated arguments for creating a reminder list.
#[derive(Debug, Clone)]
pub struct CreateListArgs {
    pub name: String,
    pub color: Option<String>,
    pub emblem: Option<String>,
}

/// Validated arguments for updating a reminder list.
#[derive(Debug, Clone)]
pub struct UpdateListArgs {
    pub name: String,
    pub new_name: Option<String>,
    pub color: Option<String>,
    pub emblem: Option<String>,
}

/// Validate `create` arguments for a reminder list.
pub fn validate_create_list(args: &serde_json::Value) -> Result<CreateListArgs> {
    Ok(CreateListArgs {
        name: req_string(args, "name")?,
        color: opt_string(args, "color"),
        emblem: opt_string(args, "emblem"),
    })
}

/// Validate `update` arguments for a reminder list.
pub fn validate_update_list(args: &serde_json::Value) -> Result<UpdateListArgs> {
    let parsed = UpdateListArgs {
        name: req_string(args, "name")?,
        new_name: opt_string(args, "newName"),
        color: opt_string(args, "color"),
        emblem: opt_string(args, "emblem"),
    };
    if parsed.new_name.is_none() && parsed.color.is_none() && parsed.emblem.is_none() {
        return Err(validation(
            "at least one of newName, color, or emblem is required",
        ));
    }
    Ok(parsed)
}

/// Validate `delete` arguments for a reminder list; returns the name.
pub fn validate_delete_list(args: &serde_json::Value) -> Result<String> {
    req_string(args, "name")
}

// ─── Calendar event schemas ───────────────────────────────────────────────────

/// Validate `create` arguments for a calendar event.
pub fn validate_create_event(args: &serde_json::Value) -> Result<CreateEventData> {
    Ok(CreateEventData {
        title: req_string(args, "title")?,
        start_date: req_date(args, "startDate")?,
        end_date: req_date(args, "endDate")?,
        calendar: opt_string(args, "targetCalendar"),
        notes: opt_string(args, "note"),
        location: opt_string(args, "location"),
        url: opt_string(args, "url"),
        is_all_day: opt_bool(args, "isAllDay")?,
    })
}

/// Validate `update` arguments for a calendar event.
pub fn validate_update_event(args: &serde_json::Value) -> Result<UpdateEventData> {
    Ok(UpdateEventData {
        id: req_string(args, "id")?,
        title: opt_string(args, "title"),
        start_date: opt_date(args, "startDate")?,
        end_date: opt_date(args, "endDate")?,
        calendar: opt_string(args, "targetCalendar"),
        notes: opt_string(args, "note"),
        location: opt_string(args, "location"),
        url: opt_string(args, "url"),
        is_all_day: opt_bool(args, "isAllDay")?,
    })
}

/// Validate `delete` arguments for a calendar event; returns the identifier.
pub fn validate_delete_event(args: &serde_json::Value) -> Result<String> {
    req_string(args, "id")
}

/// Validate `read` filter arguments for calendar events.
pub fn validate_read_events(args: &serde_json::Value) -> Result<EventFilter> {
    Ok(EventFilter {
        calendar: opt_string(args, "filterCalendar"),
        start_date: opt_date(args, "startDate")?,
        end_date: opt_date(args, "endDate")?,
        search: opt_string(args, "search"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::error::error_codes;

    #[test]
    fn create_reminder_requires_title() {
        let err = validate_create_reminder(&serde_json::json!({})).unwrap_err();
        assert_eq!(err.code(), error_codes::VALIDATION_FAILED);
        assert_eq!(err.message(), "title is required");
    }

    #[test]
    fn create_reminder_whitespace_title_is_absent() {
        let err = validate_create_reminder(&serde_json::json!({"title": "   "})).unwrap_err();
        assert_eq!(err.message(), "title is required");
    }

    #[test]
    fn create_reminder_minimal_ok() {
        let data = validate_create_reminder(&serde_json::json!({"title": "Buy milk"})).unwrap();
        assert_eq!(data.title, "Buy milk");
        assert!(data.list.is_none());
        assert!(data.recurrence.is_none());
    }

    #[test]
    fn create_reminder_full_ok() {
        let data = validate_create_reminder(&serde_json::json!({
            "title": "Submit report",
            "targetList": "Work",
            "note": "Include Q4 data",
            "url": "https://example.com",
            "dueDate": "2026-03-15T17:00:00",
            "priority": 1,
            "flagged": true,
            "recurrence": {"frequency": "weekly", "interval": 1}
        }))
        .unwrap();
        assert_eq!(data.list.as_deref(), Some("Work"));
        assert_eq!(data.priority, Some(1));
        assert_eq!(data.is_flagged, Some(true));
        assert!(data.recurrence.is_some());
    }

    #[test]
    fn priority_out_of_range_rejected() {
        let err = validate_create_reminder(
            &serde_json::json!({"title": "x", "priority": 10}),
        )
        .unwrap_err();
        assert!(err.message().contains("between 0 and 9"));
    }

    #[test]
    fn date_only_and_datetime_both_accepted() {
        for date in ["2026-03-15", "2026-03-15T17:00:00"] {
            let data =
                validate_create_reminder(&serde_json::json!({"title": "x", "dueDate": date}))
                    .unwrap();
            assert_eq!(data.due_date.as_deref(), Some(date));
        }
    }

    #[test]
    fn malformed_date_rejected() {
        for date in ["tomorrow", "2026-13-01", "2026-03-15T25:00:00"] {
            let err =
                validate_create_reminder(&serde_json::json!({"title": "x", "dueDate": date}))
                    .unwrap_err();
            assert!(err.message().contains("ISO-8601"), "accepted {date}");
        }
    }

    #[test]
    fn recurrence_bounds_checked() {
        let cases = [
            (serde_json::json!({"frequency": "daily", "interval": 0}), "interval"),
            (
                serde_json::json!({"frequency": "weekly", "interval": 1, "daysOfWeek": [0]}),
                "daysOfWeek",
            ),
            (
                serde_json::json!({"frequency": "monthly", "interval": 1, "daysOfMonth": [32]}),
                "daysOfMonth",
            ),
            (
                serde_json::json!({"frequency": "yearly", "interval": 1, "monthsOfYear": [13]}),
                "monthsOfYear",
            ),
        ];
        for (recurrence, field) in cases {
            let err = validate_create_reminder(
                &serde_json::json!({"title": "x", "recurrence": recurrence}),
            )
            .unwrap_err();
            assert!(err.message().contains(field), "missing {field} in error");
        }
    }

    #[test]
    fn recurrence_unknown_frequency_rejected() {
        let err = validate_create_reminder(&serde_json::json!({
            "title": "x",
            "recurrence": {"frequency": "hourly", "interval": 1}
        }))
        .unwrap_err();
        assert!(err.message().contains("recurrence is invalid"));
    }

    #[test]
    fn update_reminder_requires_id() {
        let err = validate_update_reminder(&serde_json::json!({"title": "x"})).unwrap_err();
        assert_eq!(err.message(), "id is required");
    }

    #[test]
    fn update_reminder_clear_recurrence_flag() {
        let data = validate_update_reminder(
            &serde_json::json!({"id": "rem-1", "clearRecurrence": true}),
        )
        .unwrap();
        assert!(data.clear_recurrence);
    }

    #[test]
    fn read_reminders_schema_strips_id() {
        // The filter schema has no id field even when the raw input carries
        // one; the handler reads it from the raw input instead.
        let filter = validate_read_reminders(
            &serde_json::json!({"id": "rem-1", "filterList": "Work"}),
        )
        .unwrap();
        assert_eq!(filter.list.as_deref(), Some("Work"));
    }

    #[test]
    fn read_reminders_defaults() {
        let filter = validate_read_reminders(&serde_json::json!({})).unwrap();
        assert!(!filter.show_completed);
        assert!(filter.list.is_none());
        assert!(filter.flagged.is_none());
    }

    #[test]
    fn bool_field_type_checked() {
        let err = validate_read_reminders(&serde_json::json!({"showCompleted": "yes"}))
            .unwrap_err();
        assert!(err.message().contains("must be a boolean"));
    }

    #[test]
    fn update_list_requires_some_change() {
        let err = validate_update_list(&serde_json::json!({"name": "Groceries"})).unwrap_err();
        assert!(err.message().contains("at least one of"));
    }

    #[test]
    fn create_event_requires_dates() {
        let err = validate_create_event(&serde_json::json!({"title": "Standup"})).unwrap_err();
        assert_eq!(err.message(), "startDate is required");

        let err = validate_create_event(&serde_json::json!({
            "title": "Standup",
            "startDate": "2026-03-02T09:30:00"
        }))
        .unwrap_err();
        assert_eq!(err.message(), "endDate is required");
    }

    #[test]
    fn create_event_full_ok() {
        let data = validate_create_event(&serde_json::json!({
            "title": "Standup",
            "startDate": "2026-03-02T09:30:00",
            "endDate": "2026-03-02T09:45:00",
            "targetCalendar": "Work",
            "isAllDay": false
        }))
        .unwrap();
        assert_eq!(data.calendar.as_deref(), Some("Work"));
        assert_eq!(data.is_all_day, Some(false));
    }

    #[test]
    fn read_events_window_validated() {
        let err =
            validate_read_events(&serde_json::json!({"startDate": "not-a-date"})).unwrap_err();
        assert!(err.message().contains("ISO-8601"));
    }
}
