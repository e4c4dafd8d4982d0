//! Domain records reconstructed from helper JSON payloads.
//!
//! Field names mirror the helper's camelCase wire format. All records are
//! plain immutable snapshots; a `null` and an absent field are equivalent
//! (both deserialize to `None`).

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Recurrence frequency, as enumerated by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A recurrence rule attached to a reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    /// How often the reminder repeats.
    pub frequency: Frequency,
    /// Repeat every `interval` units of `frequency` (1 = every unit).
    pub interval: u32,
    /// ISO-8601 end date, if the rule is bounded by date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Total occurrences, if the rule is bounded by count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrence_count: Option<u32>,
    /// Constrained weekdays, 1 = Sunday through 7 = Saturday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    /// Constrained days of month, 1-31.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_month: Option<Vec<u8>>,
    /// Constrained months, 1-12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_of_year: Option<Vec<u8>>,
}

/// A single reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Helper-assigned identifier.
    pub id: String,
    /// Reminder title.
    pub title: String,
    /// Whether the reminder is marked complete.
    pub is_completed: bool,
    /// Title of the list the reminder belongs to.
    pub list: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Attached URL.
    #[serde(default)]
    pub url: Option<String>,
    /// ISO-8601 due date.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Priority 0 (none) through 9.
    #[serde(default)]
    pub priority: u8,
    /// Whether the reminder is flagged.
    #[serde(default)]
    pub is_flagged: bool,
    /// Recurrence rule, if the reminder repeats.
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
}

/// A reminder list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderList {
    /// Helper-assigned identifier.
    pub id: String,
    /// Display title of the list.
    pub title: String,
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Helper-assigned identifier.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Title of the calendar the event belongs to.
    pub calendar: String,
    /// ISO-8601 start date/time.
    pub start_date: String,
    /// ISO-8601 end date/time.
    pub end_date: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Event location.
    #[serde(default)]
    pub location: Option<String>,
    /// Attached URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the event spans whole days.
    #[serde(default)]
    pub is_all_day: bool,
}

/// A calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Helper-assigned identifier.
    pub id: String,
    /// Display title of the calendar.
    pub title: String,
}

/// Payload of a reminders `read` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderReadResult {
    /// All reminder lists visible to the helper.
    #[serde(default)]
    pub lists: Vec<ReminderList>,
    /// Reminders matching the request's filters.
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// Payload of an events `read-events` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsReadResult {
    /// All calendars visible to the helper.
    #[serde(default)]
    pub calendars: Vec<Calendar>,
    /// Events matching the request's filters.
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

/// Shape an untyped helper payload into a typed record.
///
/// A payload that does not match the expected shape is a transport-class
/// failure: the helper broke its contract, the user did nothing wrong.
pub(crate) fn from_payload<T: serde::de::DeserializeOwned>(
    payload: serde_json::Value,
) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| BridgeError::Transport(format!("unexpected helper payload shape: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn reminder_deserializes_from_camel_case() {
        let reminder: Reminder = serde_json::from_value(serde_json::json!({
            "id": "rem-001",
            "title": "Buy groceries",
            "isCompleted": false,
            "list": "Personal",
            "notes": "Milk, eggs",
            "url": null,
            "dueDate": "2026-03-01T09:00:00",
            "priority": 3,
            "isFlagged": true,
            "recurrence": null
        }))
        .unwrap();
        assert_eq!(reminder.id, "rem-001");
        assert!(!reminder.is_completed);
        assert!(reminder.is_flagged);
        assert_eq!(reminder.due_date.as_deref(), Some("2026-03-01T09:00:00"));
        assert!(reminder.url.is_none());
    }

    #[test]
    fn absent_optionals_equal_null_optionals() {
        let sparse: Reminder = serde_json::from_value(serde_json::json!({
            "id": "rem-002",
            "title": "Call dentist",
            "isCompleted": true,
            "list": "Personal"
        }))
        .unwrap();
        assert!(sparse.notes.is_none());
        assert!(sparse.recurrence.is_none());
        assert_eq!(sparse.priority, 0);
        assert!(!sparse.is_flagged);
    }

    #[test]
    fn recurrence_rule_roundtrips() {
        let rule = RecurrenceRule {
            frequency: Frequency::Weekly,
            interval: 2,
            end_date: None,
            occurrence_count: Some(10),
            days_of_week: Some(vec![2, 4]),
            days_of_month: None,
            months_of_year: None,
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["frequency"], "weekly");
        assert_eq!(json["daysOfWeek"], serde_json::json!([2, 4]));
        assert!(json.get("endDate").is_none());

        let back: RecurrenceRule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn frequency_rejects_unknown_values() {
        assert!(serde_json::from_value::<Frequency>(serde_json::json!("hourly")).is_err());
    }

    #[test]
    fn read_result_defaults_to_empty_collections() {
        let result: ReminderReadResult = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(result.lists.is_empty());
        assert!(result.reminders.is_empty());
    }

    #[test]
    fn event_deserializes() {
        let event: CalendarEvent = serde_json::from_value(serde_json::json!({
            "id": "evt-001",
            "title": "Standup",
            "calendar": "Work",
            "startDate": "2026-03-02T09:30:00",
            "endDate": "2026-03-02T09:45:00",
            "isAllDay": false
        }))
        .unwrap();
        assert_eq!(event.calendar, "Work");
        assert!(!event.is_all_day);
        assert!(event.location.is_none());
    }

    #[test]
    fn malformed_payload_is_a_transport_error() {
        let err = from_payload::<Reminder>(serde_json::json!({"id": 42})).unwrap_err();
        assert_eq!(err.code(), crate::error::error_codes::TRANSPORT_FAILED);
        assert!(err.message().contains("unexpected helper payload shape"));
    }
}
