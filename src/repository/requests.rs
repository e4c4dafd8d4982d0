//! Typed request data for repository operations.
//!
//! These are built by the tool handlers from already-validated arguments.
//! Absent optional fields are omitted from the argument vector entirely,
//! never passed as empty strings.

use super::records::RecurrenceRule;

/// Data for creating a reminder.
#[derive(Debug, Clone, Default)]
pub struct CreateReminderData {
    /// Reminder title.
    pub title: String,
    /// Target list title (helper default list when absent).
    pub list: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Attached URL.
    pub url: Option<String>,
    /// ISO-8601 due date.
    pub due_date: Option<String>,
    /// Priority 0-9.
    pub priority: Option<u8>,
    /// Whether to flag the reminder.
    pub is_flagged: Option<bool>,
    /// Recurrence rule.
    pub recurrence: Option<RecurrenceRule>,
}

/// Data for updating a reminder. Only present fields are changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateReminderData {
    /// Identifier of the reminder to update.
    pub id: String,
    /// New title.
    pub new_title: Option<String>,
    /// Move to this list.
    pub list: Option<String>,
    /// Replace notes.
    pub notes: Option<String>,
    /// Replace URL.
    pub url: Option<String>,
    /// Complete or reopen.
    pub is_completed: Option<bool>,
    /// Replace due date.
    pub due_date: Option<String>,
    /// Replace priority.
    pub priority: Option<u8>,
    /// Flag or unflag.
    pub is_flagged: Option<bool>,
    /// Replace the recurrence rule.
    pub recurrence: Option<RecurrenceRule>,
    /// Remove any recurrence rule.
    pub clear_recurrence: bool,
}

/// Filters for a reminders read.
#[derive(Debug, Clone, Default)]
pub struct ReminderFilter {
    /// Only reminders from this list.
    pub list: Option<String>,
    /// Include completed reminders.
    pub show_completed: bool,
    /// Substring search across title and notes.
    pub search: Option<String>,
    /// Only reminders due within this window (e.g. `"today"`, `"this-week"`).
    pub due_within: Option<String>,
    /// Only reminders at this priority.
    pub priority: Option<u8>,
    /// Only flagged (or unflagged) reminders.
    pub flagged: Option<bool>,
    /// Only recurring (or non-recurring) reminders.
    pub recurring: Option<bool>,
}

/// Data for creating a calendar event.
#[derive(Debug, Clone, Default)]
pub struct CreateEventData {
    /// Event title.
    pub title: String,
    /// ISO-8601 start date/time.
    pub start_date: String,
    /// ISO-8601 end date/time.
    pub end_date: String,
    /// Target calendar title (helper default calendar when absent).
    pub calendar: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Event location.
    pub location: Option<String>,
    /// Attached URL.
    pub url: Option<String>,
    /// Whether the event spans whole days.
    pub is_all_day: Option<bool>,
}

/// Data for updating a calendar event. Only present fields are changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventData {
    /// Identifier of the event to update.
    pub id: String,
    /// New title.
    pub title: Option<String>,
    /// Replace start date/time.
    pub start_date: Option<String>,
    /// Replace end date/time.
    pub end_date: Option<String>,
    /// Move to this calendar.
    pub calendar: Option<String>,
    /// Replace notes.
    pub notes: Option<String>,
    /// Replace location.
    pub location: Option<String>,
    /// Replace URL.
    pub url: Option<String>,
    /// Change all-day status.
    pub is_all_day: Option<bool>,
}

/// Filters for an events read.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Only events from this calendar.
    pub calendar: Option<String>,
    /// ISO-8601 window start.
    pub start_date: Option<String>,
    /// ISO-8601 window end.
    pub end_date: Option<String>,
    /// Substring search across title, notes, and location.
    pub search: Option<String>,
}
