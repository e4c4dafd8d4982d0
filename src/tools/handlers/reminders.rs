//! Handlers for reminder task operations.

use crate::repository::ReminderRepository;
use crate::repository::records::{Frequency, RecurrenceRule, Reminder};
use crate::tools::response::{ToolResponse, handle_async_operation};
use crate::tools::schemas;

use super::shared::{
    DeleteStyle, format_delete_message, format_list_markdown, format_multiline_notes,
    format_success_message,
};

/// Priority label for display, following EventKit's 1-highest convention.
fn priority_label(priority: u8) -> &'static str {
    match priority {
        1..=3 => "high",
        4..=6 => "medium",
        7..=9 => "low",
        _ => "none",
    }
}

/// Render a recurrence rule as human-readable text.
///
/// Examples: `day`, `every 2 weeks on Mon, Wed`, `month on days 1, 15`,
/// `year in Jan, Jul until 2027-01-01`, `week (10 times)`.
pub(crate) fn format_recurrence(recurrence: &RecurrenceRule) -> String {
    const DAY_NAMES: [&str; 8] = ["", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    const MONTH_NAMES: [&str; 13] = [
        "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let mut parts: Vec<String> = Vec::new();
    let interval = recurrence.interval;
    let prefix = if interval > 1 {
        format!("every {interval} ")
    } else {
        String::new()
    };
    let plural = if interval > 1 { "s" } else { "" };

    match recurrence.frequency {
        Frequency::Daily => parts.push(format!("{prefix}day{plural}")),
        Frequency::Weekly => {
            parts.push(format!("{prefix}week{plural}"));
            if let Some(ref days) = recurrence.days_of_week {
                if !days.is_empty() {
                    let names: Vec<&str> = days
                        .iter()
                        .filter_map(|d| DAY_NAMES.get(*d as usize).copied())
                        .collect();
                    parts.push(format!("on {}", names.join(", ")));
                }
            }
        }
        Frequency::Monthly => {
            parts.push(format!("{prefix}month{plural}"));
            if let Some(ref days) = recurrence.days_of_month {
                if !days.is_empty() {
                    let day_plural = if days.len() > 1 { "s" } else { "" };
                    let rendered: Vec<String> = days.iter().map(u8::to_string).collect();
                    parts.push(format!("on day{day_plural} {}", rendered.join(", ")));
                }
            }
        }
        Frequency::Yearly => {
            parts.push(format!("{prefix}year{plural}"));
            if let Some(ref months) = recurrence.months_of_year {
                if !months.is_empty() {
                    let names: Vec<&str> = months
                        .iter()
                        .filter_map(|m| MONTH_NAMES.get(*m as usize).copied())
                        .collect();
                    parts.push(format!("in {}", names.join(", ")));
                }
            }
        }
    }

    if let Some(ref end_date) = recurrence.end_date {
        parts.push(format!("until {end_date}"));
    } else if let Some(count) = recurrence.occurrence_count {
        parts.push(format!("({count} times)"));
    }

    parts.join(" ")
}

/// Render one reminder as markdown bullet lines.
pub(crate) fn format_reminder_markdown(reminder: &Reminder) -> Vec<String> {
    let checkbox = if reminder.is_completed { "[x]" } else { "[ ]" };
    let flag_icon = if reminder.is_flagged { " 🚩" } else { "" };
    let repeat_icon = if reminder.recurrence.is_some() { " 🔄" } else { "" };

    let mut lines = vec![format!(
        "- {checkbox} {}{flag_icon}{repeat_icon}",
        reminder.title
    )];
    lines.push(format!("  - List: {}", reminder.list));
    lines.push(format!("  - ID: {}", reminder.id));
    if reminder.priority > 0 {
        lines.push(format!("  - Priority: {}", priority_label(reminder.priority)));
    }
    if let Some(ref recurrence) = reminder.recurrence {
        lines.push(format!("  - Repeats: {}", format_recurrence(recurrence)));
    }
    if let Some(ref notes) = reminder.notes {
        lines.push(format!("  - Notes: {}", format_multiline_notes(notes)));
    }
    if let Some(ref due_date) = reminder.due_date {
        lines.push(format!("  - Due: {due_date}"));
    }
    if let Some(ref url) = reminder.url {
        lines.push(format!("  - URL: {url}"));
    }
    lines
}

/// Handle a reminders `create` action.
pub async fn handle_create_reminder(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let data = schemas::validate_create_reminder(args)?;
            let reminder = repository.create_reminder(&data).await?;
            Ok(format_success_message(
                "created",
                "reminder",
                &reminder.title,
                &reminder.id,
            ))
        },
        "create reminder",
    )
    .await
}

/// Handle a reminders `update` action.
pub async fn handle_update_reminder(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let data = schemas::validate_update_reminder(args)?;
            let reminder = repository.update_reminder(&data).await?;
            Ok(format_success_message(
                "updated",
                "reminder",
                &reminder.title,
                &reminder.id,
            ))
        },
        "update reminder",
    )
    .await
}

/// Handle a reminders `delete` action.
pub async fn handle_delete_reminder(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let id = schemas::validate_delete_reminder(args)?;
            repository.delete_reminder(&id).await?;
            Ok(format_delete_message(
                "reminder",
                &id,
                DeleteStyle {
                    use_quotes: false,
                    use_id_prefix: true,
                    use_period: false,
                },
            ))
        },
        "delete reminder",
    )
    .await
}

/// Handle a reminders `read` action.
///
/// The identifier is read from the *raw* input before validation: the
/// filter schema treats `id` as out of scope and would strip it, and
/// identifier-based lookup always wins over filter-based listing.
pub async fn handle_read_reminders(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            if let Some(id) = args.get("id").and_then(|v| v.as_str()).filter(|s| !s.is_empty()) {
                let reminder = repository.find_reminder_by_id(id).await?;
                let mut lines = vec!["### Reminder".to_owned(), String::new()];
                lines.extend(format_reminder_markdown(&reminder));
                return Ok(lines.join("\n"));
            }

            let filter = schemas::validate_read_reminders(args)?;
            let reminders = repository.find_reminders(&filter).await?;
            Ok(format_list_markdown(
                "Reminders",
                &reminders,
                format_reminder_markdown,
                "No reminders found matching the criteria.",
            ))
        },
        "read reminders",
    )
    .await
}
