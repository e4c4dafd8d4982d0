//! Tool-call dispatch.
//!
//! The dispatch layer receives a tool name and raw JSON arguments, routes to
//! the matching handler by tool and `action`, and returns the
//! [`ToolResponse`] envelope. Dotted tool names are aliases for the
//! underscore forms (`reminders.tasks` → `reminders_tasks`).

pub mod handlers;
pub mod response;
pub mod schemas;

use std::sync::Arc;

use crate::helper::executor::{HelperBridge, HelperExecutor};
use crate::repository::{EventRepository, ReminderRepository};

pub use response::{ContentBlock, ToolResponse};

/// The four managed tool names.
pub const TOOL_NAMES: [&str; 4] = [
    "reminders_tasks",
    "reminders_lists",
    "calendar_events",
    "calendar_calendars",
];

/// Normalize dotted alias names to their underscore forms.
fn normalize_tool_name(name: &str) -> &str {
    match name {
        "reminders.tasks" => "reminders_tasks",
        "reminders.lists" => "reminders_lists",
        "calendar.events" => "calendar_events",
        "calendar.calendars" => "calendar_calendars",
        other => other,
    }
}

/// Repositories plus routing for the four tools.
pub struct ToolRegistry {
    reminders: ReminderRepository,
    events: EventRepository,
}

impl ToolRegistry {
    /// Registry over the production helper executor.
    pub fn new() -> Self {
        Self::with_bridge(Arc::new(HelperExecutor::new()))
    }

    /// Registry over an explicit bridge (tests use in-process doubles).
    pub fn with_bridge(bridge: Arc<dyn HelperBridge>) -> Self {
        Self {
            reminders: ReminderRepository::new(Arc::clone(&bridge)),
            events: EventRepository::new(bridge),
        }
    }

    /// Route one tool call to its handler.
    ///
    /// Unknown tools and unknown actions produce error responses rather than
    /// panics or silent no-ops.
    pub async fn handle_tool_call(
        &self,
        name: &str,
        args: Option<&serde_json::Value>,
    ) -> ToolResponse {
        let normalized = normalize_tool_name(name);
        tracing::debug!(tool = normalized, "dispatching tool call");

        // calendar_calendars takes no action and no arguments.
        if normalized == "calendar_calendars" {
            return handlers::events::handle_read_calendars(&self.events).await;
        }

        if !TOOL_NAMES.contains(&normalized) {
            return ToolResponse::error(format!("Unknown tool: {name}"));
        }

        let Some(args) = args else {
            return ToolResponse::error("No arguments provided");
        };
        let Some(action) = args.get("action").and_then(|v| v.as_str()) else {
            return ToolResponse::error("No arguments provided");
        };

        match (normalized, action) {
            ("reminders_tasks", "read") => {
                handlers::reminders::handle_read_reminders(&self.reminders, args).await
            }
            ("reminders_tasks", "create") => {
                handlers::reminders::handle_create_reminder(&self.reminders, args).await
            }
            ("reminders_tasks", "update") => {
                handlers::reminders::handle_update_reminder(&self.reminders, args).await
            }
            ("reminders_tasks", "delete") => {
                handlers::reminders::handle_delete_reminder(&self.reminders, args).await
            }
            ("reminders_lists", "read") => {
                handlers::lists::handle_read_reminder_lists(&self.reminders).await
            }
            ("reminders_lists", "create") => {
                handlers::lists::handle_create_reminder_list(&self.reminders, args).await
            }
            ("reminders_lists", "update") => {
                handlers::lists::handle_update_reminder_list(&self.reminders, args).await
            }
            ("reminders_lists", "delete") => {
                handlers::lists::handle_delete_reminder_list(&self.reminders, args).await
            }
            ("calendar_events", "read") => {
                handlers::events::handle_read_calendar_events(&self.events, args).await
            }
            ("calendar_events", "create") => {
                handlers::events::handle_create_calendar_event(&self.events, args).await
            }
            ("calendar_events", "update") => {
                handlers::events::handle_update_calendar_event(&self.events, args).await
            }
            ("calendar_events", "delete") => {
                handlers::events::handle_delete_calendar_event(&self.events, args).await
            }
            (tool, action) => {
                ToolResponse::error(format!("Unknown action {action} for tool {tool}"))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
