//! Handlers for reminder list operations.

use crate::automation::emblem::{format_list_display, get_list_emblems};
use crate::repository::ReminderRepository;
use crate::repository::records::ReminderList;
use crate::tools::response::{ToolResponse, handle_async_operation};
use crate::tools::schemas;

use super::shared::{
    DeleteStyle, format_delete_message, format_list_markdown, format_success_message,
};

/// Handle a lists `read` action.
///
/// Display emblems are resolved through the AppleScript side channel in one
/// batch; a failed lookup simply renders the list without an emblem.
pub async fn handle_read_reminder_lists(repository: &ReminderRepository) -> ToolResponse {
    handle_async_operation(
        async {
            let lists = repository.find_all_lists().await?;
            let titles: Vec<String> = lists.iter().map(|l| l.title.clone()).collect();
            let emblems = get_list_emblems(&titles).await;

            let format_item = |list: &ReminderList| {
                let emblem = emblems.get(&list.title).and_then(|e| e.as_deref());
                vec![format!(
                    "- {} (ID: {})",
                    format_list_display(&list.title, emblem, None),
                    list.id
                )]
            };
            Ok(format_list_markdown(
                "Reminder Lists",
                &lists,
                format_item,
                "No reminder lists found.",
            ))
        },
        "read reminder lists",
    )
    .await
}

/// Handle a lists `create` action.
pub async fn handle_create_reminder_list(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let parsed = schemas::validate_create_list(args)?;
            let list = repository
                .create_reminder_list(
                    &parsed.name,
                    parsed.color.as_deref(),
                    parsed.emblem.as_deref(),
                )
                .await?;
            Ok(format_success_message("created", "list", &list.title, &list.id))
        },
        "create reminder list",
    )
    .await
}

/// Handle a lists `update` action.
pub async fn handle_update_reminder_list(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let parsed = schemas::validate_update_list(args)?;
            let list = repository
                .update_reminder_list(
                    &parsed.name,
                    parsed.new_name.as_deref(),
                    parsed.color.as_deref(),
                    parsed.emblem.as_deref(),
                )
                .await?;
            Ok(format_success_message("updated", "list", &list.title, &list.id))
        },
        "update reminder list",
    )
    .await
}

/// Handle a lists `delete` action.
pub async fn handle_delete_reminder_list(
    repository: &ReminderRepository,
    args: &serde_json::Value,
) -> ToolResponse {
    handle_async_operation(
        async {
            let name = schemas::validate_delete_list(args)?;
            repository.delete_reminder_list(&name).await?;
            Ok(format_delete_message(
                "list",
                &name,
                DeleteStyle {
                    use_quotes: true,
                    use_id_prefix: false,
                    use_period: true,
                },
            ))
        },
        "delete reminder list",
    )
    .await
}
