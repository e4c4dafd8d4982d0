//! Repository for reminder tasks and reminder lists.

use std::sync::Arc;

use crate::automation::emblem::set_list_emblem;
use crate::error::{BridgeError, Result};
use crate::helper::executor::HelperBridge;

use super::args::ArgumentVector;
use super::records::{Reminder, ReminderList, ReminderReadResult, from_payload};
use super::requests::{CreateReminderData, ReminderFilter, UpdateReminderData};

/// Repository mapping reminder requests onto helper invocations.
pub struct ReminderRepository {
    bridge: Arc<dyn HelperBridge>,
}

impl ReminderRepository {
    /// Create a repository over the given bridge.
    pub fn new(bridge: Arc<dyn HelperBridge>) -> Self {
        Self { bridge }
    }

    // ── Reminder tasks ────────────────────────────────────────────────────

    /// Create a reminder and return the stored record.
    pub async fn create_reminder(&self, data: &CreateReminderData) -> Result<Reminder> {
        let args = ArgumentVector::for_action("create")
            .flag("--title", &data.title)
            .opt("--list", data.list.as_deref())
            .opt("--notes", data.notes.as_deref())
            .opt("--url", data.url.as_deref())
            .opt("--due-date", data.due_date.as_deref())
            .opt_num("--priority", data.priority)
            .opt_bool("--flagged", data.is_flagged)
            .opt_recurrence(data.recurrence.as_ref())?
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        from_payload(payload)
    }

    /// Update a reminder and return the stored record.
    pub async fn update_reminder(&self, data: &UpdateReminderData) -> Result<Reminder> {
        let args = ArgumentVector::for_action("update")
            .flag("--id", &data.id)
            .opt("--new-title", data.new_title.as_deref())
            .opt("--list", data.list.as_deref())
            .opt("--notes", data.notes.as_deref())
            .opt("--url", data.url.as_deref())
            .opt_bool("--completed", data.is_completed)
            .opt("--due-date", data.due_date.as_deref())
            .opt_num("--priority", data.priority)
            .opt_bool("--flagged", data.is_flagged)
            .opt_recurrence(data.recurrence.as_ref())?
            .switch("--clear-recurrence", data.clear_recurrence)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        from_payload(payload)
    }

    /// Delete a reminder by identifier.
    pub async fn delete_reminder(&self, id: &str) -> Result<()> {
        let args = ArgumentVector::for_action("delete")
            .flag("--id", id)
            .into_vec();
        self.bridge.execute(&args).await?;
        Ok(())
    }

    /// Find a single reminder by identifier.
    ///
    /// Identifier lookup reuses the read action with `--id`; the helper
    /// returns the matching reminders, of which the first is taken.
    pub async fn find_reminder_by_id(&self, id: &str) -> Result<Reminder> {
        let args = ArgumentVector::for_action("read")
            .flag("--id", id)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        let result: ReminderReadResult = from_payload(payload)?;
        result
            .reminders
            .into_iter()
            .next()
            .ok_or_else(|| BridgeError::CliUser(format!("Reminder with ID {id} not found")))
    }

    /// Find reminders matching the filter.
    pub async fn find_reminders(&self, filter: &ReminderFilter) -> Result<Vec<Reminder>> {
        let args = ArgumentVector::for_action("read")
            .opt("--filter-list", filter.list.as_deref())
            .switch("--show-completed", filter.show_completed)
            .opt("--search", filter.search.as_deref())
            .opt("--due-within", filter.due_within.as_deref())
            .opt_num("--filter-priority", filter.priority)
            .opt_bool("--filter-flagged", filter.flagged)
            .opt_bool("--filter-recurring", filter.recurring)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        let result: ReminderReadResult = from_payload(payload)?;
        Ok(result.reminders)
    }

    // ── Reminder lists ────────────────────────────────────────────────────

    /// All reminder lists.
    pub async fn find_all_lists(&self) -> Result<Vec<ReminderList>> {
        let args = ArgumentVector::for_action("read-lists").into_vec();
        let payload = self.bridge.execute(&args).await?;
        let result: ReminderReadResult = from_payload(payload)?;
        Ok(result.lists)
    }

    /// Create a reminder list.
    ///
    /// The emblem is not part of the helper's contract; when requested it is
    /// applied through the AppleScript side channel after the list exists.
    pub async fn create_reminder_list(
        &self,
        name: &str,
        color: Option<&str>,
        emblem: Option<&str>,
    ) -> Result<ReminderList> {
        let args = ArgumentVector::for_action("create-list")
            .flag("--name", name)
            .opt("--color", color)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        let list: ReminderList = from_payload(payload)?;

        if let Some(emblem) = emblem {
            set_list_emblem(&list.title, emblem).await?;
        }
        Ok(list)
    }

    /// Rename or restyle a reminder list.
    pub async fn update_reminder_list(
        &self,
        name: &str,
        new_name: Option<&str>,
        color: Option<&str>,
        emblem: Option<&str>,
    ) -> Result<ReminderList> {
        let args = ArgumentVector::for_action("update-list")
            .flag("--name", name)
            .opt("--new-name", new_name)
            .opt("--color", color)
            .into_vec();
        let payload = self.bridge.execute(&args).await?;
        let list: ReminderList = from_payload(payload)?;

        if let Some(emblem) = emblem {
            set_list_emblem(&list.title, emblem).await?;
        }
        Ok(list)
    }

    /// Delete a reminder list by name.
    pub async fn delete_reminder_list(&self, name: &str) -> Result<()> {
        let args = ArgumentVector::for_action("delete-list")
            .flag("--name", name)
            .into_vec();
        self.bridge.execute(&args).await?;
        Ok(())
    }
}
