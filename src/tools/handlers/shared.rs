//! Formatting helpers shared across handlers.

/// Success message for a create/update operation.
pub fn format_success_message(verb: &str, entity: &str, title: &str, id: &str) -> String {
    format!("Successfully {verb} {entity}: {title} (ID: {id})")
}

/// Rendering options for delete confirmations.
///
/// Reminder deletes reference the opaque identifier (`with ID xyz`); list
/// deletes reference the human-chosen name in quotes.
#[derive(Debug, Clone, Copy)]
pub struct DeleteStyle {
    /// Quote the reference value.
    pub use_quotes: bool,
    /// Prefix the reference with `with ID`.
    pub use_id_prefix: bool,
    /// End the message with a period.
    pub use_period: bool,
}

/// Delete confirmation message.
pub fn format_delete_message(entity: &str, reference: &str, style: DeleteStyle) -> String {
    let reference = if style.use_quotes {
        format!("\"{reference}\"")
    } else {
        reference.to_owned()
    };
    let connector = if style.use_id_prefix { "with ID " } else { "" };
    let period = if style.use_period { "." } else { "" };
    format!("Successfully deleted {entity} {connector}{reference}{period}")
}

/// Render a heading plus formatted items, or the empty-state message.
pub fn format_list_markdown<T>(
    heading: &str,
    items: &[T],
    format_item: impl Fn(&T) -> Vec<String>,
    empty_message: &str,
) -> String {
    if items.is_empty() {
        return empty_message.to_owned();
    }

    let mut lines = vec![format!("### {heading}"), String::new()];
    for item in items {
        lines.extend(format_item(item));
    }
    lines.join("\n")
}

/// Indent continuation lines of multi-line notes so they nest under their
/// markdown bullet.
pub fn format_multiline_notes(notes: &str) -> String {
    notes.replace('\n', "\n    ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_shape() {
        assert_eq!(
            format_success_message("created", "reminder", "Buy milk", "rem-001"),
            "Successfully created reminder: Buy milk (ID: rem-001)"
        );
    }

    #[test]
    fn delete_message_reminder_style() {
        let msg = format_delete_message(
            "reminder",
            "rem-001",
            DeleteStyle {
                use_quotes: false,
                use_id_prefix: true,
                use_period: false,
            },
        );
        assert_eq!(msg, "Successfully deleted reminder with ID rem-001");
    }

    #[test]
    fn delete_message_list_style() {
        let msg = format_delete_message(
            "list",
            "Groceries",
            DeleteStyle {
                use_quotes: true,
                use_id_prefix: false,
                use_period: true,
            },
        );
        assert_eq!(msg, "Successfully deleted list \"Groceries\".");
    }

    #[test]
    fn list_markdown_empty_state() {
        let rendered = format_list_markdown("Reminders", &[] as &[u8], |_| vec![], "Nothing.");
        assert_eq!(rendered, "Nothing.");
    }

    #[test]
    fn list_markdown_heading_and_items() {
        let items = vec!["a", "b"];
        let rendered = format_list_markdown(
            "Reminders",
            &items,
            |item| vec![format!("- {item}")],
            "Nothing.",
        );
        assert_eq!(rendered, "### Reminders\n\n- a\n- b");
    }

    #[test]
    fn multiline_notes_indented() {
        assert_eq!(format_multiline_notes("one\ntwo"), "one\n    two");
    }
}
