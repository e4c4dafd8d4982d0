//! Reminder link utilities.
//!
//! Reminders can reference each other through a `Related:` section in their
//! notes: a line reading exactly `Related:` followed by a comma-separated
//! line of identifiers. These helpers parse and produce that section; the
//! linked identifiers are helper-assigned and opaque here.

/// Extract linked reminder IDs from a notes body.
pub fn extract_links(notes: Option<&str>) -> Vec<String> {
    let Some(notes) = notes else {
        return Vec::new();
    };

    let mut found_related = false;
    for line in notes.split('\n') {
        let trimmed = line.trim();

        if trimmed == "Related:" {
            found_related = true;
            continue;
        }

        if found_related && !trimmed.is_empty() {
            return trimmed
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .collect();
        }
    }

    Vec::new()
}

/// Format link IDs into a `Related:` section.
pub fn format_links(ids: &[String]) -> String {
    if ids.is_empty() {
        return String::new();
    }
    format!("Related:\n{}", ids.join(", "))
}

/// Whether a reminder ID is linked in a notes body.
pub fn has_link(notes: Option<&str>, id: &str) -> bool {
    extract_links(notes).iter().any(|linked| linked == id)
}
