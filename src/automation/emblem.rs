//! Reminder-list emblem utilities.
//!
//! EventKit does not expose list emblems, so these read/write them through
//! the Reminders application directly. Failures reading an emblem degrade to
//! "no emblem"; display metadata is never worth failing an operation for.

use std::collections::HashMap;

use futures_util::future::join_all;

use crate::error::Result;
use crate::helper::invoke::run_osascript;

use super::script;

/// Get the emblem (icon) for a reminder list, or `None` if unset or the
/// lookup failed.
pub async fn get_list_emblem(list_title: &str) -> Option<String> {
    let result = run_osascript(&script::emblem_read(list_title)).await.ok()?;
    let trimmed = result.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Set the emblem (icon) for a reminder list.
///
/// # Errors
///
/// Returns a transport-class error when the script fails (unknown list,
/// automation denied).
pub async fn set_list_emblem(list_title: &str, emblem: &str) -> Result<()> {
    run_osascript(&script::emblem_write(list_title, emblem)).await?;
    Ok(())
}

/// Get emblems for multiple lists.
///
/// Prefers a single aggregate call over one call per list. Titles missing
/// from the aggregate output fall back to per-list lookups; if the aggregate
/// path itself fails, every title falls back, in parallel. Either way the
/// returned map has one entry per requested title.
pub async fn get_list_emblems(list_titles: &[String]) -> HashMap<String, Option<String>> {
    match run_osascript(&script::emblem_batch_read()).await {
        Ok(batch_output) => {
            let mut emblems = parse_batch_output(&batch_output, list_titles);

            // Per-title fallback for anything the batch did not cover.
            for title in list_titles {
                if !emblems.contains_key(title) {
                    let emblem = get_list_emblem(title).await;
                    emblems.insert(title.clone(), emblem);
                }
            }
            emblems
        }
        Err(e) => {
            tracing::debug!(error = %e, "batch emblem lookup failed; falling back per list");
            let lookups = list_titles.iter().map(|title| async move {
                (title.clone(), get_list_emblem(title).await)
            });
            join_all(lookups).await.into_iter().collect()
        }
    }
}

/// Parse the aggregate script's `name<TAB>emblem` lines, keeping only the
/// requested titles.
fn parse_batch_output(output: &str, list_titles: &[String]) -> HashMap<String, Option<String>> {
    let mut emblems = HashMap::new();
    for line in output.trim().split('\n') {
        let mut parts = line.splitn(2, '\t');
        let Some(name) = parts.next() else { continue };
        if !list_titles.iter().any(|t| t == name) {
            continue;
        }
        let emblem = parts
            .next()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_owned);
        emblems.insert(name.to_owned(), emblem);
    }
    emblems
}

/// Format a list display string with emblem and color.
pub fn format_list_display(title: &str, emblem: Option<&str>, color: Option<&str>) -> String {
    let mut display = String::new();
    if let Some(emblem) = emblem {
        display.push_str(emblem);
        display.push(' ');
    }
    display.push_str(title);
    if let Some(color) = color {
        display.push_str(&format!(" [{color}]"));
    }
    display
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn batch_parse_splits_on_tabs() {
        let output = "Groceries\t🛒\nWork\t💼\nPersonal\t";
        let emblems = parse_batch_output(output, &titles(&["Groceries", "Work", "Personal"]));
        assert_eq!(emblems["Groceries"], Some("🛒".to_owned()));
        assert_eq!(emblems["Work"], Some("💼".to_owned()));
        assert_eq!(emblems["Personal"], None);
    }

    #[test]
    fn batch_parse_keeps_only_requested_titles() {
        let output = "Groceries\t🛒\nOther\t📌";
        let emblems = parse_batch_output(output, &titles(&["Groceries"]));
        assert_eq!(emblems.len(), 1);
        assert!(emblems.contains_key("Groceries"));
    }

    #[test]
    fn batch_parse_missing_title_left_absent_for_fallback() {
        let output = "Groceries\t🛒";
        let emblems = parse_batch_output(output, &titles(&["Groceries", "Forgotten"]));
        assert!(!emblems.contains_key("Forgotten"));
    }

    #[test]
    fn batch_parse_tolerates_malformed_lines() {
        let output = "no-tab-here\nWork\t💼";
        let emblems = parse_batch_output(output, &titles(&["Work", "no-tab-here"]));
        assert_eq!(emblems["Work"], Some("💼".to_owned()));
        // A line without a tab still names the list, with no emblem.
        assert_eq!(emblems["no-tab-here"], None);
    }

    #[test]
    fn display_with_emblem_and_color() {
        assert_eq!(
            format_list_display("Groceries", Some("🛒"), Some("#FF0000")),
            "🛒 Groceries [#FF0000]"
        );
    }

    #[test]
    fn display_title_only() {
        assert_eq!(format_list_display("Groceries", None, None), "Groceries");
    }

    #[test]
    fn display_color_only() {
        assert_eq!(
            format_list_display("Work", None, Some("#00FF00")),
            "Work [#00FF00]"
        );
    }

    #[tokio::test]
    async fn batch_failure_falls_back_for_every_title() {
        // osascript is unavailable in the test environment, so the batch
        // path and every per-item fallback fail; the map must still carry
        // one entry per requested title.
        let requested = titles(&["A", "B"]);
        let emblems = get_list_emblems(&requested).await;
        assert_eq!(emblems.len(), 2);
        assert_eq!(emblems["A"], None);
        assert_eq!(emblems["B"], None);
    }
}
