//! Typed AppleScript builders.
//!
//! Each public function emits a fixed script skeleton for one operation
//! kind. Raw strings are escaped here, at the single point where they are
//! interpolated; call sites never handle quoting.

use super::prompt::CapabilityDomain;

/// Escape a string for interpolation inside a double-quoted AppleScript
/// literal.
///
/// AppleScript's quoting rules only reserve the backslash and the double
/// quote; backslashes are doubled first so escaped quotes survive intact.
pub fn escape_applescript_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Minimal read-only snippet that provokes the permission dialog for a
/// capability domain.
pub(crate) fn permission_probe(domain: CapabilityDomain) -> String {
    match domain {
        CapabilityDomain::Reminders => {
            r#"tell application "Reminders" to get the name of every list"#.to_owned()
        }
        CapabilityDomain::Calendars => {
            r#"tell application "Calendar" to get the name of every calendar"#.to_owned()
        }
    }
}

/// Read one list's emblem, returning `""` when unset or on error.
pub(crate) fn emblem_read(list_title: &str) -> String {
    let escaped = escape_applescript_string(list_title);
    format!(
        r#"
    tell application "Reminders"
      try
        set theList to list "{escaped}"
        if emblem of theList is not missing value then
          return emblem of theList
        else
          return ""
        end if
      on error
        return ""
      end try
    end tell
  "#
    )
}

/// Set one list's emblem; errors propagate to the caller.
pub(crate) fn emblem_write(list_title: &str, emblem: &str) -> String {
    let escaped_title = escape_applescript_string(list_title);
    let escaped_emblem = escape_applescript_string(emblem);
    format!(
        r#"
    tell application "Reminders"
      try
        set theList to list "{escaped_title}"
        set emblem of theList to "{escaped_emblem}"
      on error errorMessage
        error errorMessage
      end try
    end tell
  "#
    )
}

/// Read every list's name and emblem in one aggregate call.
///
/// Output format: one `name<TAB>emblem` pair per line; an unset emblem is
/// the empty string.
pub(crate) fn emblem_batch_read() -> String {
    r#"
    tell application "Reminders"
      set allLists to every list
      set resultText to ""
      set tabChar to (ASCII character 9)
      set newlineChar to (ASCII character 10)
      repeat with i from 1 to count of allLists
        set currentList to item i of allLists
        set listName to name of currentList
        set listEmblem to emblem of currentList
        if listEmblem is missing value then
          set listEmblem to ""
        end if
        if i is 1 then
          set resultText to listName & tabChar & listEmblem
        else
          set resultText to resultText & newlineChar & listName & tabChar & listEmblem
        end if
      end repeat
      return resultText
    end tell
  "#
    .to_owned()
}
