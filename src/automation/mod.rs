//! AppleScript automation boundary.
//!
//! Two operations bypass the helper binary and drive the Reminders and
//! Calendar apps directly with `osascript` one-liners:
//!
//! - [`prompt`] — provoking the macOS permission dialog for a capability
//!   domain, with session-scoped deduplication
//! - [`emblem`] — reading and writing reminder-list emblems, which EventKit
//!   does not expose
//!
//! All script text is produced by the typed builders in [`script`], which
//! centralize the AppleScript string-escaping rule.

pub mod emblem;
pub mod prompt;
pub mod script;

pub use emblem::{format_list_display, get_list_emblem, get_list_emblems, set_list_emblem};
pub use prompt::{
    CapabilityDomain, has_been_prompted, reset_prompted_domains, trigger_permission_prompt,
};
pub use script::escape_applescript_string;
