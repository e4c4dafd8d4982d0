//! Session-scoped permission-prompt side channel.
//!
//! The helper binary cannot reliably surface macOS permission dialogs in
//! non-interactive contexts, so this module provokes them directly: a
//! minimal read-only AppleScript against the corresponding application makes
//! the OS show the dialog if access has not yet been decided.
//!
//! Prompting is bounded to at most once per domain per process lifetime. A
//! denial inside the probe script is swallowed and the domain is still
//! recorded as prompted: the denial itself is a terminal signal, and
//! re-running the trigger within the session will not change it.
//!
//! This operation is explicitly *not* wired into CLI failure handling (see
//! [`crate::helper::executor`]); it is an independently callable operation
//! used from test and manual paths.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use crate::helper::invoke::run_osascript;

use super::script;

/// A named OS permission category gating access to application data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityDomain {
    /// Access to the Reminders application's data.
    Reminders,
    /// Access to the Calendar application's data.
    Calendars,
}

impl CapabilityDomain {
    /// Return all capability domains.
    pub fn all() -> &'static [CapabilityDomain] {
        &[CapabilityDomain::Reminders, CapabilityDomain::Calendars]
    }
}

impl fmt::Display for CapabilityDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CapabilityDomain::Reminders => "reminders",
            CapabilityDomain::Calendars => "calendars",
        };
        f.write_str(s)
    }
}

/// Error returned when parsing an unknown capability domain string.
#[derive(Debug, Clone)]
pub struct DomainParseError(pub String);

impl fmt::Display for DomainParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown capability domain: {:?}", self.0)
    }
}

impl std::error::Error for DomainParseError {}

impl FromStr for CapabilityDomain {
    type Err = DomainParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reminders" => Ok(CapabilityDomain::Reminders),
            "calendars" => Ok(CapabilityDomain::Calendars),
            _ => Err(DomainParseError(s.to_owned())),
        }
    }
}

/// Process-wide set of domains already prompted this session.
///
/// Owned exclusively by this module; the only mutations are the monotonic
/// insert in [`trigger_permission_prompt`] and the explicit
/// [`reset_prompted_domains`] test hook.
fn prompted_domains() -> &'static Mutex<HashSet<CapabilityDomain>> {
    static PROMPTED: OnceLock<Mutex<HashSet<CapabilityDomain>>> = OnceLock::new();
    PROMPTED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Trigger the macOS permission dialog for the given domain.
///
/// Returns immediately when the domain was already prompted this session.
/// Otherwise runs the read-only probe script and records the domain as
/// prompted whether or not the script succeeded. Never errs.
///
/// Concurrent triggers for the same domain may both run the probe before
/// either records it; that at-least-once behavior is acceptable because the
/// probe is idempotent.
pub async fn trigger_permission_prompt(domain: CapabilityDomain) {
    if has_been_prompted(domain) {
        return;
    }

    let probe = script::permission_probe(domain);
    match run_osascript(&probe).await {
        Ok(_) => {
            tracing::debug!(%domain, "permission probe completed");
        }
        Err(e) => {
            // A denied or failed probe is still a terminal answer for this
            // session; re-running the dialog trigger will not change it.
            tracing::debug!(%domain, error = %e, "permission probe failed; recording as prompted");
        }
    }

    if let Ok(mut prompted) = prompted_domains().lock() {
        prompted.insert(domain);
    }
}

/// Whether the domain has already been prompted this session.
pub fn has_been_prompted(domain: CapabilityDomain) -> bool {
    prompted_domains()
        .lock()
        .map(|prompted| prompted.contains(&domain))
        .unwrap_or(false)
}

/// Clear the prompted-domains set. Test hook; the set is otherwise
/// monotonic for the life of the process.
pub fn reset_prompted_domains() {
    if let Ok(mut prompted) = prompted_domains().lock() {
        prompted.clear();
    }
}

/// Serializes tests that reset or assert on the process-wide prompted set.
#[cfg(test)]
pub(crate) fn prompt_test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn domain_display_fromstr_roundtrip() {
        for domain in CapabilityDomain::all() {
            let s = domain.to_string();
            let parsed: CapabilityDomain = s.parse().unwrap();
            assert_eq!(*domain, parsed, "round-trip failed for {domain}");
        }
    }

    #[test]
    fn fromstr_is_case_insensitive() {
        assert_eq!(
            "Reminders".parse::<CapabilityDomain>().unwrap(),
            CapabilityDomain::Reminders
        );
        assert_eq!(
            "CALENDARS".parse::<CapabilityDomain>().unwrap(),
            CapabilityDomain::Calendars
        );
    }

    #[test]
    fn fromstr_unknown_returns_error() {
        assert!("contacts".parse::<CapabilityDomain>().is_err());
    }

    /// Prompt-set lifecycle in one test body: the global set is shared
    /// across the whole test binary, so interleaving assertions across
    /// separate tests would race.
    #[tokio::test]
    async fn trigger_records_once_and_reset_rearms() {
        let _guard = prompt_test_lock();
        reset_prompted_domains();
        assert!(!has_been_prompted(CapabilityDomain::Reminders));

        // osascript is absent on CI hosts; the probe failure must still
        // record the domain as prompted.
        trigger_permission_prompt(CapabilityDomain::Reminders).await;
        assert!(has_been_prompted(CapabilityDomain::Reminders));
        assert!(!has_been_prompted(CapabilityDomain::Calendars));

        // Second trigger is a no-op (already recorded).
        trigger_permission_prompt(CapabilityDomain::Reminders).await;
        assert!(has_been_prompted(CapabilityDomain::Reminders));

        reset_prompted_domains();
        assert!(!has_been_prompted(CapabilityDomain::Reminders));

        // After the reset, triggering prompts (and records) again.
        trigger_permission_prompt(CapabilityDomain::Reminders).await;
        assert!(has_been_prompted(CapabilityDomain::Reminders));

        reset_prompted_domains();
    }
}
