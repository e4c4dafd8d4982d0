//! Argument vector construction for helper invocations.
//!
//! The helper takes one `--action` flag selecting the operation, followed by
//! flag/value pairs for each present field. Values are passed verbatim as
//! discrete argv entries (there is no shell between this layer and the
//! helper), so no quoting is applied or needed. Absent optional fields are
//! omitted rather than passed as empty strings.

use crate::error::{BridgeError, Result};

use super::records::RecurrenceRule;

/// Ordered flag/value sequence for one helper operation.
#[derive(Debug, Clone, Default)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    /// Start a vector with the given `--action` value.
    pub fn for_action(action: &str) -> Self {
        Self {
            args: vec!["--action".to_owned(), action.to_owned()],
        }
    }

    /// Append a flag with a required value.
    pub fn flag(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(flag.to_owned());
        self.args.push(value.into());
        self
    }

    /// Append a flag/value pair only when the value is present.
    pub fn opt(mut self, flag: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.args.push(flag.to_owned());
            self.args.push(value.into());
        }
        self
    }

    /// Append a flag with a `true`/`false` value when present.
    pub fn opt_bool(self, flag: &str, value: Option<bool>) -> Self {
        self.opt(flag, value.map(|v| v.to_string()))
    }

    /// Append a flag with a numeric value when present.
    pub fn opt_num(self, flag: &str, value: Option<impl ToString>) -> Self {
        self.opt(flag, value.map(|v| v.to_string()))
    }

    /// Append a bare switch (no value) when `set` is true.
    pub fn switch(mut self, flag: &str, set: bool) -> Self {
        if set {
            self.args.push(flag.to_owned());
        }
        self
    }

    /// Append a JSON-encoded recurrence rule when present.
    ///
    /// # Errors
    ///
    /// Returns a validation-class error if the rule cannot be encoded
    /// (practically unreachable for well-formed rules).
    pub fn opt_recurrence(self, value: Option<&RecurrenceRule>) -> Result<Self> {
        match value {
            Some(rule) => {
                let encoded = serde_json::to_string(rule).map_err(|e| {
                    BridgeError::Validation(format!("recurrence rule cannot be encoded: {e}"))
                })?;
                Ok(self.flag("--recurrence", encoded))
            }
            None => Ok(self),
        }
    }

    /// Finish building and return the flat vector.
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::repository::records::Frequency;

    #[test]
    fn action_flag_comes_first() {
        let args = ArgumentVector::for_action("read").into_vec();
        assert_eq!(args, vec!["--action", "read"]);
    }

    #[test]
    fn present_fields_become_flag_value_pairs() {
        let args = ArgumentVector::for_action("create")
            .flag("--title", "Buy groceries")
            .opt("--list", Some("Personal"))
            .into_vec();
        assert_eq!(
            args,
            vec!["--action", "create", "--title", "Buy groceries", "--list", "Personal"]
        );
    }

    #[test]
    fn absent_optionals_are_omitted_entirely() {
        let args = ArgumentVector::for_action("create")
            .flag("--title", "x")
            .opt("--notes", None::<String>)
            .opt_num("--priority", None::<u8>)
            .opt_bool("--flagged", None)
            .into_vec();
        assert_eq!(args, vec!["--action", "create", "--title", "x"]);
    }

    #[test]
    fn bool_and_numeric_values_render_as_text() {
        let args = ArgumentVector::for_action("update")
            .opt_bool("--completed", Some(true))
            .opt_num("--priority", Some(5u8))
            .into_vec();
        assert_eq!(
            args,
            vec!["--action", "update", "--completed", "true", "--priority", "5"]
        );
    }

    #[test]
    fn switch_appears_without_value() {
        let args = ArgumentVector::for_action("update")
            .flag("--id", "rem-001")
            .switch("--clear-recurrence", true)
            .switch("--never", false)
            .into_vec();
        assert_eq!(
            args,
            vec!["--action", "update", "--id", "rem-001", "--clear-recurrence"]
        );
    }

    #[test]
    fn recurrence_is_json_encoded() {
        let rule = RecurrenceRule {
            frequency: Frequency::Monthly,
            interval: 1,
            end_date: None,
            occurrence_count: None,
            days_of_week: None,
            days_of_month: Some(vec![1, 15]),
            months_of_year: None,
        };
        let args = ArgumentVector::for_action("create")
            .opt_recurrence(Some(&rule))
            .unwrap()
            .into_vec();
        assert_eq!(args[2], "--recurrence");
        let decoded: RecurrenceRule = serde_json::from_str(&args[3]).unwrap();
        assert_eq!(decoded, rule);
    }

    #[test]
    fn values_pass_through_verbatim_no_quoting() {
        let args = ArgumentVector::for_action("create")
            .flag("--title", r#"Say "hi"; rm -rf /"#)
            .into_vec();
        assert_eq!(args[3], r#"Say "hi"; rm -rf /"#);
    }
}
