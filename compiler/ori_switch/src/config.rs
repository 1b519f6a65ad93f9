//! Bootstrap configuration.

use std::fmt;

/// Environment variable selecting the [`UnresolvedLabelPolicy`].
pub const UNRESOLVED_LABELS_ENV: &str = "ORI_SWITCH_UNRESOLVED_LABELS";

/// What to do with an enum label that names no constant of its enumeration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnresolvedLabelPolicy {
    /// Drop the label with a warning. Its case body becomes unreachable;
    /// no other label's index changes.
    #[default]
    Skip,
    /// Fail construction with [`SwitchError::UnresolvedLabel`](crate::SwitchError::UnresolvedLabel).
    Reject,
}

impl UnresolvedLabelPolicy {
    /// Parse a policy name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("skip") {
            Some(UnresolvedLabelPolicy::Skip)
        } else if s.eq_ignore_ascii_case("reject") {
            Some(UnresolvedLabelPolicy::Reject)
        } else {
            None
        }
    }
}

impl fmt::Display for UnresolvedLabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedLabelPolicy::Skip => f.write_str("skip"),
            UnresolvedLabelPolicy::Reject => f.write_str("reject"),
        }
    }
}

/// Settings applied while building switch sites.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchConfig {
    pub unresolved_labels: UnresolvedLabelPolicy,
}

impl SwitchConfig {
    /// Read the configuration from the environment.
    ///
    /// Unset or unrecognized values fall back to the defaults.
    pub fn from_env() -> Self {
        let unresolved_labels = match std::env::var(UNRESOLVED_LABELS_ENV) {
            Ok(value) => UnresolvedLabelPolicy::parse(value.trim()).unwrap_or_else(|| {
                tracing::warn!(
                    variable = UNRESOLVED_LABELS_ENV,
                    value = value.as_str(),
                    "unrecognized unresolved-label policy, using default",
                );
                UnresolvedLabelPolicy::default()
            }),
            Err(_) => UnresolvedLabelPolicy::default(),
        };
        SwitchConfig { unresolved_labels }
    }

    #[must_use]
    pub fn with_unresolved_labels(mut self, policy: UnresolvedLabelPolicy) -> Self {
        self.unresolved_labels = policy;
        self
    }
}
