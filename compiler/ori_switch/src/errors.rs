//! Construction errors for switch dispatch sites.
//!
//! Every error here is raised while a site is being built. Resolving a
//! value against a built site cannot fail: each input maps to a case
//! index, the default index, or the null sentinel.

use thiserror::Error;

use crate::shape::SwitchShape;

/// Error raised while bootstrapping a switch site.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// The declared shape does not fit the requested switch kind.
    #[error("illegal invocation shape {shape}: {reason}")]
    Configuration {
        shape: SwitchShape,
        reason: &'static str,
    },

    /// The label set does not fit the dispatch-index type.
    #[error("switch has {count} labels, more than a dispatch index can address")]
    TooManyLabels { count: usize },

    /// An enum label names no constant of the enumeration.
    #[error("label {position} names `{name}`, which is not a constant of `{enum_name}`")]
    UnresolvedLabel {
        name: String,
        enum_name: String,
        position: usize,
    },

    /// A pattern switch was given an absent label.
    #[error("null label found at position {position}")]
    NullLabel { position: usize },

    /// An enum pattern switch was given a type label for some other type.
    #[error("type label `{found}` at position {position}, expected the switched enum `{expected}`")]
    EnumTypeMismatch {
        expected: String,
        found: String,
        position: usize,
    },
}

impl SwitchError {
    pub(crate) fn configuration(shape: &SwitchShape, reason: &'static str) -> Self {
        SwitchError::Configuration {
            shape: shape.clone(),
            reason,
        }
    }

    /// Whether this error comes from the declared shape rather than the labels.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SwitchError::Configuration { .. })
    }
}
