//! The dispatch index returned by every selector.

use std::fmt;

/// Result of resolving one input against a dispatch table.
///
/// The raw value is a jump target for the code consuming the switch:
/// `0..N` select a case body, `N` (the label count) selects the default
/// arm, and `-1` selects the dedicated null arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CaseIndex(i32);

/// What a [`CaseIndex`] means relative to the label set it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The input matched the label at this declaration position.
    Case(usize),
    /// No label matched; fall through to the default arm.
    NoMatch,
    /// The input was null.
    NullInput,
}

impl CaseIndex {
    /// Sentinel for a null input.
    pub const NULL_INPUT: CaseIndex = CaseIndex(-1);

    #[inline]
    pub(crate) const fn from_raw(raw: i32) -> Self {
        CaseIndex(raw)
    }

    /// The raw jump target.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_null_input(self) -> bool {
        self.0 < 0
    }

    /// Interpret this index against a label set of `label_count` entries.
    pub fn outcome(self, label_count: usize) -> Outcome {
        match usize::try_from(self.0) {
            Err(_) => Outcome::NullInput,
            Ok(position) if position < label_count => Outcome::Case(position),
            Ok(_) => Outcome::NoMatch,
        }
    }
}

impl fmt::Display for CaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CaseIndex> for i32 {
    fn from(index: CaseIndex) -> i32 {
        index.0
    }
}

/// Convert a label count into the dispatch-index type.
///
/// The count doubles as the `NO_MATCH` value, so every position below it
/// fits as well.
pub(crate) fn label_count(count: usize) -> Result<i32, crate::SwitchError> {
    i32::try_from(count).map_err(|_| crate::SwitchError::TooManyLabels { count })
}
