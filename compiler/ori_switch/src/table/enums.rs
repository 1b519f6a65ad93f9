//! Enum dispatch table.
//!
//! One slot per constant of the enumeration, indexed by ordinal and
//! pre-filled with the case index of the label naming that constant, or
//! the no-match index. Lookup is a single array read.

use crate::config::UnresolvedLabelPolicy;
use crate::index::{label_count, CaseIndex};
use crate::types::{EnumConstant, EnumDescriptor};
use crate::SwitchError;

/// Values that know their position among their enumeration's constants.
pub trait EnumValue {
    fn ordinal(&self) -> usize;
}

impl EnumValue for EnumConstant<'_> {
    #[inline]
    fn ordinal(&self) -> usize {
        EnumConstant::ordinal(*self)
    }
}

impl<E: EnumValue + ?Sized> EnumValue for &E {
    #[inline]
    fn ordinal(&self) -> usize {
        (**self).ordinal()
    }
}

/// Ordinal-indexed case table for one enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumTable {
    /// `by_ordinal[o]` is the case index for the constant with ordinal `o`.
    by_ordinal: Box<[i32]>,
    enum_name: Box<str>,
    no_match: i32,
}

impl EnumTable {
    /// Build the table for `labels`, each naming a constant of `descriptor`.
    ///
    /// Absent labels are skipped. When two labels name the same constant the
    /// first one wins. Names that match no constant follow `policy`.
    pub fn build<S: AsRef<str>>(
        descriptor: &EnumDescriptor,
        labels: &[Option<S>],
        policy: UnresolvedLabelPolicy,
    ) -> Result<Self, SwitchError> {
        let no_match = label_count(labels.len())?;
        let mut by_ordinal = vec![no_match; descriptor.len()].into_boxed_slice();

        for (position, (label, index)) in labels.iter().zip(0..no_match).enumerate() {
            let Some(label) = label else {
                continue;
            };
            let name: &str = label.as_ref();
            match descriptor.ordinal_of(name) {
                Some(ordinal) => {
                    let slot = &mut by_ordinal[ordinal];
                    if *slot == no_match {
                        *slot = index;
                    }
                }
                None => match policy {
                    UnresolvedLabelPolicy::Skip => {
                        tracing::warn!(
                            label = name,
                            position,
                            enum_name = descriptor.name(),
                            "skipping enum label with no matching constant",
                        );
                    }
                    UnresolvedLabelPolicy::Reject => {
                        return Err(SwitchError::UnresolvedLabel {
                            name: name.to_owned(),
                            enum_name: descriptor.name().to_owned(),
                            position,
                        });
                    }
                },
            }
        }

        tracing::debug!(
            labels = labels.len(),
            constants = descriptor.len(),
            enum_name = descriptor.name(),
            "built enum switch table"
        );

        Ok(EnumTable {
            by_ordinal,
            enum_name: descriptor.name().into(),
            no_match,
        })
    }

    /// Resolve a non-null constant by ordinal.
    ///
    /// An ordinal past the end of the table does not match. Prefer
    /// [`EnumTable::select_constant`] when the constant's enumeration is
    /// not already known.
    #[inline]
    pub fn select(&self, ordinal: usize) -> CaseIndex {
        CaseIndex::from_raw(
            self.by_ordinal
                .get(ordinal)
                .copied()
                .unwrap_or(self.no_match),
        )
    }

    /// Resolve a non-null constant, checking it belongs to this table's
    /// enumeration. A constant of any other enumeration does not match.
    #[inline]
    pub fn select_constant(&self, constant: EnumConstant<'_>) -> CaseIndex {
        if constant.descriptor().name() == self.enum_name() {
            self.select(constant.ordinal())
        } else {
            self.no_match()
        }
    }

    /// Resolve a possibly-null enum value.
    #[inline]
    pub fn resolve<E: EnumValue>(&self, value: Option<E>) -> CaseIndex {
        match value {
            Some(v) => self.select(v.ordinal()),
            None => CaseIndex::NULL_INPUT,
        }
    }

    /// Name of the enumeration the table was built for.
    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    /// Number of constants covered.
    pub fn constants(&self) -> usize {
        self.by_ordinal.len()
    }

    pub fn no_match(&self) -> CaseIndex {
        CaseIndex::from_raw(self.no_match)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
