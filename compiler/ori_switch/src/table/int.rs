//! Integral dispatch table.
//!
//! Labels are sorted once, keeping a parallel map back to declaration
//! order. Lookup is a binary search over the sorted labels.
//!
//! Duplicate labels are allowed. The sort is stable and the search finds
//! the leftmost equal label, so the first declared duplicate always wins,
//! the same result a top-to-bottom comparison would give.

use crate::index::{label_count, CaseIndex};
use crate::SwitchError;

/// Values that widen losslessly to the 32-bit dispatch key.
pub trait Integral: Copy {
    fn widen(self) -> i32;
}

impl Integral for i32 {
    #[inline]
    fn widen(self) -> i32 {
        self
    }
}

impl Integral for i16 {
    #[inline]
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl Integral for i8 {
    #[inline]
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl Integral for u16 {
    #[inline]
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl Integral for u8 {
    #[inline]
    fn widen(self) -> i32 {
        i32::from(self)
    }
}

impl Integral for char {
    #[inline]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "scalar values stop at 0x10FFFF, well inside i32"
    )]
    fn widen(self) -> i32 {
        u32::from(self) as i32
    }
}

/// Sorted integral labels with their declaration positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntTable {
    /// Labels in ascending order.
    labels: Box<[i32]>,
    /// `indexes[i]` is the declaration position of `labels[i]`.
    indexes: Box<[i32]>,
    /// Label count, returned when nothing matches.
    no_match: i32,
}

impl IntTable {
    pub fn build(labels: &[i32]) -> Result<Self, SwitchError> {
        let no_match = label_count(labels.len())?;

        let mut entries: Vec<(i32, i32)> = labels.iter().copied().zip(0..no_match).collect();
        // Stable: equal labels keep declaration order.
        entries.sort_by_key(|&(label, _)| label);

        let (labels, indexes): (Vec<i32>, Vec<i32>) = entries.into_iter().unzip();

        tracing::debug!(labels = labels.len(), "built integral switch table");

        Ok(IntTable {
            labels: labels.into_boxed_slice(),
            indexes: indexes.into_boxed_slice(),
            no_match,
        })
    }

    /// Resolve a non-null value.
    #[inline]
    pub fn select(&self, value: i32) -> CaseIndex {
        let pos = self.labels.partition_point(|&label| label < value);
        match self.labels.get(pos) {
            Some(&label) if label == value => CaseIndex::from_raw(self.indexes[pos]),
            _ => CaseIndex::from_raw(self.no_match),
        }
    }

    /// Resolve a possibly-null value of any integral kind.
    #[inline]
    pub fn resolve<T: Integral>(&self, value: Option<T>) -> CaseIndex {
        match value {
            Some(v) => self.select(v.widen()),
            None => CaseIndex::NULL_INPUT,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
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
