//! Text dispatch table.
//!
//! Text labels are ordered by hash code rather than by value, so a lookup
//! costs one hash plus a binary search over integers. Equal hashes are
//! grouped into buckets; a value comparison settles which label in the
//! bucket (if any) matched.
//!
//! # Hash
//!
//! [`text_hash`] is the 31-multiplier polynomial over UTF-16 code units
//! with wrapping 32-bit arithmetic. It is cheap and well distributed for
//! short identifiers, and its collision pairs (`"Aa"`/`"BB"`) are well
//! known, which keeps the bucket scan easy to exercise.

use crate::index::{label_count, CaseIndex};
use crate::SwitchError;

/// Hash code used to order text labels.
#[inline]
pub fn text_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct TextEntry {
    hash: i32,
    /// `None` for a null label, which no input can match.
    label: Option<Box<str>>,
    /// Declaration position.
    index: i32,
}

/// Text labels ordered by hash code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextTable {
    /// Entries in ascending hash order; ties keep declaration order.
    entries: Box<[TextEntry]>,
    /// Whether any two entries share a hash code.
    collisions: bool,
    no_match: i32,
}

impl TextTable {
    /// Build the table for `labels`.
    ///
    /// An absent label hashes to 0 and is never matched by any input.
    pub fn build<S: AsRef<str>>(labels: &[Option<S>]) -> Result<Self, SwitchError> {
        let no_match = label_count(labels.len())?;

        let mut entries: Vec<TextEntry> = labels
            .iter()
            .zip(0..no_match)
            .map(|(label, index)| {
                let label = label.as_ref().map(|s| Box::<str>::from(s.as_ref()));
                TextEntry {
                    hash: label.as_deref().map_or(0, text_hash),
                    label,
                    index,
                }
            })
            .collect();
        // Stable: each entry carries its own declaration position, so repeated
        // values map back to their own occurrences in order.
        entries.sort_by_key(|entry| entry.hash);

        let collisions = entries.windows(2).any(|pair| pair[0].hash == pair[1].hash);

        tracing::debug!(
            labels = entries.len(),
            collisions,
            "built text switch table"
        );

        Ok(TextTable {
            entries: entries.into_boxed_slice(),
            collisions,
            no_match,
        })
    }

    /// Resolve a non-null value.
    pub fn select(&self, value: &str) -> CaseIndex {
        let hash = text_hash(value);
        // Leftmost entry of the bucket, so a repeated label resolves to its
        // first declaration.
        let start = self.entries.partition_point(|entry| entry.hash < hash);
        let Some(first) = self.entries.get(start).filter(|entry| entry.hash == hash) else {
            return self.no_match();
        };

        if first.label.as_deref() == Some(value) {
            return CaseIndex::from_raw(first.index);
        }
        if !self.collisions {
            return self.no_match();
        }

        self.entries[start + 1..]
            .iter()
            .take_while(|entry| entry.hash == hash)
            .find(|entry| entry.label.as_deref() == Some(value))
            .map_or(self.no_match(), |entry| CaseIndex::from_raw(entry.index))
    }

    /// Resolve a possibly-null value.
    #[inline]
    pub fn resolve(&self, value: Option<&str>) -> CaseIndex {
        match value {
            Some(v) => self.select(v),
            None => CaseIndex::NULL_INPUT,
        }
    }

    /// Whether any two labels share a hash code.
    pub fn has_collisions(&self) -> bool {
        self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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
mod tests;
