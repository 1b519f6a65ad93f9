//! Dispatch tables, one per label kind.
//!
//! Each table is built once from a label set and never mutated. Its
//! `resolve` method is the selector routine: a pure function from one
//! input to a [`CaseIndex`](crate::CaseIndex), safe to call from any number
//! of threads.
//!
//! | Table | Build | Resolve |
//! |-------|-------|---------|
//! | [`IntTable`] | sort, O(N log N) | binary search, O(log N) |
//! | [`TextTable`] | sort by hash, O(N log N) | hash + binary search, O(log N) |
//! | [`EnumTable`] | fill by ordinal, O(M + N) | array read, O(1) |

mod enums;
mod int;
mod text;

pub use enums::{EnumTable, EnumValue};
pub use int::{IntTable, Integral};
pub use text::{text_hash, TextTable};
