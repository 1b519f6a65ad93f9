//! Switch dispatch for the Ori runtime.
//!
//! Compiles the case labels of a `match` over integers, text, or enum
//! constants into an immutable dispatch table the first time the match is
//! reached. Every later evaluation resolves its input against that table
//! in better than linear time, returning the same index a top-to-bottom
//! comparison of the labels would.
//!
//! # Dispatch Index
//!
//! Every selector returns a [`CaseIndex`]. For a label set of `N` entries:
//!
//! - `0..N`: the declaration position of the matching label
//! - `N`: no label matched (the default arm)
//! - `-1` ([`CaseIndex::NULL_INPUT`]): the input was null
//!
//! # Components
//!
//! - [`shape`]: validates the declared invocation shape for a switch kind
//! - [`table`]: the integral, text, and enum tables and their selectors
//! - [`pattern`]: restartable type and enum pattern switches
//! - [`site`]: bootstrap entry points and the [`DispatchSite`] handle
//! - [`cache`]: publishes one site per [`SiteId`] for the process lifetime
//!
//! # Duplicate Labels
//!
//! Repeated labels are accepted by every table. The first declaration
//! always wins; later duplicates are unreachable.

mod config;
mod errors;
mod index;
mod types;

pub mod cache;
pub mod pattern;
pub mod shape;
pub mod site;
pub mod table;

pub use cache::{SiteCache, SiteId};
pub use config::{SwitchConfig, UnresolvedLabelPolicy, UNRESOLVED_LABELS_ENV};
pub use errors::SwitchError;
pub use index::{CaseIndex, Outcome};
pub use pattern::{EnumPatternLabel, PatternLabel, Scrutinee};
pub use shape::{Primitive, SwitchKind, SwitchShape, ValueKind};
pub use site::{
    enum_pattern_switch, enum_switch, int_switch, text_switch, type_switch, DispatchSite,
};
pub use types::{EnumConstant, EnumDescriptor, TypeDesc};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ori_switch=debug` or `RUST_LOG=ori_switch=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
