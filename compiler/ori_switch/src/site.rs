//! Dispatch sites and their bootstrap entry points.
//!
//! A bootstrap entry point validates the declared [`SwitchShape`], builds
//! the table for its label kind, and returns a [`DispatchSite`]. The site
//! is immutable from then on; [`DispatchSite::resolve`] is the only
//! operation it supports.

use crate::config::SwitchConfig;
use crate::index::CaseIndex;
use crate::pattern::{EnumPatternLabel, EnumPatternSwitch, PatternLabel, Scrutinee, TypeSwitch};
use crate::shape::{SwitchKind, SwitchShape};
use crate::table::{EnumTable, IntTable, TextTable};
use crate::types::EnumDescriptor;
use crate::SwitchError;

/// The table a site dispatches through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Int(IntTable),
    Text(TextTable),
    Enum(EnumTable),
    Type(TypeSwitch),
    EnumPattern(EnumPatternSwitch),
}

/// A built switch site: a declared shape bound to its dispatch table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchSite {
    shape: SwitchShape,
    selector: Selector,
}

impl DispatchSite {
    pub fn shape(&self) -> &SwitchShape {
        &self.shape
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Resolve `value` from the first label.
    #[inline]
    pub fn resolve(&self, value: Scrutinee<'_>) -> CaseIndex {
        self.resolve_from(value, 0)
    }

    /// Resolve `value`, skipping labels before `restart`.
    ///
    /// Only pattern sites honor `restart`; table sites always consider
    /// every label. A value of the wrong kind for a table site does not
    /// match any label.
    pub fn resolve_from(&self, value: Scrutinee<'_>, restart: usize) -> CaseIndex {
        if value.is_null() {
            return CaseIndex::NULL_INPUT;
        }
        match &self.selector {
            Selector::Int(table) => value
                .as_integral()
                .map_or(table.no_match(), |v| table.select(v)),
            Selector::Text(table) => match value {
                Scrutinee::Text(text) => table.select(text),
                _ => table.no_match(),
            },
            Selector::Enum(table) => match value {
                Scrutinee::Enum(constant) => table.select_constant(constant),
                _ => table.no_match(),
            },
            Selector::Type(switch) => switch.resolve(value, restart),
            Selector::EnumPattern(switch) => match value {
                Scrutinee::Enum(constant) => switch.resolve(Some(constant), restart),
                _ => switch.no_match(),
            },
        }
    }
}

/// Bootstrap a switch over integral labels.
pub fn int_switch(shape: &SwitchShape, labels: &[i32]) -> Result<DispatchSite, SwitchError> {
    shape.check(SwitchKind::Integral)?;
    Ok(DispatchSite {
        shape: shape.clone(),
        selector: Selector::Int(IntTable::build(labels)?),
    })
}

/// Bootstrap a switch over text labels. Absent labels never match.
pub fn text_switch<S: AsRef<str>>(
    shape: &SwitchShape,
    labels: &[Option<S>],
) -> Result<DispatchSite, SwitchError> {
    shape.check(SwitchKind::Text)?;
    Ok(DispatchSite {
        shape: shape.clone(),
        selector: Selector::Text(TextTable::build(labels)?),
    })
}

/// Bootstrap a switch over the constants of `descriptor`, by name.
pub fn enum_switch<S: AsRef<str>>(
    shape: &SwitchShape,
    descriptor: &EnumDescriptor,
    labels: &[Option<S>],
    config: &SwitchConfig,
) -> Result<DispatchSite, SwitchError> {
    shape.check(SwitchKind::EnumTable)?;
    shape.check_enum_name(descriptor.name())?;
    Ok(DispatchSite {
        shape: shape.clone(),
        selector: Selector::Enum(EnumTable::build(
            descriptor,
            labels,
            config.unresolved_labels,
        )?),
    })
}

/// Bootstrap a restartable switch over type, text, and integer labels.
pub fn type_switch(
    shape: &SwitchShape,
    labels: Vec<Option<PatternLabel>>,
) -> Result<DispatchSite, SwitchError> {
    shape.check(SwitchKind::TypePattern)?;
    Ok(DispatchSite {
        shape: shape.clone(),
        selector: Selector::Type(TypeSwitch::build(labels)?),
    })
}

/// Bootstrap a restartable switch over the type and constants of `descriptor`.
pub fn enum_pattern_switch(
    shape: &SwitchShape,
    descriptor: &EnumDescriptor,
    labels: &[Option<EnumPatternLabel>],
    config: &SwitchConfig,
) -> Result<DispatchSite, SwitchError> {
    shape.check(SwitchKind::EnumPattern)?;
    shape.check_enum_name(descriptor.name())?;
    Ok(DispatchSite {
        shape: shape.clone(),
        selector: Selector::EnumPattern(EnumPatternSwitch::build(
            descriptor,
            labels,
            config.unresolved_labels,
        )?),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
