//! Pattern switches with a restart index.
//!
//! Pattern switches test labels in declaration order, starting from a
//! caller-supplied restart index, and return the first label that
//! matches. The restart index lets the caller resume the scan after a
//! guard on an earlier case failed, without re-testing the labels before
//! it.
//!
//! Unlike the tables in [`crate::table`], resolution is linear in the
//! number of labels: a type label can match many runtime types, so the
//! labels cannot be ordered by a single key.

use crate::config::UnresolvedLabelPolicy;
use crate::index::{label_count, CaseIndex};
use crate::table::Integral;
use crate::types::{EnumConstant, EnumDescriptor, TypeDesc};
use crate::SwitchError;

/// A runtime value presented to a switch site.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scrutinee<'a> {
    Null,
    Int(i32),
    Char(char),
    Text(&'a str),
    Enum(EnumConstant<'a>),
    /// A value of a class-like type.
    Object(&'a TypeDesc),
}

impl<'a> Scrutinee<'a> {
    /// Name of the value's runtime type, or `None` for null.
    pub fn type_name(&self) -> Option<&'a str> {
        match *self {
            Scrutinee::Null => None,
            Scrutinee::Int(_) => Some("int"),
            Scrutinee::Char(_) => Some("char"),
            Scrutinee::Text(_) => Some("str"),
            Scrutinee::Enum(constant) => Some(constant.descriptor().name()),
            Scrutinee::Object(ty) => Some(ty.name()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scrutinee::Null)
    }

    /// Whether the value's runtime type is `ty` or one of its subtypes.
    pub fn is_instance_of(&self, ty: &TypeDesc) -> bool {
        match self {
            Scrutinee::Object(actual) => actual.is_subtype_of(ty.name()),
            other => other.type_name() == Some(ty.name()),
        }
    }

    /// The value widened to the integral dispatch key, if it is integral.
    pub fn as_integral(&self) -> Option<i32> {
        match *self {
            Scrutinee::Int(v) => Some(v),
            Scrutinee::Char(c) => Some(c.widen()),
            _ => None,
        }
    }
}

impl From<i32> for Scrutinee<'_> {
    fn from(value: i32) -> Self {
        Scrutinee::Int(value)
    }
}

impl From<char> for Scrutinee<'_> {
    fn from(value: char) -> Self {
        Scrutinee::Char(value)
    }
}

impl<'a> From<&'a str> for Scrutinee<'a> {
    fn from(value: &'a str) -> Self {
        Scrutinee::Text(value)
    }
}

impl<'a> From<EnumConstant<'a>> for Scrutinee<'a> {
    fn from(value: EnumConstant<'a>) -> Self {
        Scrutinee::Enum(value)
    }
}

impl<'a> From<&'a TypeDesc> for Scrutinee<'a> {
    fn from(value: &'a TypeDesc) -> Self {
        Scrutinee::Object(value)
    }
}

impl<'a, T: Into<Scrutinee<'a>>> From<Option<T>> for Scrutinee<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scrutinee::Null, Into::into)
    }
}

/// A case label of a type switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternLabel {
    /// Matches values of this type or any subtype.
    Type(TypeDesc),
    /// Matches equal text.
    Text(Box<str>),
    /// Matches integral values (including characters) with this value.
    Int(i32),
}

impl PatternLabel {
    pub fn text(text: &str) -> Self {
        PatternLabel::Text(text.into())
    }

    pub fn matches(&self, value: &Scrutinee<'_>) -> bool {
        match self {
            PatternLabel::Type(ty) => value.is_instance_of(ty),
            PatternLabel::Text(text) => matches!(value, Scrutinee::Text(v) if *v == &**text),
            PatternLabel::Int(constant) => value.as_integral() == Some(*constant),
        }
    }
}

/// Switch over type, text, and integer labels, tested in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSwitch {
    labels: Box<[PatternLabel]>,
    no_match: i32,
}

impl TypeSwitch {
    /// Build from labels in declaration order. Every label must be present.
    pub fn build(labels: Vec<Option<PatternLabel>>) -> Result<Self, SwitchError> {
        let no_match = label_count(labels.len())?;
        let labels = labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| label.ok_or(SwitchError::NullLabel { position }))
            .collect::<Result<Box<[_]>, _>>()?;

        tracing::debug!(labels = labels.len(), "built type switch");

        Ok(TypeSwitch { labels, no_match })
    }

    /// Index of the first label at or after `restart` that matches `value`.
    pub fn resolve(&self, value: Scrutinee<'_>, restart: usize) -> CaseIndex {
        if value.is_null() {
            return CaseIndex::NULL_INPUT;
        }
        self.labels
            .iter()
            .zip(0..self.no_match)
            .skip(restart)
            .find(|(label, _)| label.matches(&value))
            .map_or(self.no_match(), |(_, index)| CaseIndex::from_raw(index))
    }

    pub fn labels(&self) -> &[PatternLabel] {
        &self.labels
    }

    pub fn no_match(&self) -> CaseIndex {
        CaseIndex::from_raw(self.no_match)
    }
}

/// A case label of an enum pattern switch, before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnumPatternLabel {
    /// The enumeration type itself; matches every constant.
    Type(Box<str>),
    /// One constant, by name.
    Constant(Box<str>),
}

impl EnumPatternLabel {
    pub fn constant(name: &str) -> Self {
        EnumPatternLabel::Constant(name.into())
    }

    pub fn of_type(name: &str) -> Self {
        EnumPatternLabel::Type(name.into())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EnumCase {
    AnyConstant,
    Ordinal(usize),
    /// A skipped name; never matches.
    Unresolved,
}

/// Switch over one enumeration's type and constant labels, tested in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumPatternSwitch {
    enum_name: Box<str>,
    cases: Box<[EnumCase]>,
    no_match: i32,
}

impl EnumPatternSwitch {
    pub fn build(
        descriptor: &EnumDescriptor,
        labels: &[Option<EnumPatternLabel>],
        policy: UnresolvedLabelPolicy,
    ) -> Result<Self, SwitchError> {
        let no_match = label_count(labels.len())?;
        let mut cases = Vec::with_capacity(labels.len());

        for (position, label) in labels.iter().enumerate() {
            let case = match label {
                None => return Err(SwitchError::NullLabel { position }),
                Some(EnumPatternLabel::Type(name)) if &**name == descriptor.name() => {
                    EnumCase::AnyConstant
                }
                Some(EnumPatternLabel::Type(name)) => {
                    return Err(SwitchError::EnumTypeMismatch {
                        expected: descriptor.name().to_owned(),
                        found: name.to_string(),
                        position,
                    });
                }
                Some(EnumPatternLabel::Constant(name)) => match descriptor.ordinal_of(name) {
                    Some(ordinal) => EnumCase::Ordinal(ordinal),
                    None if policy == UnresolvedLabelPolicy::Reject => {
                        return Err(SwitchError::UnresolvedLabel {
                            name: name.to_string(),
                            enum_name: descriptor.name().to_owned(),
                            position,
                        });
                    }
                    None => {
                        tracing::warn!(
                            label = &**name,
                            position,
                            enum_name = descriptor.name(),
                            "enum pattern label matches no constant and will never match",
                        );
                        EnumCase::Unresolved
                    }
                },
            };
            cases.push(case);
        }

        tracing::debug!(
            labels = cases.len(),
            enum_name = descriptor.name(),
            "built enum pattern switch"
        );

        Ok(EnumPatternSwitch {
            enum_name: descriptor.name().into(),
            cases: cases.into_boxed_slice(),
            no_match,
        })
    }

    /// Index of the first label at or after `restart` that matches `value`.
    pub fn resolve(&self, value: Option<EnumConstant<'_>>, restart: usize) -> CaseIndex {
        let Some(value) = value else {
            return CaseIndex::NULL_INPUT;
        };
        if value.descriptor().name() != &*self.enum_name {
            return self.no_match();
        }
        self.cases
            .iter()
            .zip(0..self.no_match)
            .skip(restart)
            .find(|(case, _)| match case {
                EnumCase::AnyConstant => true,
                EnumCase::Ordinal(ordinal) => *ordinal == value.ordinal(),
                EnumCase::Unresolved => false,
            })
            .map_or(self.no_match(), |(_, index)| CaseIndex::from_raw(index))
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
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
