//! Declared invocation shapes and their validation.
//!
//! A switch site is bootstrapped with the shape its caller expects to
//! invoke: the input parameter kinds and the result kind. The shape is
//! only used to check the contract before any table is built; a shape
//! that does not fit the requested kind is a configuration error.

use std::fmt;

use smallvec::SmallVec;

use crate::SwitchError;

/// Primitive value kinds, before boxing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Short,
    Byte,
    Char,
    Long,
    Bool,
    Float,
}

impl Primitive {
    /// Kinds that widen losslessly to the 32-bit dispatch key.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Primitive::Int | Primitive::Short | Primitive::Byte | Primitive::Char
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Short => "short",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Long => "long",
            Primitive::Bool => "bool",
            Primitive::Float => "float",
        }
    }
}

/// Kind of one declared parameter or result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An unboxed primitive; never null.
    Primitive(Primitive),
    /// A boxed primitive that may be null.
    Boxed(Primitive),
    /// Text; may be null.
    Text,
    /// A specific enumeration, by name; may be null.
    Enum(Box<str>),
    /// Any enumeration; may be null.
    AnyEnum,
    /// Any reference value; may be null.
    Object,
}

impl ValueKind {
    pub const INT: ValueKind = ValueKind::Primitive(Primitive::Int);

    /// Convenience constructor for [`ValueKind::Enum`].
    pub fn enumeration(name: &str) -> Self {
        ValueKind::Enum(name.into())
    }

    /// Whether a value of this kind can be null.
    pub const fn is_nullable(&self) -> bool {
        !matches!(self, ValueKind::Primitive(_))
    }

    pub const fn is_integral(&self) -> bool {
        match self {
            ValueKind::Primitive(p) | ValueKind::Boxed(p) => p.is_integral(),
            _ => false,
        }
    }

    pub const fn is_enum(&self) -> bool {
        matches!(self, ValueKind::Enum(_) | ValueKind::AnyEnum)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Primitive(p) => f.write_str(p.name()),
            ValueKind::Boxed(p) => write!(f, "{}?", p.name()),
            ValueKind::Text => f.write_str("str"),
            ValueKind::Enum(name) => f.write_str(name),
            ValueKind::AnyEnum => f.write_str("enum"),
            ValueKind::Object => f.write_str("object"),
        }
    }
}

/// The switch kinds a shape can be validated for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwitchKind {
    Integral,
    Text,
    EnumTable,
    TypePattern,
    EnumPattern,
}

/// Declared invocation shape: `(params...) -> result`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwitchShape {
    params: SmallVec<[ValueKind; 2]>,
    result: ValueKind,
}

impl SwitchShape {
    pub fn new(params: impl IntoIterator<Item = ValueKind>, result: ValueKind) -> Self {
        SwitchShape {
            params: params.into_iter().collect(),
            result,
        }
    }

    /// `(input) -> int`, the shape of every table switch.
    pub fn unary(input: ValueKind) -> Self {
        Self::new([input], ValueKind::INT)
    }

    /// `(input, int) -> int`, the shape of every pattern switch.
    pub fn with_restart(input: ValueKind) -> Self {
        Self::new([input, ValueKind::INT], ValueKind::INT)
    }

    pub fn params(&self) -> &[ValueKind] {
        &self.params
    }

    pub fn result(&self) -> &ValueKind {
        &self.result
    }

    /// The switched-on input, if the shape has any parameter.
    pub fn input(&self) -> Option<&ValueKind> {
        self.params.first()
    }

    /// Whether the switched-on input may be null.
    pub fn accepts_null(&self) -> bool {
        self.input().is_some_and(ValueKind::is_nullable)
    }

    /// Check that this shape can drive a switch of the given kind.
    pub fn check(&self, kind: SwitchKind) -> Result<(), SwitchError> {
        if self.result != ValueKind::INT {
            return Err(SwitchError::configuration(self, "result type must be int"));
        }

        match kind {
            SwitchKind::Integral | SwitchKind::Text | SwitchKind::EnumTable => {
                let [input] = self.params.as_slice() else {
                    return Err(SwitchError::configuration(
                        self,
                        "expected exactly one input parameter",
                    ));
                };
                let fits = match kind {
                    SwitchKind::Integral => input.is_integral(),
                    SwitchKind::Text => *input == ValueKind::Text,
                    _ => input.is_enum(),
                };
                if !fits {
                    return Err(SwitchError::configuration(
                        self,
                        "input type does not fit the label kind",
                    ));
                }
            }
            SwitchKind::TypePattern | SwitchKind::EnumPattern => {
                let [input, restart] = self.params.as_slice() else {
                    return Err(SwitchError::configuration(
                        self,
                        "expected an input and a restart index",
                    ));
                };
                if *restart != ValueKind::INT {
                    return Err(SwitchError::configuration(
                        self,
                        "restart index must be int",
                    ));
                }
                let fits = match kind {
                    SwitchKind::TypePattern => input.is_nullable(),
                    _ => matches!(input, ValueKind::Enum(_)),
                };
                if !fits {
                    return Err(SwitchError::configuration(
                        self,
                        "input type does not fit the label kind",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Check that the declared enum input names `enum_name`.
    ///
    /// [`ValueKind::AnyEnum`] accepts every enumeration.
    pub(crate) fn check_enum_name(&self, enum_name: &str) -> Result<(), SwitchError> {
        match self.input() {
            Some(ValueKind::Enum(name)) if &**name != enum_name => Err(SwitchError::configuration(
                self,
                "input enum does not match the enumeration",
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SwitchShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.result)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
