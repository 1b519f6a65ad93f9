//! Runtime type descriptions supplied by the caller.
//!
//! The switch runtime never inspects user types reflectively. The caller
//! hands over what it already knows statically: the ordered constant names
//! of an enumeration, or the name and supertypes of a class-like type.

use std::fmt;

use rustc_hash::FxHashMap;

/// Ordered constant names of one enumeration.
#[derive(Clone, Debug)]
pub struct EnumDescriptor {
    name: Box<str>,
    constants: Box<[Box<str>]>,
    /// Constant name to ordinal.
    ordinals: FxHashMap<Box<str>, usize>,
}

impl EnumDescriptor {
    /// Describe enumeration `name` with constants in ordinal order.
    ///
    /// A repeated constant name resolves to its first ordinal.
    pub fn new<I, S>(name: &str, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let constants: Box<[Box<str>]> = constants.into_iter().map(Into::into).collect();
        let mut ordinals = FxHashMap::default();
        ordinals.reserve(constants.len());
        for (ordinal, constant) in constants.iter().enumerate() {
            ordinals.entry(constant.clone()).or_insert(ordinal);
        }
        EnumDescriptor {
            name: name.into(),
            constants,
            ordinals,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constants(&self) -> &[Box<str>] {
        &self.constants
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Ordinal of the constant called `name`.
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.ordinals.get(name).copied()
    }

    /// The constant at `ordinal`.
    pub fn constant(&self, ordinal: usize) -> Option<EnumConstant<'_>> {
        (ordinal < self.constants.len()).then_some(EnumConstant {
            descriptor: self,
            ordinal,
        })
    }

    /// The constant called `name`.
    pub fn constant_named(&self, name: &str) -> Option<EnumConstant<'_>> {
        self.ordinal_of(name).and_then(|ordinal| self.constant(ordinal))
    }
}

/// One constant of an [`EnumDescriptor`].
#[derive(Copy, Clone, Debug)]
pub struct EnumConstant<'a> {
    descriptor: &'a EnumDescriptor,
    ordinal: usize,
}

impl<'a> EnumConstant<'a> {
    pub fn descriptor(self) -> &'a EnumDescriptor {
        self.descriptor
    }

    pub fn ordinal(self) -> usize {
        self.ordinal
    }

    pub fn name(self) -> &'a str {
        &self.descriptor.constants[self.ordinal]
    }
}

impl PartialEq for EnumConstant<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal && self.descriptor.name == other.descriptor.name
    }
}

impl Eq for EnumConstant<'_> {}

impl fmt::Display for EnumConstant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.descriptor.name, self.name())
    }
}

/// A named type with its direct supertypes.
///
/// Types are identified by name; two descriptors with the same name are
/// the same type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDesc {
    name: Box<str>,
    supertypes: Vec<TypeDesc>,
}

impl TypeDesc {
    pub fn new(name: &str) -> Self {
        TypeDesc {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, supertype: TypeDesc) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supertypes(&self) -> &[TypeDesc] {
        &self.supertypes
    }

    /// Whether a value of this type is also a value of type `name`.
    pub fn is_subtype_of(&self, name: &str) -> bool {
        &*self.name == name || self.supertypes.iter().any(|s| s.is_subtype_of(name))
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
