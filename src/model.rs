//! Typed records for documented compounds and their members.
//!
//! One `Document` holds the compounds parsed from a single Doxygen XML file.
//! Records are immutable snapshots: the reader builds them once, the walker
//! and classifier only read them. Attributes that Doxygen only emits for some
//! entities (compound visibility, member virtuality) are explicit `Option`s;
//! the accessors that require them fail with a `ScanError::Missing` naming
//! the field instead of panicking.

use crate::error::ScanError;

// ============================================================================
// KINDS
// ============================================================================

/// The kind of a documented compound.
///
/// Doxygen emits more kinds than we care about (interface, protocol, dir,
/// ...); anything unrecognized maps to `Other` and is treated like a plain
/// named scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompoundKind {
    Class,
    Struct,
    Namespace,
    Group,
    File,
    Union,
    Page,
    Example,
    Other,
}

impl CompoundKind {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "class" => Self::Class,
            "struct" => Self::Struct,
            "namespace" => Self::Namespace,
            "group" => Self::Group,
            "file" => Self::File,
            "union" => Self::Union,
            "page" => Self::Page,
            "example" => Self::Example,
            _ => Self::Other,
        }
    }

    /// Class-like compounds carry visibility and vtable/typeinfo symbols.
    pub fn is_class_like(self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

/// The kind of a documented member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Function,
    Variable,
    Enum,
    Typedef,
    Define,
    Other,
}

impl MemberKind {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "function" => Self::Function,
            "variable" => Self::Variable,
            "enum" => Self::Enum,
            "typedef" => Self::Typedef,
            "define" => Self::Define,
            _ => Self::Other,
        }
    }
}

// ============================================================================
// VISIBILITY AND VIRTUALITY
// ============================================================================

/// Member/compound protection level (Doxygen `prot` attribute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn from_attr(value: &str) -> Result<Self, ScanError> {
        match value {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            other => Err(ScanError::invalid_attribute(format!(
                "unrecognized prot value: {other}"
            ))),
        }
    }
}

/// Function virtuality (Doxygen `virt` attribute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Virtuality {
    NonVirtual,
    Virtual,
    PureVirtual,
}

impl Virtuality {
    pub fn from_attr(value: &str) -> Result<Self, ScanError> {
        match value {
            "non-virtual" => Ok(Self::NonVirtual),
            "virtual" => Ok(Self::Virtual),
            "pure-virtual" => Ok(Self::PureVirtual),
            other => Err(ScanError::invalid_attribute(format!(
                "unrecognized virt value: {other}"
            ))),
        }
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// One documented member: a function, variable, enum, typedef, or define
/// belonging to a compound (or a free function for namespace/group scopes).
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub kind: MemberKind,
    /// Raw name as documented; may be an operator name or a `~Dtor` name.
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Present on function members; `virtuality()` enforces that.
    pub virt: Option<Virtuality>,
    /// Argument-signature text, when the memberdef carried an `argsstring`
    /// element. Only consulted for the trailing `=0` pure-virtual marker.
    pub args: Option<String>,
    /// A `templateparamlist` child marks the member as templated.
    pub templated: bool,
    pub is_inline: bool,
}

impl Member {
    /// Virtuality of a function member. Doxygen emits `virt` on every
    /// function memberdef, so its absence is malformed input.
    pub fn virtuality(&self) -> Result<Virtuality, ScanError> {
        self.virt.ok_or_else(|| ScanError::missing_attribute("virt"))
    }
}

/// One documented compound: a class, struct, namespace, group, or other
/// named entity, together with its members in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Compound {
    pub kind: CompoundKind,
    /// Qualified compound name, e.g. `miral::Window`.
    pub name: String,
    /// Present on class/struct compounds; `visibility()` enforces that.
    pub prot: Option<Visibility>,
    /// Path of the header the compound was documented from, when Doxygen
    /// resolved one.
    pub location: Option<String>,
    pub templated: bool,
    pub members: Vec<Member>,
}

impl Compound {
    /// Visibility of a class/struct compound; absence is malformed input.
    pub fn visibility(&self) -> Result<Visibility, ScanError> {
        self.prot.ok_or_else(|| ScanError::missing_attribute("prot"))
    }
}

/// The compounds parsed from a single input document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub compounds: Vec<Compound>,
}
