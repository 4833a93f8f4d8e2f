//! Publish/suppress decisions for compounds and members.
//!
//! Pure functions: attributes in, disposition and derived symbol names out.
//! The registry applies the destructor-marker substitution when symbols are
//! recorded, so names produced here still carry their `~`.

use crate::error::ScanError;
use crate::model::{Compound, Member, MemberKind, Virtuality, Visibility};
use crate::walker::Scope;

/// Alias prefix for the virtual-dispatch thunk of a published virtual member.
pub const THUNK_PREFIX: &str = "non-virtual?thunk?to?";

/// Prefix for a published class's virtual-table symbol.
pub const VTABLE_PREFIX: &str = "vtable?for?";

/// Prefix for a published class's type-identification symbol.
pub const TYPEINFO_PREFIX: &str = "typeinfo?for?";

/// A Doxygen mis-parse that shows up as a pseudo-member; tool noise, not a
/// real symbol.
const MISPARSE_ARTIFACTS: &[&str] = &["__attribute__"];

/// Disposition of a class/struct compound and its implied secondary symbols.
///
/// The vtable and typeinfo symbols follow the compound's own decision; they
/// are never re-evaluated per member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundClassification {
    pub publish: bool,
    pub vtable: String,
    pub typeinfo: String,
}

/// Disposition of one member's primary symbol and, for virtual functions,
/// the thunk alias that shares it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberClassification {
    pub publish: bool,
    pub symbol: String,
    pub thunk: Option<String>,
}

/// Classify a compound. Only class/struct compounds carry a compound-level
/// decision; anything else returns `None`.
pub fn classify_compound(compound: &Compound) -> Result<Option<CompoundClassification>, ScanError> {
    if !compound.kind.is_class_like() {
        return Ok(None);
    }

    let publish = compound.visibility()? != Visibility::Private;

    Ok(Some(CompoundClassification {
        publish,
        vtable: format!("{VTABLE_PREFIX}{}", compound.name),
        typeinfo: format!("{TYPEINFO_PREFIX}{}", compound.name),
    }))
}

/// Classify one member under the given scope.
///
/// Returns `Ok(None)` when the member produces no symbol at all: enums,
/// typedefs, templated members, inline functions, and mis-parse artifacts.
/// Everything else gets an explicit publish/suppress disposition.
pub fn classify_member(
    scope: Scope<'_>,
    member: &Member,
) -> Result<Option<MemberClassification>, ScanError> {
    let is_function = member.kind == MemberKind::Function;

    // Enums and typedefs have no linkage of their own; templated members are
    // instantiated at the call site; inline functions are assumed always
    // emitted and never need an explicit export entry.
    if matches!(member.kind, MemberKind::Enum | MemberKind::Typedef)
        || member.templated
        || (is_function && member.is_inline)
    {
        return Ok(None);
    }

    if MISPARSE_ARTIFACTS.contains(&member.name.as_str()) {
        tracing::debug!(args = ?member.args, "ignoring doxygen mis-parse artifact");
        return Ok(None);
    }

    // One export entry covers every overload of every operator on a type.
    let name = if member.name.starts_with("operator") {
        "operator"
    } else {
        member.name.as_str()
    };

    let qualified = match scope.prefix() {
        Some(prefix) => format!("{prefix}::{name}"),
        None => name.to_string(),
    };

    let mut publish = member.kind != MemberKind::Define;

    // Plain data fields of a class have no symbol worth exporting; statics
    // and functions do.
    if publish && scope.is_type() {
        publish = is_function || member.is_static;
    }

    // Private virtual functions keep their vtable slot's linkage for derived
    // classes elsewhere; every other private member stays hidden.
    if publish && member.visibility == Visibility::Private {
        publish = is_function && member.virtuality()? == Virtuality::Virtual;
    }

    // Pure-virtual declarations have no definition to export.
    if publish {
        if let Some(args) = member.args.as_deref() {
            publish = !args.ends_with("=0");
        }
    }

    let thunk = if is_function && member.virtuality()? == Virtuality::Virtual {
        Some(format!("{THUNK_PREFIX}{qualified}*"))
    } else {
        None
    };

    Ok(Some(MemberClassification {
        publish,
        symbol: format!("{qualified}*"),
        thunk,
    }))
}

// ============================================================================
// TESTS
// ============================================================================
