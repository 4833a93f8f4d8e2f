//! Tree walker over a parsed document.
//!
//! Yields each compound relevant to symbol export, in document order, paired
//! with the scope its members are classified under. Pure traversal: the walk
//! never touches the registry and has no side effects beyond debug logging
//! of skip decisions.

use crate::model::{Compound, CompoundKind, Document, Member};

/// Path fragments marking compounds outside the public ABI surface: test
/// code, example code, generated code, and STL wrappers.
const SKIPPED_LOCATIONS: &[&str] = &["/examples/", "/test/", "[generated]", "[STL]"];

/// How a compound's members are scoped when rendered as symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Group members: bare names, no enclosing context.
    Unscoped,
    /// Members prefixed with a namespace-like name; non-class member rules.
    Namespace(&'a str),
    /// Members prefixed with a class/struct name; class member rules apply.
    Type(&'a str),
}

impl<'a> Scope<'a> {
    /// The `::`-joined prefix for member symbols, when there is one.
    pub fn prefix(&self) -> Option<&'a str> {
        match self {
            Scope::Unscoped => None,
            Scope::Namespace(name) | Scope::Type(name) => Some(name),
        }
    }

    /// Whether class-member publication rules apply.
    pub fn is_type(&self) -> bool {
        matches!(self, Scope::Type(_))
    }
}

/// One compound surviving the walk filters, with its member scope.
#[derive(Clone, Copy, Debug)]
pub struct CompoundVisit<'a> {
    pub compound: &'a Compound,
    pub scope: Scope<'a>,
}

impl<'a> CompoundVisit<'a> {
    /// Members of the compound, in document order.
    pub fn members(&self) -> impl Iterator<Item = &'a Member> {
        self.compound.members.iter()
    }
}

/// Walk a document, yielding each compound relevant to symbol export.
pub fn walk(document: &Document) -> impl Iterator<Item = CompoundVisit<'_>> {
    document.compounds.iter().filter_map(visit)
}

fn visit(compound: &Compound) -> Option<CompoundVisit<'_>> {
    let scope = match compound.kind {
        // Pages, files, examples, and unions contribute no exported symbols.
        CompoundKind::Page | CompoundKind::File | CompoundKind::Example | CompoundKind::Union => {
            return None;
        }
        CompoundKind::Group => Scope::Unscoped,
        CompoundKind::Namespace => Scope::Namespace(&compound.name),
        CompoundKind::Class | CompoundKind::Struct | CompoundKind::Other => {
            let Some(location) = compound.location.as_deref() else {
                tracing::debug!(compound = %compound.name, "no resolvable location, skipping");
                return None;
            };
            if let Some(pattern) = SKIPPED_LOCATIONS.iter().copied().find(|p| location.contains(p)) {
                tracing::debug!(compound = %compound.name, %location, pattern, "skipping");
                return None;
            }
            if compound.templated {
                tracing::debug!(compound = %compound.name, "templated, skipping");
                return None;
            }
            if compound.kind.is_class_like() {
                Scope::Type(&compound.name)
            } else {
                Scope::Namespace(&compound.name)
            }
        }
    };

    Some(CompoundVisit { compound, scope })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Visibility;

    fn compound(kind: CompoundKind, name: &str, location: Option<&str>) -> Compound {
        Compound {
            kind,
            name: name.to_string(),
            prot: Some(Visibility::Public),
            location: location.map(str::to_string),
            templated: false,
            members: Vec::new(),
        }
    }

    fn walk_names(compounds: Vec<Compound>) -> Vec<String> {
        let document = Document { compounds };
        walk(&document)
            .map(|visit| visit.compound.name.clone())
            .collect()
    }

    #[test]
    fn irrelevant_kinds_are_filtered() {
        let names = walk_names(vec![
            compound(CompoundKind::Page, "page", Some("doc/page.md")),
            compound(CompoundKind::File, "file", Some("include/a.h")),
            compound(CompoundKind::Example, "example", Some("demo.cpp")),
            compound(CompoundKind::Union, "U", Some("include/u.h")),
            compound(CompoundKind::Class, "Kept", Some("include/kept.h")),
        ]);

        assert_eq!(names, vec!["Kept"]);
    }

    #[test]
    fn test_and_example_locations_are_skipped() {
        let names = walk_names(vec![
            compound(CompoundKind::Class, "A", Some("src/examples/demo.h")),
            compound(CompoundKind::Class, "B", Some("src/test/helper.h")),
            compound(CompoundKind::Class, "C", Some("[generated]")),
            compound(CompoundKind::Class, "D", Some("[STL]")),
            compound(CompoundKind::Class, "E", Some("include/e.h")),
        ]);

        assert_eq!(names, vec!["E"]);
    }

    #[test]
    fn missing_location_skips_without_error() {
        let names = walk_names(vec![
            compound(CompoundKind::Class, "Nowhere", None),
            compound(CompoundKind::Namespace, "ns", None),
        ]);

        // Namespaces need no location; class compounds without one are skipped.
        assert_eq!(names, vec!["ns"]);
    }

    #[test]
    fn templated_compounds_are_skipped() {
        let mut templated = compound(CompoundKind::Class, "Tpl", Some("include/t.h"));
        templated.templated = true;

        assert_eq!(walk_names(vec![templated]), Vec::<String>::new());
    }

    #[test]
    fn scopes_reflect_compound_kind() {
        let document = Document {
            compounds: vec![
                compound(CompoundKind::Group, "grp", None),
                compound(CompoundKind::Namespace, "miral", None),
                compound(CompoundKind::Class, "miral::Window", Some("include/w.h")),
                compound(CompoundKind::Other, "iface", Some("include/i.h")),
            ],
        };

        let scopes: Vec<Scope<'_>> = walk(&document).map(|visit| visit.scope).collect();
        assert_eq!(
            scopes,
            vec![
                Scope::Unscoped,
                Scope::Namespace("miral"),
                Scope::Type("miral::Window"),
                Scope::Namespace("iface"),
            ]
        );
    }
}
