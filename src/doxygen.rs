//! Doxygen XML reader.
//!
//! Parses one Doxygen-generated XML document into the typed [`Document`]
//! record. Doxygen output looks like:
//!
//! ```xml
//! <doxygen>
//!   <compounddef kind="class" prot="public">
//!     <compoundname>miral::Window</compoundname>
//!     <sectiondef kind="public-func">
//!       <memberdef kind="function" prot="public" static="no" virt="virtual">
//!         <name>resize</name>
//!         <argsstring>(Size size)</argsstring>
//!         <location file="include/miral/window.h" line="42"/>
//!       </memberdef>
//!     </sectiondef>
//!     <location file="include/miral/window.h"/>
//!   </compounddef>
//! </doxygen>
//! ```
//!
//! Two structural details matter:
//!
//! - `location` and `templateparamlist` are attributed to whichever record
//!   they are a DIRECT child of; a memberdef's location must not overwrite
//!   the enclosing compound's.
//! - element text (`compoundname`, `name`, `argsstring`) is the depth-first
//!   concatenation of every text node underneath, since Doxygen nests markup
//!   like `<ref>` inside them.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ScanError;
use crate::model::{
    Compound, CompoundKind, Document, Member, MemberKind, Virtuality, Visibility,
};

/// Parse one Doxygen XML document from a file on disk.
pub fn parse_file(path: &Path) -> Result<Document, ScanError> {
    let input = std::fs::read(path)?;
    parse_document(&input)
}

/// Parse one Doxygen XML document from bytes.
pub fn parse_document(input: &[u8]) -> Result<Document, ScanError> {
    DoxygenReader::new().read(input)
}

// ============================================================================
// READER
// ============================================================================

/// Which text-bearing element we are currently inside, if any.
///
/// The counter tracks nesting of same-named elements so that markup wrapped
/// inside (e.g. `<ref>`) keeps the capture open until the matching end tag.
#[derive(Debug, PartialEq, Eq)]
enum Capture {
    CompoundName,
    MemberName,
    ArgsString,
}

struct DoxygenReader {
    compounds: Vec<Compound>,
    compound: Option<PartialCompound>,
    member: Option<PartialMember>,
    /// Open element names, innermost last. Used for direct-child checks.
    element_stack: Vec<String>,
    capture: Option<(Capture, usize)>,
}

struct PartialCompound {
    kind: CompoundKind,
    name: String,
    prot: Option<Visibility>,
    location: Option<String>,
    templated: bool,
    members: Vec<Member>,
}

struct PartialMember {
    kind: MemberKind,
    name: String,
    visibility: Visibility,
    is_static: bool,
    virt: Option<Virtuality>,
    args: Option<String>,
    templated: bool,
    is_inline: bool,
}

impl DoxygenReader {
    fn new() -> Self {
        Self {
            compounds: Vec::new(),
            compound: None,
            member: None,
            element_stack: Vec::new(),
            capture: None,
        }
    }

    fn read(mut self, input: &[u8]) -> Result<Document, ScanError> {
        let mut reader = Reader::from_reader(input);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    self.handle_start(e)?;
                    self.push_element(e);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element: start + end
                    self.handle_start(e)?;
                    self.push_element(e);
                    self.handle_end()?;
                }
                Ok(Event::End(_)) => {
                    self.handle_end()?;
                }
                Ok(Event::Text(ref e)) => {
                    if self.capture.is_some() {
                        let text = e
                            .unescape()
                            .map_err(|e| ScanError::xml(format!("Text decode error: {e}")))?;
                        self.append_text(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ScanError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(Document {
            compounds: self.compounds,
        })
    }

    fn push_element(&mut self, e: &BytesStart<'_>) {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        self.element_stack.push(name);
    }

    /// Name of the element enclosing the one currently being opened.
    fn parent_element(&self) -> Option<&str> {
        self.element_stack.last().map(String::as_str)
    }

    fn handle_start(&mut self, e: &BytesStart<'_>) -> Result<(), ScanError> {
        let name_bytes = e.name();
        let tag = std::str::from_utf8(name_bytes.as_ref())
            .map_err(|e| ScanError::xml(format!("Invalid tag name: {e}")))?;

        match tag {
            "compounddef" => {
                let kind = CompoundKind::from_attr(&require_attr(e, "kind")?);
                let prot = match optional_attr(e, "prot")? {
                    Some(value) => Some(Visibility::from_attr(&value)?),
                    None => None,
                };
                self.compound = Some(PartialCompound {
                    kind,
                    name: String::new(),
                    prot,
                    location: None,
                    templated: false,
                    members: Vec::new(),
                });
            }
            "memberdef" if self.compound.is_some() => {
                let kind = MemberKind::from_attr(&require_attr(e, "kind")?);
                let visibility = Visibility::from_attr(&require_attr(e, "prot")?)?;
                let is_static = require_attr(e, "static")? == "yes";
                let virt = match optional_attr(e, "virt")? {
                    Some(value) => Some(Virtuality::from_attr(&value)?),
                    None => None,
                };
                let is_inline = optional_attr(e, "inline")?.as_deref() == Some("yes");
                self.member = Some(PartialMember {
                    kind,
                    name: String::new(),
                    visibility,
                    is_static,
                    virt,
                    args: None,
                    templated: false,
                    is_inline,
                });
            }
            "templateparamlist" => {
                if self.parent_element() == Some("memberdef") {
                    if let Some(member) = self.member.as_mut() {
                        member.templated = true;
                    }
                } else if self.parent_element() == Some("compounddef") {
                    if let Some(compound) = self.compound.as_mut() {
                        compound.templated = true;
                    }
                }
            }
            "location" => {
                // Only the compound's own location child counts; the first
                // one seen wins.
                if self.parent_element() == Some("compounddef") {
                    if let Some(compound) = self.compound.as_mut() {
                        if compound.location.is_none() {
                            compound.location = Some(require_attr(e, "file")?);
                        }
                    }
                }
            }
            "compoundname" => {
                if self.compound.is_some() && self.member.is_none() {
                    self.open_capture(Capture::CompoundName);
                }
            }
            "name" => {
                if self.member.is_some() {
                    self.open_capture(Capture::MemberName);
                }
            }
            "argsstring" => {
                if let Some(member) = self.member.as_mut() {
                    member.args.get_or_insert_with(String::new);
                    self.open_capture(Capture::ArgsString);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_end(&mut self) -> Result<(), ScanError> {
        let Some(tag) = self.element_stack.pop() else {
            return Ok(());
        };

        let mut close_capture = false;
        if let Some((capture, depth)) = self.capture.as_mut() {
            let closes = match capture {
                Capture::CompoundName => tag == "compoundname",
                Capture::MemberName => tag == "name",
                Capture::ArgsString => tag == "argsstring",
            };
            if closes {
                if *depth == 0 {
                    close_capture = true;
                } else {
                    *depth -= 1;
                }
            }
        }
        if close_capture {
            self.capture = None;
        }

        match tag.as_str() {
            "memberdef" => {
                if let (Some(member), Some(compound)) = (self.member.take(), self.compound.as_mut())
                {
                    compound.members.push(Member {
                        kind: member.kind,
                        name: member.name,
                        visibility: member.visibility,
                        is_static: member.is_static,
                        virt: member.virt,
                        args: member.args,
                        templated: member.templated,
                        is_inline: member.is_inline,
                    });
                }
            }
            "compounddef" => {
                if let Some(compound) = self.compound.take() {
                    self.compounds.push(Compound {
                        kind: compound.kind,
                        name: compound.name,
                        prot: compound.prot,
                        location: compound.location,
                        templated: compound.templated,
                        members: compound.members,
                    });
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn open_capture(&mut self, capture: Capture) {
        match &mut self.capture {
            // Same-named element nested inside an open capture: deepen.
            Some((open, depth)) => {
                if *open == capture {
                    *depth += 1;
                }
            }
            slot => *slot = Some((capture, 0)),
        }
    }

    fn append_text(&mut self, text: &str) {
        let Some((capture, _)) = self.capture.as_ref() else {
            return;
        };
        match capture {
            Capture::CompoundName => {
                if let Some(compound) = self.compound.as_mut() {
                    compound.name.push_str(text);
                }
            }
            Capture::MemberName => {
                if let Some(member) = self.member.as_mut() {
                    member.name.push_str(text);
                }
            }
            Capture::ArgsString => {
                if let Some(member) = self.member.as_mut() {
                    if let Some(args) = member.args.as_mut() {
                        args.push_str(text);
                    }
                }
            }
        }
    }
}

// ============================================================================
// ATTRIBUTE HELPERS
// ============================================================================

fn optional_attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, ScanError> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|err| ScanError::xml(format!("Attribute error: {err}")))?;
    match attr {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|err| ScanError::xml(format!("Attribute value error: {err}")))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

fn require_attr(e: &BytesStart<'_>, name: &str) -> Result<String, ScanError> {
    optional_attr(e, name)?.ok_or_else(|| ScanError::missing_attribute(name))
}

// ============================================================================
// TESTS
// ============================================================================
