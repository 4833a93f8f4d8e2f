//! Document scanning: walk, classify, record.
//!
//! The registry is threaded through explicitly and accumulates monotonically
//! across documents; a document that fails mid-scan keeps whatever it
//! recorded before the failure, matching the per-document isolation contract.

use std::path::Path;

use crate::classify::{classify_compound, classify_member};
use crate::doxygen;
use crate::error::ScanError;
use crate::model::Document;
use crate::registry::SymbolRegistry;
use crate::walker::walk;

/// Scan one parsed document into the registry.
pub fn scan_document(document: &Document, registry: &mut SymbolRegistry) -> Result<(), ScanError> {
    for visit in walk(document) {
        if let Some(compound) = classify_compound(visit.compound)? {
            registry.record(&compound.vtable, compound.publish);
            registry.record(&compound.typeinfo, compound.publish);
        }

        // Members are evaluated even under a suppressed compound: a private
        // class's publishable static member is still exported on its own,
        // without its enclosing type's vtable/typeinfo.
        for member in visit.members() {
            if let Some(classified) = classify_member(visit.scope, member)? {
                registry.record(&classified.symbol, classified.publish);
                if let Some(thunk) = classified.thunk.as_deref() {
                    registry.record(thunk, classified.publish);
                }
            }
        }
    }

    Ok(())
}

/// Parse and scan one input file.
pub fn scan_file(path: &Path, registry: &mut SymbolRegistry) -> Result<(), ScanError> {
    let document = doxygen::parse_file(path)?;
    scan_document(&document, registry)
}
