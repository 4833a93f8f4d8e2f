//! # symscript
//!
//! Extracts the symbols a library intends to export from Doxygen-generated
//! XML and emits a linker version-script fragment: the frozen legacy stanzas
//! reproduced verbatim, plus an incremental section of newly published
//! symbols.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! render    → baseline + incremental version-script output
//!   ↓
//! scan      → per-document pipeline: walk, classify, record
//!   ↓
//! registry  → published/suppressed symbol sets
//!   ↓
//! classify  → publish/suppress decisions, derived thunk/vtable/typeinfo
//!   ↓
//! walker    → traversal and ABI-surface filtering
//!   ↓
//! doxygen   → quick-xml reader for Doxygen documents
//!   ↓
//! model     → typed Compound/Member records
//! ```

/// Typed records: Compound, Member, kinds, visibility, virtuality
pub mod model;

/// Doxygen XML reader
pub mod doxygen;

/// Traversal over parsed documents with ABI-surface filtering
pub mod walker;

/// Publish/suppress decision rules and derived secondary symbols
pub mod classify;

/// Published/suppressed symbol accumulator
pub mod registry;

/// Per-document scan pipeline
pub mod scan;

/// Version-script rendering against the frozen baseline
pub mod render;

mod baseline;
mod error;

pub use error::ScanError;
pub use registry::SymbolRegistry;
pub use render::render;
pub use scan::{scan_document, scan_file};
