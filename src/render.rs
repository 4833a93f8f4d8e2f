//! Version-script rendering.
//!
//! Emits the frozen baseline verbatim, then an incremental section holding
//! every newly published symbol, then the fixed trailer. Additive only: a
//! symbol whose rendered line already occurs in the baseline is never
//! re-emitted, and the baseline's stanza boundaries are never restructured.

use crate::baseline::{BASELINE, TRAILER};
use crate::registry::SymbolRegistry;

/// Toolkit-internal namespace whose symbols are never re-emitted, even when
/// newly published.
pub const EXCLUDED_NAMESPACE: &str = "miral::toolkit::";

/// Render the full version script for the registry's published symbols.
pub fn render(registry: &SymbolRegistry) -> String {
    let mut output = String::from(BASELINE);
    output.push('\n');

    for symbol in registry.published_symbols() {
        let line = format!("    {symbol};");
        if BASELINE.contains(&line) || line.contains(EXCLUDED_NAMESPACE) {
            continue;
        }
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(TRAILER);
    output.push('\n');
    output
}

// ============================================================================
// TESTS
// ============================================================================
