//! End-to-end tests: Doxygen XML in, version-script symbols out.

use std::io::Write;

use symscript::doxygen::parse_document;
use symscript::{SymbolRegistry, render, scan_document, scan_file};

fn scan(xml: &str) -> SymbolRegistry {
    let mut registry = SymbolRegistry::new();
    scan_xml_into(xml, &mut registry);
    registry
}

fn scan_xml_into(xml: &str, registry: &mut SymbolRegistry) {
    let document = parse_document(xml.as_bytes()).expect("document should parse");
    scan_document(&document, registry).expect("scan should succeed");
}

fn published(registry: &SymbolRegistry) -> Vec<&str> {
    registry.published_symbols().collect()
}

fn suppressed(registry: &SymbolRegistry) -> Vec<&str> {
    registry.suppressed_symbols().collect()
}

#[test]
fn namespace_function_is_published_without_thunk() {
    let registry = scan(
        r#"<doxygen>
          <compounddef kind="namespace">
            <compoundname>ns</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="non-virtual">
              <name>do_it</name>
              <argsstring>()</argsstring>
            </memberdef>
          </compounddef>
        </doxygen>"#,
    );

    assert_eq!(published(&registry), vec!["ns::do_it*"]);
}

#[test]
fn pure_virtual_method_keeps_class_symbols_but_not_its_own() {
    let registry = scan(
        r#"<doxygen>
          <compounddef kind="class" prot="public">
            <compoundname>C</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="pure-virtual">
              <name>m</name>
              <argsstring>()=0</argsstring>
            </memberdef>
            <location file="include/c.h"/>
          </compounddef>
        </doxygen>"#,
    );

    assert_eq!(
        published(&registry),
        vec!["typeinfo?for?C", "vtable?for?C"]
    );
    assert_eq!(suppressed(&registry), vec!["C::m*"]);
}

#[test]
fn virtual_method_publishes_primary_and_thunk() {
    let registry = scan(
        r#"<doxygen>
          <compounddef kind="class" prot="public">
            <compoundname>C</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="virtual">
              <name>m</name>
              <argsstring>()</argsstring>
            </memberdef>
            <location file="include/c.h"/>
          </compounddef>
        </doxygen>"#,
    );

    assert_eq!(
        published(&registry),
        vec![
            "C::m*",
            "non-virtual?thunk?to?C::m*",
            "typeinfo?for?C",
            "vtable?for?C",
        ]
    );
}

#[test]
fn destructor_renders_with_marker() {
    let registry = scan(
        r#"<doxygen>
          <compounddef kind="class" prot="public">
            <compoundname>miral::Window</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="non-virtual">
              <name>~Window</name>
              <argsstring>()</argsstring>
            </memberdef>
            <location file="include/miral/window.h"/>
          </compounddef>
        </doxygen>"#,
    );

    assert!(
        registry
            .published_symbols()
            .any(|s| s == "miral::Window::?Window*")
    );
}

#[test]
fn private_class_still_evaluates_its_static_members() {
    // The enclosing type's vtable/typeinfo are suppressed, yet the public
    // static member is republished on its own. Statics have no vtable
    // dependency; the decision is flagged rather than silently changed.
    let registry = scan(
        r#"<doxygen>
          <compounddef kind="class" prot="private">
            <compoundname>D</compoundname>
            <memberdef kind="variable" prot="public" static="yes">
              <name>instance</name>
            </memberdef>
            <memberdef kind="variable" prot="public" static="no">
              <name>field</name>
            </memberdef>
            <location file="include/d.h"/>
          </compounddef>
        </doxygen>"#,
    );

    assert_eq!(published(&registry), vec!["D::instance*"]);
    assert_eq!(
        suppressed(&registry),
        vec!["D::field*", "typeinfo?for?D", "vtable?for?D"]
    );
}

#[test]
fn group_members_use_bare_names() {
    let registry = scan(
        r#"<doxygen>
          <compounddef kind="group">
            <compoundname>helpers</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="non-virtual">
              <name>free_helper</name>
            </memberdef>
            <memberdef kind="define" prot="public" static="no">
              <name>HELPER_MACRO</name>
            </memberdef>
          </compounddef>
        </doxygen>"#,
    );

    assert_eq!(published(&registry), vec!["free_helper*"]);
    assert_eq!(suppressed(&registry), vec!["HELPER_MACRO*"]);
}

#[test]
fn same_class_in_two_documents_deduplicates() {
    let xml = r#"<doxygen>
      <compounddef kind="class" prot="public">
        <compoundname>C</compoundname>
        <memberdef kind="function" prot="public" static="no" virt="non-virtual">
          <name>f</name>
        </memberdef>
        <location file="include/c.h"/>
      </compounddef>
    </doxygen>"#;

    let mut registry = SymbolRegistry::new();
    scan_xml_into(xml, &mut registry);
    let first = registry.published_len();
    scan_xml_into(xml, &mut registry);

    assert_eq!(registry.published_len(), first);
}

#[test]
fn rendered_output_is_sorted_and_additive() {
    let mut registry = SymbolRegistry::new();
    scan_xml_into(
        r#"<doxygen>
          <compounddef kind="namespace">
            <compoundname>zeta</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="non-virtual">
              <name>last</name>
            </memberdef>
          </compounddef>
          <compounddef kind="namespace">
            <compoundname>alpha</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="non-virtual">
              <name>first</name>
            </memberdef>
          </compounddef>
        </doxygen>"#,
        &mut registry,
    );

    let output = render(&registry);
    let alpha = output.find("    alpha::first*;").expect("alpha missing");
    let zeta = output.find("    zeta::last*;").expect("zeta missing");
    assert!(alpha < zeta);

    // The baseline closes by reopening one stanza; everything between that
    // marker and the trailer is the incremental section.
    let marker = "  extern \"C++\" {\n";
    let baseline_end = output.rfind(marker).expect("baseline missing") + marker.len();
    let trailer_start = output.rfind("  };").expect("trailer missing");
    let incremental = &output[baseline_end..trailer_start];

    // Nothing newly emitted may duplicate a baseline line.
    for line in incremental.lines() {
        assert_eq!(
            output[..baseline_end].matches(line).count(),
            0,
            "line {line:?} duplicates the baseline"
        );
    }
}

#[test]
fn scan_file_reports_malformed_documents_individually() {
    let mut good = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        good,
        r#"<doxygen>
          <compounddef kind="namespace">
            <compoundname>ok</compoundname>
            <memberdef kind="function" prot="public" static="no" virt="non-virtual">
              <name>works</name>
            </memberdef>
          </compounddef>
        </doxygen>"#
    )
    .expect("write");

    let mut bad = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        bad,
        r#"<doxygen>
          <compounddef kind="namespace">
            <compoundname>broken</compoundname>
            <memberdef kind="function" static="no" virt="non-virtual">
              <name>no_prot</name>
            </memberdef>
          </compounddef>
        </doxygen>"#
    )
    .expect("write");

    let mut registry = SymbolRegistry::new();
    assert!(scan_file(bad.path(), &mut registry).is_err());
    assert!(scan_file(good.path(), &mut registry).is_ok());

    // The failed document contributes nothing; the good one still lands.
    assert_eq!(
        registry.published_symbols().collect::<Vec<_>>(),
        vec!["ok::works*"]
    );
}
