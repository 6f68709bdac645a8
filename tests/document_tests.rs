//! Round-trip tests over full documents
//!
//! One fixture document in its indented and flat spellings, plus the tree
//! both must parse to; the tests cross every parse/print mode combination
//! and the rejection cases.

use xmlcodec::{from_bytes, from_str, to_xml, Attributes, Document, Element, ErrorKind, Mode, Node};

const INDENTED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<catalog region="eu" xmlns="http://example.org/catalog">
    <shelf label="databases">
        <item sku="pg" stock="12"/>
        <item sku="redis" stock="3"/>
        <!--restock pending-->
    </shelf>
    <shelf label="tools">
        <item sku="wrench" stock="7"/>
        <note>
            inspected weekly
        </note>
    </shelf>
</catalog>"#;

const FLAT: &str = r#"<?xml version="1.0" encoding="utf-8"?><catalog region="eu" xmlns="http://example.org/catalog"><shelf label="databases"><item sku="pg" stock="12"/><item sku="redis" stock="3"/><!--restock pending--></shelf><shelf label="tools"><item sku="wrench" stock="7"/><note>inspected weekly</note></shelf></catalog>"#;

fn item(sku: &str, stock: &str) -> Node {
    Node::Element(
        Element::new("item")
            .with_attribute("sku", sku)
            .with_attribute("stock", stock),
    )
}

fn structure() -> Document {
    Document::with_prolog(
        Attributes::from([("version", "1.0"), ("encoding", "utf-8")]),
        Element::new("catalog")
            .with_attribute("region", "eu")
            .with_attribute("xmlns", "http://example.org/catalog")
            .with_child(Node::Element(
                Element::new("shelf")
                    .with_attribute("label", "databases")
                    .with_child(item("pg", "12"))
                    .with_child(item("redis", "3"))
                    .with_child(Node::Comment("restock pending".to_string())),
            ))
            .with_child(Node::Element(
                Element::new("shelf")
                    .with_attribute("label", "tools")
                    .with_child(item("wrench", "7"))
                    .with_child(Node::Element(
                        Element::new("note")
                            .with_child(Node::Text("inspected weekly".to_string())),
                    )),
            )),
    )
}

#[test]
fn indented_source_parses_to_structure() {
    assert_eq!(from_str(INDENTED).unwrap(), structure());
}

#[test]
fn flat_source_parses_to_structure() {
    assert_eq!(from_str(FLAT).unwrap(), structure());
}

#[test]
fn pretty_print_reproduces_indented_source() {
    let doc = from_str(INDENTED).unwrap();
    assert_eq!(to_xml(&doc, Mode::Pretty).unwrap(), INDENTED);
}

#[test]
fn compact_print_reproduces_flat_source() {
    let doc = from_str(FLAT).unwrap();
    assert_eq!(to_xml(&doc, Mode::Compact).unwrap(), FLAT);
}

#[test]
fn cross_mode_reformatting() {
    let from_flat = from_str(FLAT).unwrap();
    let from_indented = from_str(INDENTED).unwrap();
    assert_eq!(to_xml(&from_flat, Mode::Pretty).unwrap(), INDENTED);
    assert_eq!(to_xml(&from_indented, Mode::Compact).unwrap(), FLAT);
}

#[test]
fn compact_output_is_a_single_line() {
    let doc = from_str(INDENTED).unwrap();
    let text = to_xml(&doc, Mode::Compact).unwrap();
    assert!(!text.contains('\n'));
    assert!(!text.contains("  "));
}

#[test]
fn printed_tree_parses_back_in_both_modes() {
    let doc = structure();
    for mode in [Mode::Compact, Mode::Pretty] {
        let text = to_xml(&doc, mode).unwrap();
        assert_eq!(from_str(&text).unwrap(), doc);
    }
}

#[test]
fn mismatched_tags_are_rejected() {
    let err = from_str("<a></b>").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MismatchedTag {
            open: "a".to_string(),
            close: "b".to_string(),
        }
    );
}

#[test]
fn empty_element_spellings_are_equivalent() {
    let without_space = from_str("<r><xmlTag header1=\"none\"/></r>").unwrap();
    let with_space = from_str("<r><xmlTag header1=\"none\" /></r>").unwrap();
    assert_eq!(without_space, with_space);

    let expected = Document::new(Element::new("r").with_child(Node::Element(
        Element::new("xmlTag").with_attribute("header1", "none"),
    )));
    assert_eq!(without_space, expected);

    // The canonical compact spelling has no space before the slash.
    assert_eq!(
        to_xml(&with_space, Mode::Compact).unwrap(),
        "<r><xmlTag header1=\"none\"/></r>"
    );
}

#[test]
fn comment_content_is_preserved_literally() {
    let text = "<r><!--a<b--></r>";
    let doc = from_str(text).unwrap();
    assert_eq!(doc.root.children, [Node::Comment("a<b".to_string())]);
    assert_eq!(to_xml(&doc, Mode::Compact).unwrap(), text);
}

#[test]
fn attribute_order_is_never_sorted() {
    let text = "<r z=\"1\" a=\"2\" m=\"3\"></r>";
    let doc = from_str(text).unwrap();
    let keys: Vec<&String> = doc.root.attributes.keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(to_xml(&doc, Mode::Compact).unwrap(), text);
}

#[test]
fn duplicate_attribute_keys_fold_last_wins() {
    let doc = from_str("<r k=\"1\" other=\"x\" k=\"2\"></r>").unwrap();
    assert_eq!(doc.root.attributes.len(), 2);
    assert_eq!(doc.root.attributes.get("k"), Some("2"));
    let keys: Vec<&String> = doc.root.attributes.keys().collect();
    assert_eq!(keys, ["k", "other"]);
}

#[test]
fn missing_prolog_yields_empty_attributes() {
    let doc = from_str("<root></root>").unwrap();
    assert!(doc.prolog.is_empty());
}

#[test]
fn self_closing_root_is_rejected() {
    assert!(from_str("<a/>").is_err());
}

#[test]
fn bare_text_is_rejected() {
    assert!(from_str("just text").is_err());
}

#[test]
fn trailing_input_is_rejected() {
    let err = from_str("<a></a> ").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TrailingInput);
}

#[test]
fn byte_input_parses_after_utf8_validation() {
    let doc = from_bytes(FLAT.as_bytes()).unwrap();
    assert_eq!(doc, structure());
    assert_eq!(
        from_bytes(&[0x3c, 0xff]).unwrap_err().kind(),
        &ErrorKind::InvalidUtf8
    );
}
