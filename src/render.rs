//! HTML serialization of view trees.
//!
//! Tag and attribute names are written verbatim and must be plain markup
//! names (see [`is_markup_name`]); trees here are built from constants, and
//! debug builds assert it. Void elements must not carry children.

use crate::view::{Element, Node};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Full HTML5 page around `body`.
pub fn document(title: &str, body: &Node) -> String {
    let mut out = String::from(
        "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\" />\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" /><title>",
    );
    escape_into(&mut out, title);
    out.push_str("</title></head><body>");
    write_node(&mut out, body);
    out.push_str("</body></html>");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { text } => escape_into(out, text),
        Node::Element(el) => write_element(out, el),
    }
}

/// ASCII letter followed by ASCII alphanumerics, `-`, `_` or `:`.
pub fn is_markup_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

fn write_element(out: &mut String, el: &Element) {
    debug_assert!(is_markup_name(&el.tag), "invalid tag name {:?}", el.tag);
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        debug_assert!(is_markup_name(name), "invalid attribute name {name:?}");
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(out, value);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        debug_assert!(
            el.children.is_empty(),
            "void element <{}> has children",
            el.tag
        );
        return;
    }

    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape_into(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_and_attrs_in_order() {
        let node: Node = Element::new("div")
            .class("outer")
            .attr("id", "x")
            .child(Element::new("h2").child(Node::text("Titre")))
            .into();
        assert_eq!(
            to_html(&node),
            r#"<div class="outer" id="x"><h2>Titre</h2></div>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node: Node = Element::new("a")
            .attr("title", r#"say "hi" & <go>"#)
            .child(Node::text("1 < 2 & 3 > 2"))
            .into();
        assert_eq!(
            to_html(&node),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;">1 &lt; 2 &amp; 3 &gt; 2</a>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: Node = Element::new("form")
            .child(Element::new("input").attr("name", "from"))
            .child(Element::new("br"))
            .into();
        assert_eq!(to_html(&node), r#"<form><input name="from"><br></form>"#);
    }

    #[test]
    fn markup_names() {
        for ok in ["div", "h2", "aria-label", "data_x", "xml:lang"] {
            assert!(is_markup_name(ok), "{ok}");
        }
        for bad in ["", "2col", "a\"b", "a>b", "on click", "é"] {
            assert!(!is_markup_name(bad), "{bad}");
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "void element <input> has children")]
    fn void_element_with_children_is_rejected() {
        to_html(&Element::new("input").child(Node::text("x")).into());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid attribute name")]
    fn quoted_attribute_name_is_rejected() {
        to_html(&Element::new("a").attr("x\"onclick", "y").into());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid tag name")]
    fn broken_tag_name_is_rejected() {
        to_html(&Element::new("div><script").into());
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(to_html(&Node::text("Arrivée")), "Arrivée");
    }

    #[test]
    fn document_wraps_body() {
        let html = document("A&B", &Element::new("main").into());
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"fr\">"));
        assert!(html.contains("<title>A&amp;B</title>"));
        assert!(html.ends_with("<body><main></main></body></html>"));
    }
}
