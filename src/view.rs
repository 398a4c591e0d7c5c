//! Plain, serializable view trees.
//!
//! A [`Node`] describes what to render without tying it to a rendering
//! runtime. Hosts turn it into HTML ([`crate::render`]), JSON, or mount it in
//! the browser ([`crate::app`]).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value with the same name so
    /// the first-set position is kept.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Void elements (`input`, `br`, ...) must stay childless; the HTML
    /// renderer asserts it.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attr_replaces_in_place() {
        let el = Element::new("input")
            .attr("type", "text")
            .attr("name", "from")
            .attr("type", "search");
        assert_eq!(
            el.attrs,
            vec![
                ("type".to_string(), "search".to_string()),
                ("name".to_string(), "from".to_string()),
            ]
        );
        assert_eq!(el.get_attr("type"), Some("search"));
        assert_eq!(el.get_attr("missing"), None);
    }

    #[test]
    fn text_content_walks_descendants() {
        let node: Node = Element::new("div")
            .child(Node::text("a"))
            .child(Element::new("span").child(Node::text("b")))
            .child(Node::text("c"))
            .into();
        assert_eq!(node.text_content(), "abc");
    }

    #[test]
    fn serializes_as_tagged_tree() {
        let node: Node = Element::new("h2").child(Node::text("hi")).into();
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "element",
                "tag": "h2",
                "children": [{ "kind": "text", "text": "hi" }]
            })
        );
    }

    #[test]
    fn deserializes_with_missing_collections() {
        let node: Node = serde_json::from_value(json!({ "kind": "element", "tag": "hr" })).unwrap();
        assert_eq!(node, Node::Element(Element::new("hr")));
    }
}
