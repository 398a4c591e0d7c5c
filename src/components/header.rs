use anyhow::Result;

use crate::capability::Capability;
use crate::view::{Element, Node};

/// Site header: a home link carrying the brand name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    brand: String,
}

impl Header {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }
}

impl Capability for Header {
    fn render(&self) -> Result<Node> {
        Ok(Element::new("header")
            .class("header")
            .child(
                Element::new("a")
                    .class("header_brand")
                    .attr("href", "/")
                    .child(Node::text(self.brand.as_str())),
            )
            .into())
    }
}
