use anyhow::{Result, bail};

use crate::capability::Capability;
use crate::transport::TransportMode;
use crate::view::{Element, Node};

/// Search entry point: origin and destination fields plus one checkbox per
/// offered transport mode, all checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContainer {
    modes: Vec<TransportMode>,
}

impl SearchContainer {
    pub fn new(modes: impl Into<Vec<TransportMode>>) -> Self {
        Self {
            modes: modes.into(),
        }
    }
}

impl Default for SearchContainer {
    fn default() -> Self {
        Self::new(TransportMode::ALL)
    }
}

impl Capability for SearchContainer {
    fn render(&self) -> Result<Node> {
        if self.modes.is_empty() {
            bail!("search container needs at least one transport mode");
        }

        let form = Element::new("form")
            .class("search-form")
            .attr("method", "get")
            .attr("role", "search")
            .child(place_input("from", "Départ"))
            .child(place_input("to", "Arrivée"))
            .child(
                Element::new("fieldset")
                    .class("search-form_modes")
                    .children(self.modes.iter().copied().map(mode_checkbox)),
            )
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .child(Node::text("Rechercher")),
            );

        Ok(Element::new("section")
            .class("search-container")
            .child(form)
            .into())
    }
}

fn place_input(name: &str, placeholder: &str) -> Element {
    Element::new("input")
        .attr("type", "text")
        .attr("name", name)
        .attr("placeholder", placeholder)
}

fn mode_checkbox(mode: TransportMode) -> Element {
    Element::new("label")
        .child(
            Element::new("input")
                .attr("type", "checkbox")
                .attr("name", "mode")
                .attr("value", mode.key())
                .attr("checked", "checked"),
        )
        .child(Node::text(mode.label()))
}
