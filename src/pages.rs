use anyhow::Result;

use crate::capability::Capability;
use crate::components::{Header, SearchContainer};
use crate::config::SiteConfig;
use crate::view::{Element, Node};

/// Landing-page heading. Kept literal: the site has no locale switching.
pub const HOME_TITLE: &str = "Faites le meilleur choix.";

pub type DefaultHomeView = HomeView<Header, SearchContainer>;

/// Landing page: header, static title, search entry point, always in that
/// order.
#[derive(Debug, Clone)]
pub struct HomeView<H, S> {
    header: H,
    search: S,
}

/// The three regions of the landing page, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeRegions {
    pub header: Node,
    pub title_block: Node,
    pub search_region: Node,
}

impl HomeRegions {
    pub fn into_node(self) -> Node {
        Element::new("main")
            .class("main-home")
            .child(self.header)
            .child(self.title_block)
            .child(self.search_region)
            .into()
    }
}

impl<H, S> HomeView<H, S>
where
    H: Capability,
    S: Capability,
{
    pub fn new(header: H, search: S) -> Self {
        Self { header, search }
    }

    /// Invokes the header then the search capability, once each. The first
    /// failure is returned as is and nothing after it runs.
    pub fn regions(&self) -> Result<HomeRegions> {
        let header = self.header.render()?;
        let title_block = title_block();
        let search_region = self.search.render()?;
        Ok(HomeRegions {
            header,
            title_block,
            search_region,
        })
    }
}

impl<H, S> Capability for HomeView<H, S>
where
    H: Capability,
    S: Capability,
{
    fn render(&self) -> Result<Node> {
        Ok(self.regions()?.into_node())
    }
}

impl DefaultHomeView {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            Header::new(config.brand.as_str()),
            SearchContainer::new(config.transport_modes.clone()),
        )
    }
}

pub fn title_block() -> Node {
    Element::new("div")
        .class("main-home_title")
        .child(Element::new("h2").child(Node::text(HOME_TITLE)))
        .into()
}
