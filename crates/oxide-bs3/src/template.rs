//! The `include_bs3` template tag.

use std::sync::Arc;

use ironhtml::typed::Element;
use ironhtml_elements::{Link, Script};
use oxide_app::TemplateTag;
use oxide_forms::Node;

use crate::assets::ASSETS;
use crate::config::Bs3Config;

/// Font Awesome stylesheet providing the default icon classes.
pub const FONT_AWESOME_URL: &str =
    "//maxcdn.bootstrapcdn.com/font-awesome/4.4.0/css/font-awesome.min.css";

/// Emits `<script>`/`<link>` tags for the bundled assets.
#[derive(Debug, Clone)]
pub struct Bs3Tag {
    config: Arc<Bs3Config>,
    assets: Vec<String>,
}

impl Bs3Tag {
    /// Creates the tag for the bundled asset list.
    pub fn new(config: Arc<Bs3Config>) -> Self {
        Self::with_assets(config, ASSETS.iter().copied())
    }

    /// Creates the tag for a custom asset list.
    pub fn with_assets<I, S>(config: Arc<Bs3Config>, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config,
            assets: assets.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the nodes the tag expands to.
    pub fn nodes(&self) -> Vec<Node> {
        let mut top = Vec::new();
        self.process(&mut top);
        top
    }

    fn asset_node(&self, asset: &str) -> Node {
        let url = self.config.static_url(asset);
        let markup = if asset.rsplit('.').next() == Some("js") {
            Element::<Script>::new()
                .attr("type", "text/javascript")
                .attr("src", &url)
                .render()
        } else {
            Element::<Link>::new()
                .attr("rel", "stylesheet")
                .attr("href", &url)
                .attr("type", "text/css")
                .render()
        };
        Node::raw(markup)
    }
}

impl TemplateTag for Bs3Tag {
    fn process(&self, top: &mut Vec<Node>) {
        for asset in &self.assets {
            top.push(self.asset_node(asset));
        }
        let font_awesome = Element::<Link>::new()
            .attr("href", FONT_AWESOME_URL)
            .attr("rel", "stylesheet")
            .render();
        top.push(Node::raw(font_awesome));
    }
}
