//! Host page model
//!
//! The panel only ever touches two pre-existing containers on the explorer page:
//! the tab list and the tab-content list. [`HostPage`] is that narrow surface;
//! [`HostDocument`] is an in-memory implementation that records every mutation.

use crate::errors::{PageError, PageResult};
use crate::presentation::{ChainPresentationProfile, TabPlacement};

/// A single HTML element with opaque attributes and inner markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: String,
    pub inner_html: String,
}

impl Element {
    pub fn new(tag: &str, attributes: &str, inner_html: impl Into<String>) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: attributes.to_string(),
            inner_html: inner_html.into(),
        }
    }

    pub fn to_html(&self) -> String {
        if self.attributes.is_empty() {
            format!("<{}>{}</{}>", self.tag, self.inner_html, self.tag)
        } else {
            format!(
                "<{} {}>{}</{}>",
                self.tag, self.attributes, self.inner_html, self.tag
            )
        }
    }
}

/// Reference to a panel previously appended to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelHandle {
    pub container: String,
    node_id: usize,
}

/// DOM operations the panel renderer needs from the host page
pub trait HostPage {
    fn has_container(&self, selector: &str) -> bool;

    fn insert_tab(
        &mut self,
        selector: &str,
        placement: TabPlacement,
        tab: Element,
    ) -> PageResult<()>;

    fn append_panel(&mut self, selector: &str, panel: Element) -> PageResult<PanelHandle>;

    /// Replace the panel's inner markup, leaving the panel element itself in place
    fn set_panel_content(&mut self, handle: &PanelHandle, inner_html: String) -> PageResult<()>;
}

#[derive(Debug, Clone)]
struct Node {
    id: usize,
    element: Element,
}

#[derive(Debug, Clone)]
struct Container {
    selector: String,
    children: Vec<Node>,
}

impl Container {
    /// `ul#nav_tabs` -> (`ul`, `nav_tabs`)
    fn tag_and_id(&self) -> (&str, &str) {
        match self.selector.split_once('#') {
            Some((tag, id)) if !tag.is_empty() => (tag, id),
            Some((_, id)) => ("div", id),
            None => ("div", self.selector.as_str()),
        }
    }
}

/// In-memory explorer page
#[derive(Debug, Clone, Default)]
pub struct HostDocument {
    containers: Vec<Container>,
    next_id: usize,
    mutations: usize,
}

impl HostDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skeleton of an explorer transaction page for the given profile
    pub fn for_profile(profile: &ChainPresentationProfile) -> Self {
        let mut document = Self::new();
        document.add_container(
            profile.tab_container,
            vec![
                Element::new(
                    "li",
                    "class=\"nav-item\"",
                    "<a class=\"nav-link active\" href=\"#home\">Overview</a>",
                ),
                Element::new(
                    "li",
                    "class=\"nav-item\"",
                    "<a class=\"nav-link\" href=\"#eventlog\">Logs</a>",
                ),
            ],
        );
        document.add_container(
            profile.panel_container,
            vec![Element::new(
                "div",
                "class=\"tab-pane fade show active\" id=\"home\"",
                "",
            )],
        );
        document
    }

    /// Register a pre-existing container. Does not count as a mutation.
    pub fn add_container(&mut self, selector: &str, children: Vec<Element>) {
        let children = children
            .into_iter()
            .map(|element| self.node(element))
            .collect();
        self.containers.push(Container {
            selector: selector.to_string(),
            children,
        });
    }

    /// Number of changes made through [`HostPage`]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    pub fn children(&self, selector: &str) -> Option<Vec<&Element>> {
        self.find(selector)
            .map(|c| c.children.iter().map(|n| &n.element).collect())
    }

    pub fn panel(&self, handle: &PanelHandle) -> Option<&Element> {
        self.find(&handle.container)?
            .children
            .iter()
            .find(|n| n.id == handle.node_id)
            .map(|n| &n.element)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for container in &self.containers {
            let (tag, id) = container.tag_and_id();
            html.push_str(&format!("<{} id=\"{}\">\n", tag, id));
            for node in &container.children {
                html.push_str("  ");
                html.push_str(&node.element.to_html());
                html.push('\n');
            }
            html.push_str(&format!("</{}>\n", tag));
        }
        html
    }

    fn node(&mut self, element: Element) -> Node {
        let id = self.next_id;
        self.next_id += 1;
        Node { id, element }
    }

    fn find(&self, selector: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.selector == selector)
    }

    fn find_mut(&mut self, selector: &str) -> PageResult<&mut Container> {
        self.containers
            .iter_mut()
            .find(|c| c.selector == selector)
            .ok_or_else(|| PageError::ContainerMissing {
                selector: selector.to_string(),
            })
    }
}

impl HostPage for HostDocument {
    fn has_container(&self, selector: &str) -> bool {
        self.find(selector).is_some()
    }

    fn insert_tab(
        &mut self,
        selector: &str,
        placement: TabPlacement,
        tab: Element,
    ) -> PageResult<()> {
        let node = self.node(tab);
        let container = self.find_mut(selector)?;
        let index = match placement {
            TabPlacement::BeforeLast => container.children.len().saturating_sub(1),
            TabPlacement::Append => container.children.len(),
        };
        container.children.insert(index, node);
        self.mutations += 1;
        Ok(())
    }

    fn append_panel(&mut self, selector: &str, panel: Element) -> PageResult<PanelHandle> {
        let node = self.node(panel);
        let node_id = node.id;
        self.find_mut(selector)?.children.push(node);
        self.mutations += 1;
        Ok(PanelHandle {
            container: selector.to_string(),
            node_id,
        })
    }

    fn set_panel_content(&mut self, handle: &PanelHandle, inner_html: String) -> PageResult<()> {
        let node = self
            .find_mut(&handle.container)?
            .children
            .iter_mut()
            .find(|n| n.id == handle.node_id)
            .ok_or_else(|| PageError::UnknownPanel {
                selector: handle.container.clone(),
            })?;
        node.element.inner_html = inner_html;
        self.mutations += 1;
        Ok(())
    }
}
