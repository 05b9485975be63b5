use crate::presentation::{classify_event, linkify_with_base, IconId, IconSet, TabWidget};
use crate::types::{Chain, ChainFamily, DecodedEvent};

/// Where the tab header goes relative to the existing tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPlacement {
    BeforeLast,
    Append,
}

/// Everything the panel renderer needs to know about a host explorer page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPresentationProfile {
    pub chain: Chain,
    pub tab_container: &'static str,
    pub tab_placement: TabPlacement,
    pub panel_container: &'static str,
    pub widget: TabWidget,
    pub icon_set: IconSet,
    pub address_base_url: String,
}

impl ChainPresentationProfile {
    pub fn for_chain(chain: Chain) -> Self {
        let address_base_url = chain.address_base_url();
        match chain.family() {
            ChainFamily::Ethereum => Self {
                chain,
                tab_container: "ul#ContentPlaceHolder1_myTab",
                tab_placement: TabPlacement::BeforeLast,
                panel_container: "div#pills-tabContent",
                widget: TabWidget::Pills,
                icon_set: IconSet::Ethereum,
                address_base_url,
            },
            ChainFamily::OptimismOrPolygon => Self {
                chain,
                tab_container: "ul#nav_tabs",
                tab_placement: TabPlacement::Append,
                panel_container: "div#myTabContent",
                widget: TabWidget::Tabs,
                icon_set: IconSet::OptimismPolygon,
                address_base_url,
            },
        }
    }

    /// Icon from this profile's icon set plus linkified notes for one event
    pub fn render_event(&self, event: &DecodedEvent) -> String {
        let icon = IconId {
            icon: classify_event(&event.event_type, event.event_subtype.as_deref()),
            set: self.icon_set,
        };
        let notes = linkify_with_base(&event.notes, &self.address_base_url);
        self.widget.event_block(icon, &notes)
    }

    /// Full panel body for a non-empty event list, in input order
    pub fn render_events(&self, events: &[DecodedEvent]) -> String {
        let blocks: Vec<String> = events.iter().map(|e| self.render_event(e)).collect();
        self.widget.populated_body(&blocks)
    }
}
