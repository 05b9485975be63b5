//! Event iconography
//!
//! `icon_for` is total: every `(event_type, event_subtype)` pair maps to an
//! icon, with anything unrecognised falling through to the info icon.

use crate::types::{ChainFamily, DecodedEvent};

/// What an icon means, independent of visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventIcon {
    GasFee,
    Outbound,
    Inbound,
    Transfer,
    Info,
}

/// Font Awesome style family used by a host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSet {
    Ethereum,
    OptimismPolygon,
}

impl IconSet {
    pub fn for_family(family: ChainFamily) -> Self {
        match family {
            ChainFamily::Ethereum => IconSet::Ethereum,
            ChainFamily::OptimismOrPolygon => IconSet::OptimismPolygon,
        }
    }
}

/// An icon in a specific icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId {
    pub icon: EventIcon,
    pub set: IconSet,
}

impl IconId {
    pub fn css_class(&self) -> &'static str {
        match (self.set, self.icon) {
            (IconSet::Ethereum, EventIcon::GasFee) => "fa-solid fa-gas-pump",
            (IconSet::Ethereum, EventIcon::Outbound) => "fas fa-inbox-out",
            (IconSet::Ethereum, EventIcon::Inbound) => "fa-solid fa-inbox-in",
            (IconSet::Ethereum, EventIcon::Transfer) => "fa-sharp fa-regular fa-money-bill-transfer",
            (IconSet::Ethereum, EventIcon::Info) => "fa-solid fa-circle-info",
            (IconSet::OptimismPolygon, EventIcon::GasFee) => "fas fa-gas-pump",
            (IconSet::OptimismPolygon, EventIcon::Outbound) => "fas fa-inbox-out",
            (IconSet::OptimismPolygon, EventIcon::Inbound) => "fas fa-inbox-in",
            (IconSet::OptimismPolygon, EventIcon::Transfer) => "fas fa-exchange",
            (IconSet::OptimismPolygon, EventIcon::Info) => "fas fa-info-circle",
        }
    }

    pub fn to_html(&self) -> String {
        format!("<i class=\"{}\"></i>", self.css_class())
    }
}

/// First matching rule wins
pub fn classify_event(event_type: &str, event_subtype: Option<&str>) -> EventIcon {
    match (event_type, event_subtype) {
        ("spend", Some("fee")) => EventIcon::GasFee,
        ("spend", _) => EventIcon::Outbound,
        ("receive", _) => EventIcon::Inbound,
        ("transfer", _) => EventIcon::Transfer,
        ("deposit", _) => EventIcon::Inbound,
        ("withdrawal", _) => EventIcon::Outbound,
        _ => EventIcon::Info,
    }
}

pub fn icon_for(event_type: &str, event_subtype: Option<&str>, family: ChainFamily) -> IconId {
    IconId {
        icon: classify_event(event_type, event_subtype),
        set: IconSet::for_family(family),
    }
}

impl DecodedEvent {
    pub fn icon(&self, family: ChainFamily) -> IconId {
        icon_for(&self.event_type, self.event_subtype.as_deref(), family)
    }
}
