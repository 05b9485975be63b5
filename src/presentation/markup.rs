//! Host tab-widget markup
//!
//! Etherscan renders its transaction tabs as Bootstrap 5 pills; the Optimism and
//! Polygon explorers still use Bootstrap 4 tabs. The panel content is identical
//! in meaning across both, only the markup differs.

use crate::page::Element;
use crate::presentation::IconId;

pub const FETCHING_TEXT: &str = "Fetching data...";

pub const ATTRIBUTION_HTML: &str = "Transaction Receipt Event Logs decoded using <a href=\"https://rotki.com\" target=\"_blank\">rotki</a>";

const TAB_LABEL: &str = "Decoded Events";

/// Which remote call the panel gave up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Addresses,
    DecodedEvents,
}

impl FailureStage {
    pub fn message(&self) -> &'static str {
        match self {
            FailureStage::Addresses => "An error occurred while attempting to retrieve transaction addresses. Check console for more errors.",
            FailureStage::DecodedEvents => "An error occurred while attempting to retrieve decoded events. Check console for more errors.",
        }
    }
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureStage::Addresses => write!(f, "addresses"),
            FailureStage::DecodedEvents => write!(f, "decoded events"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabWidget {
    /// Bootstrap 5 pills (etherscan.io)
    Pills,
    /// Bootstrap 4 tabs (optimistic.etherscan.io, polygonscan.com)
    Tabs,
}

impl TabWidget {
    pub fn tab_header(&self) -> Element {
        match self {
            TabWidget::Pills => Element::new(
                "li",
                "id=\"ContentPlaceHolder1_li_decodedevents\" class=\"nav-item snap-align-start\" role=\"presentation\"",
                format!(
                    "<a class=\"nav-link\" href=\"#decodedevents\" data-bs-toggle=\"pill\" data-bs-target=\"#decodedevents-tab-content\" aria-controls=\"decodedevents-tab-content\" aria-selected=\"false\" role=\"tab\" tabIndex=\"-1\" onclick=\"javascript:updatehash('decodedevents');\">{}</a>",
                    TAB_LABEL
                ),
            ),
            TabWidget::Tabs => Element::new(
                "li",
                "id=\"ContentPlaceHolder1_li_decodedevents\" class=\"nav-item\"",
                format!(
                    "<a class=\"nav-link\" id=\"decodedevents-tab\" data-toggle=\"tab\" href=\"#decodedevents\" aria-controls=\"decodedevents\" aria-selected=\"false\" onclick=\"javascript:updatehash('decodedevents');\">{}</a>",
                    TAB_LABEL
                ),
            ),
        }
    }

    /// Content pane holding the loading placeholder
    pub fn loading_panel(&self) -> Element {
        match self {
            TabWidget::Pills => Element::new(
                "div",
                "class=\"tab-pane fade\" id=\"decodedevents-tab-content\" tabIndex=\"0\" role=\"tabpanel\" aria-labelledby=\"tab-8\"",
                self.loading_body(),
            ),
            TabWidget::Tabs => Element::new(
                "div",
                "class=\"tab-pane fade\" id=\"decodedevents\" role=\"tabpanel\" aria-labelledby=\"decodedevents-tab\"",
                self.loading_body(),
            ),
        }
    }

    pub fn loading_body(&self) -> String {
        match self {
            TabWidget::Pills => format!("<div class=\"card p-5\">{}</div>", FETCHING_TEXT),
            TabWidget::Tabs => format!("<div class=\"card-body\">{}</div>", FETCHING_TEXT),
        }
    }

    pub fn error_body(&self, stage: FailureStage) -> String {
        match self {
            TabWidget::Pills => format!(
                "<div class=\"card pt-5\"><p class=\"text-danger\" style=\"padding-left:20px\"><i class=\"fa-solid fa-triangle-exclamation\" style=\"padding-right:8px\"></i><span>{}</span></p></div>",
                stage.message()
            ),
            TabWidget::Tabs => format!(
                "<div class=\"card-body\"><h6 class=\"text-danger\" style=\"padding-left:10px\"><i class=\"fas fa-exclamation-triangle\" style=\"padding-right:7px\"></i><span>{}</span></h6></div>",
                stage.message()
            ),
        }
    }

    /// One event row: icon followed by already-linkified notes
    pub fn event_block(&self, icon: IconId, notes_html: &str) -> String {
        let class = match self {
            TabWidget::Pills => "d-flex bg-light rounded border mb-3 mx-3 gap-2 p-3 align-items-baseline",
            TabWidget::Tabs => "bg-light rounded border mb-3 p-3",
        };
        format!("<div class=\"{}\">{} {}</div>", class, icon.to_html(), notes_html)
    }

    pub fn populated_body(&self, blocks: &[String]) -> String {
        let rows = blocks.join("\n");
        match self {
            TabWidget::Pills => format!(
                "<div class=\"card pt-5\"><h6 style=\"padding-left:20px;margin-bottom:0\">{}</h6><hr>{}</div>",
                ATTRIBUTION_HTML, rows
            ),
            TabWidget::Tabs => format!(
                "<div class=\"card-body\"><p class=\"font-weight-bold text-body\" style=\"margin-bottom:0;padding-bottom:0\">{}</p><hr>{}</div>",
                ATTRIBUTION_HTML, rows
            ),
        }
    }
}
