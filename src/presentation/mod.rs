//! Presentation of decoded events
//!
//! Pure transforms from decoded data to host-page markup:
//! - `icons`: event type/subtype to icon, per chain family
//! - `linkify`: rewrite embedded addresses as explorer links
//! - `markup`: the two host tab-widget conventions
//! - `profile`: per-chain bundle of containers, widget, icon set and explorer URL

pub mod icons;
pub mod linkify;
pub mod markup;
pub mod profile;

pub use icons::{classify_event, icon_for, EventIcon, IconId, IconSet};
pub use linkify::{linkify, linkify_with_base, shorten_address};
pub use markup::{FailureStage, TabWidget, ATTRIBUTION_HTML, FETCHING_TEXT};
pub use profile::{ChainPresentationProfile, TabPlacement};
