//! Decoded-events panel
//!
//! - `state`: the panel state machine (`NotStarted -> Loading -> Populated | Errored`)
//! - `pipeline`: resolve the page, open the panel, run both remote calls, finish the panel

pub mod pipeline;
pub mod state;

pub use pipeline::{render_transaction, run_pipeline, PipelineOutcome};
pub use state::{Panel, PanelState};
