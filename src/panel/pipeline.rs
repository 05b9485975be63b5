use crate::client::DecodingService;
use crate::context::PageLocation;
use crate::errors::PageResult;
use crate::page::HostPage;
use crate::panel::Panel;
use crate::presentation::{ChainPresentationProfile, FailureStage};
use crate::types::TransactionContext;
use tracing::{debug, info};

/// How a page load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Host is not a supported explorer; nothing was touched
    NotApplicable,
    Populated { event_count: usize },
    Errored(FailureStage),
}

/// Entry point for one page load
pub async fn run_pipeline<S, P>(
    location: &PageLocation,
    service: &S,
    page: &mut P,
) -> PageResult<PipelineOutcome>
where
    S: DecodingService + ?Sized,
    P: HostPage + ?Sized,
{
    match location.resolve() {
        Some(context) => render_transaction(&context, service, page).await,
        None => {
            debug!("{} is not a supported explorer, skipping", location.hostname);
            Ok(PipelineOutcome::NotApplicable)
        }
    }
}

/// Open the panel, then await the address lookup and the decode call in turn.
///
/// The panel is injected before the first network call. A failed address
/// lookup ends the run without calling decode, and an empty decode result is
/// rendered as an error.
pub async fn render_transaction<S, P>(
    context: &TransactionContext,
    service: &S,
    page: &mut P,
) -> PageResult<PipelineOutcome>
where
    S: DecodingService + ?Sized,
    P: HostPage + ?Sized,
{
    info!(
        "Injecting decoded events for {} on {}",
        context.transaction_hash, context.chain
    );
    let mut panel = Panel::new(ChainPresentationProfile::for_chain(context.chain));
    panel.open(page)?;

    let addresses = match service.fetch_addresses(context).await {
        Some(addresses) => addresses,
        None => {
            panel.show_error(page, FailureStage::Addresses)?;
            return Ok(PipelineOutcome::Errored(FailureStage::Addresses));
        }
    };

    let events = match service.fetch_decoded_events(context, &addresses).await {
        Some(events) if !events.is_empty() => events,
        _ => {
            panel.show_error(page, FailureStage::DecodedEvents)?;
            return Ok(PipelineOutcome::Errored(FailureStage::DecodedEvents));
        }
    };

    panel.show_events(page, &events)?;
    Ok(PipelineOutcome::Populated {
        event_count: events.len(),
    })
}
