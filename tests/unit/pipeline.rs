use crate::common::{
    fee_and_transfer_events, new_log, LoggingPage, RecordingService, RECEIVER, SENDER, TX_HASH,
};
use decodify::context::PageLocation;
use decodify::page::HostDocument;
use decodify::panel::{run_pipeline, PipelineOutcome};
use decodify::presentation::{ChainPresentationProfile, FailureStage, ATTRIBUTION_HTML};
use decodify::types::{Chain, DecodedEvent};

/// Tests for the page-load pipeline: resolve, open panel, fetch, finish
///
/// These use a canned decoding service and an in-memory host page.

fn document_for(chain: Chain) -> HostDocument {
    HostDocument::for_profile(&ChainPresentationProfile::for_chain(chain))
}

fn tx_location(host: &str) -> PageLocation {
    PageLocation::new(host, format!("/tx/{}", TX_HASH))
}

/// Inner markup of the injected pane (always the last child of the content container)
fn panel_body(document: &HostDocument, chain: Chain) -> String {
    let profile = ChainPresentationProfile::for_chain(chain);
    document
        .children(profile.panel_container)
        .unwrap()
        .last()
        .unwrap()
        .inner_html
        .clone()
}

#[tokio::test]
async fn test_unsupported_host_is_a_silent_no_op() {
    for host in ["arbiscan.io", "bscscan.com", "www.etherscan.io", "localhost"] {
        let service = RecordingService::new(Some(vec![SENDER]), Some(fee_and_transfer_events()));
        let mut document = document_for(Chain::Ethereum);

        let outcome = run_pipeline(&tx_location(host), &service, &mut document)
            .await
            .unwrap();

        assert_eq!(outcome, PipelineOutcome::NotApplicable);
        assert_eq!(document.mutation_count(), 0);
        assert_eq!(service.address_calls(), 0);
        assert_eq!(service.decode_calls(), 0);
    }
}

#[tokio::test]
async fn test_address_failure_skips_decode() {
    let service = RecordingService::new(None, Some(fee_and_transfer_events()));
    let mut document = document_for(Chain::Ethereum);

    let outcome = run_pipeline(&tx_location("etherscan.io"), &service, &mut document)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Errored(FailureStage::Addresses));
    assert_eq!(service.address_calls(), 1);
    assert_eq!(service.decode_calls(), 0);

    let body = panel_body(&document, Chain::Ethereum);
    assert!(body.contains(FailureStage::Addresses.message()));
    assert!(body.contains("fa-triangle-exclamation"));
}

#[tokio::test]
async fn test_empty_address_set_skips_decode() {
    let service = RecordingService::new(Some(vec![]), Some(fee_and_transfer_events()));
    let mut document = document_for(Chain::Optimism);

    let outcome = run_pipeline(
        &tx_location("optimistic.etherscan.io"),
        &service,
        &mut document,
    )
    .await
    .unwrap();

    assert_eq!(outcome, PipelineOutcome::Errored(FailureStage::Addresses));
    assert_eq!(service.decode_calls(), 0);
}

#[tokio::test]
async fn test_decode_failure_renders_error() {
    let service = RecordingService::new(Some(vec![SENDER]), None);
    let mut document = document_for(Chain::PolygonPos);

    let outcome = run_pipeline(&tx_location("polygonscan.com"), &service, &mut document)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Errored(FailureStage::DecodedEvents));
    let body = panel_body(&document, Chain::PolygonPos);
    assert!(body.contains(FailureStage::DecodedEvents.message()));
    assert!(body.contains("fa-exclamation-triangle"));
}

#[tokio::test]
async fn test_empty_decode_result_is_an_error() {
    let service = RecordingService::new(Some(vec![SENDER]), Some(vec![]));
    let mut document = document_for(Chain::Ethereum);

    let outcome = run_pipeline(&tx_location("etherscan.io"), &service, &mut document)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Errored(FailureStage::DecodedEvents));
    assert_eq!(service.decode_calls(), 1);
    let body = panel_body(&document, Chain::Ethereum);
    assert!(!body.contains(ATTRIBUTION_HTML));
}

#[tokio::test]
async fn test_populated_panel_preserves_event_order() {
    let service = RecordingService::new(Some(vec![SENDER, RECEIVER]), Some(fee_and_transfer_events()));
    let mut document = document_for(Chain::Ethereum);

    let outcome = run_pipeline(&tx_location("etherscan.io"), &service, &mut document)
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Populated { event_count: 2 });
    assert_eq!(
        service.received_addresses(),
        Some(vec![SENDER.to_string(), RECEIVER.to_string()])
    );

    let body = panel_body(&document, Chain::Ethereum);
    let attribution = body.find(ATTRIBUTION_HTML).unwrap();
    let gas = body.find("fa-solid fa-gas-pump").unwrap();
    let transfer = body.find("fa-money-bill-transfer").unwrap();
    assert!(attribution < gas);
    assert!(gas < transfer);
    assert!(body.contains(&format!("https://etherscan.io/address/{}", RECEIVER)));
    assert!(!body.contains("Fetching data..."));
}

#[tokio::test]
async fn test_reversed_input_reverses_output() {
    let mut events = fee_and_transfer_events();
    events.reverse();
    let service = RecordingService::new(Some(vec![SENDER]), Some(events));
    let mut document = document_for(Chain::Optimism);

    run_pipeline(
        &tx_location("optimistic.etherscan.io"),
        &service,
        &mut document,
    )
    .await
    .unwrap();

    let body = panel_body(&document, Chain::Optimism);
    assert!(body.find("fas fa-exchange").unwrap() < body.find("fas fa-gas-pump").unwrap());
}

#[tokio::test]
async fn test_panel_injected_before_first_network_call() {
    let log = new_log();
    let service = RecordingService::new(Some(vec![SENDER]), Some(fee_and_transfer_events()))
        .with_log(log.clone());
    let mut page = LoggingPage::new(document_for(Chain::Ethereum), log.clone());

    run_pipeline(&tx_location("etherscan.io"), &service, &mut page)
        .await
        .unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "insert_tab",
            "append_panel",
            "fetch_addresses",
            "fetch_decoded_events",
            "set_panel_content",
        ]
    );
}

#[tokio::test]
async fn test_markup_differs_by_chain_family() {
    let events = vec![DecodedEvent::new("receive", None, "Receive 1 ETH")];

    let mut ethereum = document_for(Chain::Ethereum);
    run_pipeline(
        &tx_location("etherscan.io"),
        &RecordingService::new(Some(vec![SENDER]), Some(events.clone())),
        &mut ethereum,
    )
    .await
    .unwrap();

    let mut polygon = document_for(Chain::PolygonPos);
    run_pipeline(
        &tx_location("polygonscan.com"),
        &RecordingService::new(Some(vec![SENDER]), Some(events)),
        &mut polygon,
    )
    .await
    .unwrap();

    let ethereum_body = panel_body(&ethereum, Chain::Ethereum);
    let polygon_body = panel_body(&polygon, Chain::PolygonPos);
    assert!(ethereum_body.starts_with("<div class=\"card pt-5\">"));
    assert!(ethereum_body.contains("fa-solid fa-inbox-in"));
    assert!(polygon_body.starts_with("<div class=\"card-body\">"));
    assert!(polygon_body.contains("fas fa-inbox-in"));

    // Tab placement: before the last tab on etherscan, appended elsewhere
    let ethereum_tabs = ethereum.children("ul#ContentPlaceHolder1_myTab").unwrap();
    assert!(ethereum_tabs[1].attributes.contains("decodedevents"));
    let polygon_tabs = polygon.children("ul#nav_tabs").unwrap();
    assert!(polygon_tabs.last().unwrap().attributes.contains("decodedevents"));
}

#[tokio::test]
async fn test_missing_host_container_aborts_before_fetching() {
    let service = RecordingService::new(Some(vec![SENDER]), Some(fee_and_transfer_events()));
    let mut document = HostDocument::new();

    let result = run_pipeline(&tx_location("etherscan.io"), &service, &mut document).await;

    assert!(result.is_err());
    assert_eq!(service.address_calls(), 0);
    assert_eq!(document.mutation_count(), 0);
}
