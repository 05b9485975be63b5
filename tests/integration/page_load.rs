use crate::common::{localhost_binding_permitted, RECEIVER, SENDER, TX_HASH};
use anyhow::Result;
use decodify::client::DecodingClient;
use decodify::context::PageLocation;
use decodify::page::HostDocument;
use decodify::panel::{run_pipeline, PipelineOutcome};
use decodify::presentation::{ChainPresentationProfile, FailureStage, ATTRIBUTION_HTML};
use decodify::settings::FileSettingsStore;
use decodify::types::Chain;
use mockito::{Matcher, Server};
use std::sync::Arc;
use tempfile::TempDir;

/// Settings store on disk pointing at the mock server
fn store_for(server: &Server, dir: &TempDir) -> Result<Arc<FileSettingsStore>> {
    let store = FileSettingsStore::new(dir.path().join("settings.toml"));
    store.set_use_custom_server(true)?;
    store.set_base_server_url(&format!("{}/transactions", server.url()))?;
    Ok(Arc::new(store))
}

#[tokio::test]
async fn test_polygon_page_load_populates_panel() -> Result<()> {
    if !localhost_binding_permitted() {
        return Ok(());
    }
    let mut server = Server::new_async().await;
    let dir = TempDir::new()?;

    let addresses = server
        .mock("GET", format!("/transactions/{}/polygon_pos/addresses", TX_HASH).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"data":["{}","{}"]}}"#, SENDER, RECEIVER))
        .create_async()
        .await;
    let decode = server
        .mock("GET", format!("/transactions/{}/polygon_pos/decode", TX_HASH).as_str())
        .match_query(Matcher::UrlEncoded(
            "related_addresses".to_string(),
            format!("{},{}", SENDER, RECEIVER),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"data":[
                {{"entry":{{"event_type":"spend","event_subtype":"fee","notes":"Burned 0.003 MATIC for gas from {sender}"}}}},
                {{"entry":{{"event_type":"withdrawal","event_subtype":"remove asset","notes":"Withdraw 5 USDC from Aave to {receiver}"}}}},
                {{"entry":{{"event_type":"informational","event_subtype":null,"notes":"Approve USDC"}}}}
            ]}}"#,
            sender = SENDER,
            receiver = RECEIVER
        ))
        .create_async()
        .await;

    let client = DecodingClient::new(store_for(&server, &dir)?);
    let profile = ChainPresentationProfile::for_chain(Chain::PolygonPos);
    let mut document = HostDocument::for_profile(&profile);
    let location = PageLocation::parse(&format!("https://polygonscan.com/tx/{}", TX_HASH))?;

    let outcome = run_pipeline(&location, &client, &mut document).await?;
    assert_eq!(outcome, PipelineOutcome::Populated { event_count: 3 });
    addresses.assert_async().await;
    decode.assert_async().await;

    let html = document.to_html();
    assert!(html.contains(ATTRIBUTION_HTML));
    assert!(html.contains(&format!("https://polygonscan.com/address/{}", SENDER)));
    assert!(html.contains(&format!("https://polygonscan.com/address/{}", RECEIVER)));

    let gas = html.find("fas fa-gas-pump").unwrap();
    let outbound = html.find("fas fa-inbox-out").unwrap();
    let info = html.find("fas fa-info-circle").unwrap();
    assert!(gas < outbound && outbound < info);
    Ok(())
}

#[tokio::test]
async fn test_service_error_renders_warning_and_skips_decode() -> Result<()> {
    if !localhost_binding_permitted() {
        return Ok(());
    }
    let mut server = Server::new_async().await;
    let dir = TempDir::new()?;

    let _addresses = server
        .mock("GET", format!("/transactions/{}/ethereum/addresses", TX_HASH).as_str())
        .with_status(500)
        .with_body(r#"{"errors":["etherscan rate limit"]}"#)
        .create_async()
        .await;
    let decode = server
        .mock("GET", format!("/transactions/{}/ethereum/decode", TX_HASH).as_str())
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = DecodingClient::new(store_for(&server, &dir)?);
    let profile = ChainPresentationProfile::for_chain(Chain::Ethereum);
    let mut document = HostDocument::for_profile(&profile);
    let location = PageLocation::new("etherscan.io", format!("/tx/{}", TX_HASH));

    let outcome = run_pipeline(&location, &client, &mut document).await?;
    assert_eq!(outcome, PipelineOutcome::Errored(FailureStage::Addresses));
    decode.assert_async().await;

    let html = document.to_html();
    assert!(html.contains(FailureStage::Addresses.message()));
    // Tab header survives the failure
    assert!(html.contains("ContentPlaceHolder1_li_decodedevents"));
    Ok(())
}

#[tokio::test]
async fn test_unsupported_explorer_makes_no_requests() -> Result<()> {
    if !localhost_binding_permitted() {
        return Ok(());
    }
    let mut server = Server::new_async().await;
    let dir = TempDir::new()?;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = DecodingClient::new(store_for(&server, &dir)?);
    let mut document =
        HostDocument::for_profile(&ChainPresentationProfile::for_chain(Chain::Ethereum));
    let location = PageLocation::parse(&format!("https://arbiscan.io/tx/{}", TX_HASH))?;

    let outcome = run_pipeline(&location, &client, &mut document).await?;
    assert_eq!(outcome, PipelineOutcome::NotApplicable);
    assert_eq!(document.mutation_count(), 0);
    any.assert_async().await;
    Ok(())
}
