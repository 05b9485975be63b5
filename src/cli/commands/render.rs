use crate::client::DecodingClient;
use crate::context::PageLocation;
use crate::errors::AppResult;
use crate::page::HostDocument;
use crate::panel::{run_pipeline, PipelineOutcome};
use crate::presentation::ChainPresentationProfile;
use crate::types::Chain;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
pub struct RenderCommand {
    /// Explorer transaction page URL (e.g. https://etherscan.io/tx/0x...)
    pub page_url: String,

    /// Decoding service base URL (overrides the settings store)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Settings file (overrides decodify.toml)
    #[arg(long)]
    pub settings_path: Option<PathBuf>,

    /// Write the rendered page here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub async fn run(&self) -> AppResult<()> {
        let location = PageLocation::parse(&self.page_url)?;

        // Unknown hosts get a bare document; the pipeline decides to skip them
        let mut document = match Chain::from_host(&location.hostname) {
            Some(chain) => HostDocument::for_profile(&ChainPresentationProfile::for_chain(chain)),
            None => HostDocument::new(),
        };

        let settings =
            super::settings_provider(self.server_url.clone(), self.settings_path.clone());
        let client = DecodingClient::new(settings);

        match run_pipeline(&location, &client, &mut document).await? {
            PipelineOutcome::Populated { event_count } => {
                info!("Rendered {} decoded events", event_count);
            }
            PipelineOutcome::Errored(stage) => {
                warn!("Decoding failed at the {} stage, rendered error panel", stage);
            }
            PipelineOutcome::NotApplicable => {
                info!(
                    "{} is not a supported explorer, nothing to render",
                    location.hostname
                );
                return Ok(());
            }
        }

        let html = document.to_html();
        match &self.output {
            Some(path) => {
                fs::write(path, html)?;
                println!("Rendered page written to {}", path.display());
            }
            None => print!("{}", html),
        }

        Ok(())
    }
}
