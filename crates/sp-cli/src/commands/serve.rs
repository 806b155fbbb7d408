use std::sync::Arc;

use anyhow::Context;
use sp_config::SmartPasteConfig;
use sp_extract::OpenAiExtractor;
use sp_server::ExtractionServer;

use crate::cli::root_commands::ServeArgs;

/// Handle `smartpaste serve`.
pub async fn handle(args: &ServeArgs, config: &SmartPasteConfig) -> anyhow::Result<()> {
    let mut server_config = config.server.clone();
    if let Some(bind) = &args.bind {
        server_config.bind.clone_from(bind);
    }
    if let Some(path) = &args.path {
        server_config.path.clone_from(path);
    }

    let extractor = OpenAiExtractor::from_config(&config.openai)
        .context("the extraction endpoint needs a configured model provider")?;
    tracing::info!(model = extractor.model(), "using model");

    let server = ExtractionServer::bind(&server_config, Arc::new(extractor))?;
    eprintln!("Serving extraction requests at {}", server.url());

    let stop = server.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutting down");
            stop.shutdown();
        }
    });

    server.serve().await?;
    Ok(())
}
