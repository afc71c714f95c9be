use anyhow::{Context, Result};
use tracing::info;

use holiday_analyzer::config::AnalyzerConfig;
use holiday_analyzer::web::{self, AppState};

use crate::cli::ServeArgs;

/// Serve the web form until interrupted.
pub fn run(args: ServeArgs, config: &AnalyzerConfig) -> Result<()> {
    let host = args.host.unwrap_or_else(|| config.web.host.clone());
    let ports = match args.port {
        Some(port) => port..=port,
        None => config.web.ports(),
    };
    let state = AppState::from_config(config);

    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
    runtime.block_on(async move {
        let listener = web::bind_first_free(&host, ports)
            .await
            .with_context(|| format!("failed to bind on {host}"))?;
        info!(language = config.language.code(), "starting web form");
        web::serve(listener, state).await.context("server error")
    })
}
