//! Review sentiment service — binary entrypoint.
//! Loads config + lexicon, then serves the HTTP API.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use review_sentiment::{api, AnalyzerConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_sentiment=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AnalyzerConfig::from_env()?;
    info!(
        lexicon = %cfg.lexicon_path.display(),
        mode = %cfg.reduce_mode,
        ngrams = cfg.include_ngrams,
        "starting review sentiment service"
    );

    let state = api::AppState::from_config(&cfg);
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
