use std::sync::Arc;

use anyhow::Context;

use paintcalc_api::config::ApiConfig;
use paintcalc_estimation::CoverageEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    paintcalc_observability::init();

    let config = ApiConfig::from_env()?;
    let catalog = config.load_catalog()?;
    tracing::info!(
        products = catalog.len(),
        source = %config.catalog_source(),
        "catalog loaded"
    );

    let engine = Arc::new(CoverageEngine::new(catalog));
    let app = paintcalc_api::app::build_app(engine);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
