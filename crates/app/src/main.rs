//! Guidepath application entry point

use std::sync::Arc;

use anyhow::Context;
use guidepath_lib::utils::logging::init_tracing;
use guidepath_lib::{build_router, AppContext};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = guidepath_infra::config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let ctx = Arc::new(AppContext::from_config(config).context("failed to build app context")?);
    ctx.seed_catalog().await;

    let router = build_router(Arc::clone(&ctx));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, backend = ?ctx.config.backend, "guidepath listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
