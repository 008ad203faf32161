use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::application::http::server::http_server::{router, state};
use crate::application::logger::init_logger;
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone())?;
    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Nutriscan API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
