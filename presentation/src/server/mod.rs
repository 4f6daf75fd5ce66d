//! AI proxy endpoint
//!
//! Serves `POST /api/sage`, forwarding queries to [`AskSageUseCase`].

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{SAGE_ROUTE, router};

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tooltrack_application::AskSageUseCase;
use tracing::{error, info};

/// Bind `addr` and serve the proxy until Ctrl-C.
pub async fn serve(addr: SocketAddr, use_case: AskSageUseCase) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        "Sage proxy listening on http://{}{}",
        listener.local_addr()?,
        SAGE_ROUTE
    );

    axum::serve(listener, router(use_case))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Sage proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
    }
}
