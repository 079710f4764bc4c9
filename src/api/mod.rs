// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

pub mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::router;

use crate::config::ServerConfig;
use crate::service::ProfileService;
use anyhow::Result;
use std::future::Future;
use std::net::SocketAddr;
use tracing::info;

/// Start the API server, returning once `shutdown` resolves and in-flight
/// requests have drained.
pub async fn start_api_server<F>(
    config: &ServerConfig,
    service: ProfileService,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(service);

    // Get bind address
    let addr = format!("{}:{}", config.host, config.port)
        .parse::<SocketAddr>()?;

    info!("Starting API server on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");
    Ok(())
}
