//! Web API for the chart front end.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP layer (axum handlers)                  │
//! │  - path parsing, JSON bodies, 404 handling   │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────▼───────────────────────┐
//! │  Reports (core::report)                      │
//! │  - weekday grouping and reductions           │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────▼───────────────────────┐
//! │  Data sources (data::presence, data::users)  │
//! │  - CSV / XML, read on every request          │
//! └──────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::net::SocketAddr;
use tracing::info;

/// Bind to the configured host/port and serve until the process stops.
pub async fn serve(config: Config) -> AppResult<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid listen address: {e}")))?;

    info!(data_csv = %config.data_csv, data_xml = %config.data_xml, "starting presence analyzer");

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}
