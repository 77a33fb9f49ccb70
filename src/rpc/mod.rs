pub mod handlers;
pub mod types;

use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::query::SlashingSource;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Clone)]
pub struct RpcState {
    pub store: Arc<dyn SlashingSource + Send + Sync>,
    pub config: Arc<ExplorerConfig>,
}

pub fn router(state: RpcState) -> Router {
    Router::new()
        .route("/validators/slashings", get(handlers::handle_slashings_page))
        .route("/validators/slashings/data", get(handlers::handle_slashings_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct RpcServer {
    state: RpcState,
    bind_addr: String,
}

impl RpcServer {
    pub fn new(
        store: Arc<dyn SlashingSource + Send + Sync>,
        config: Arc<ExplorerConfig>,
    ) -> Self {
        let bind_addr = format!("0.0.0.0:{}", config.node.rpc_port);
        Self {
            state: RpcState { store, config },
            bind_addr,
        }
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;

        info!("Slashings explorer listening on {}", self.bind_addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
