//! HTTP surface: `/quote/{symbol}` and a liveness probe.

pub mod handlers;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{api::QuoteFetcher, services::QuoteService};

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router<F: QuoteFetcher>(service: Arc<QuoteService<F>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/quote/{symbol}", get(handlers::get_quote::<F>))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(service)
}

pub async fn run_server<F: QuoteFetcher>(addr: SocketAddr, service: QuoteService<F>) -> Result<()> {
    let app = build_router(Arc::new(service));

    info!("Starting quote server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
