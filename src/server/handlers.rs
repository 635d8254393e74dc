use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::info;

use crate::{api::QuoteFetcher, error::QuoteError, models::Quote, services::QuoteService};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn get_quote<F: QuoteFetcher>(
    State(service): State<Arc<QuoteService<F>>>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, QuoteError> {
    let quote = service.get_quote(&symbol).await?;
    info!(
        symbol = %symbol,
        price = %quote.price(),
        market_state = %quote.market_state(),
        "served quote"
    );
    Ok(Json(quote))
}
