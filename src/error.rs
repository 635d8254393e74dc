use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

pub const NO_DATA_MESSAGE: &str = "No data found";

#[derive(Debug, Error)]
pub enum QuoteError {
    /// The provider returned an empty intraday series.
    #[error("no data found for symbol {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            QuoteError::NoData { symbol } => {
                warn!(symbol = %symbol, "no data found");
                (StatusCode::NOT_FOUND, NO_DATA_MESSAGE.to_string())
            }
            QuoteError::Upstream(err) => {
                error!("quote request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
