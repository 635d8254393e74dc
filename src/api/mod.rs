pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

use std::future::Future;

use anyhow::Result;

use crate::models::{RawInfo, RawSeries};

pub use yahoo::YahooApi;

/// Source of the raw intraday series and info snapshot for a symbol.
pub trait QuoteFetcher: Send + Sync + 'static {
    fn fetch(&self, symbol: &str) -> impl Future<Output = Result<(RawSeries, RawInfo)>> + Send;
}
