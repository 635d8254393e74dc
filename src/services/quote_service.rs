use crate::{api::QuoteFetcher, error::QuoteError, models::Quote};

use super::normalize::normalize;

pub struct QuoteService<F> {
    fetcher: F,
}

impl<F: QuoteFetcher> QuoteService<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let (series, info) = self.fetcher.fetch(symbol).await?;
        normalize(symbol, &series, &info)
    }
}
