use crate::{
    error::QuoteError,
    models::{Quote, RawInfo, RawSeries},
};

/// Builds the canonical quote from the provider's raw series and info.
///
/// The last sample of the series is taken as the current price whatever the
/// session state. This assumes the provider orders samples chronologically
/// and includes extended-hours trades; it is not something the provider
/// documents.
pub fn normalize(symbol: &str, series: &RawSeries, info: &RawInfo) -> Result<Quote, QuoteError> {
    let last = series.last().ok_or_else(|| QuoteError::NoData {
        symbol: symbol.to_string(),
    })?;

    Ok(Quote::new(
        symbol.to_string(),
        *last.close(),
        info.previous_close(),
        info.regular_market_price(),
        *info.post_market_price(),
        *info.pre_market_price(),
        info.market_state().to_string(),
    ))
}
