use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

pub const DEFAULT_MARKET_STATE: &str = "REGULAR";

/// Sparse provider snapshot of session state and reference prices.
///
/// Every field is optional. The accessors below resolve the fallbacks:
/// previous close defaults to zero, the regular market price defaults to the
/// previous close, and the market state defaults to `REGULAR`.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct RawInfo {
    #[getter(skip)]
    previous_close: Option<Decimal>,
    #[getter(skip)]
    regular_market_price: Option<Decimal>,
    post_market_price: Option<Decimal>,
    pre_market_price: Option<Decimal>,
    #[getter(skip)]
    market_state: Option<String>,
}

impl RawInfo {
    pub fn previous_close(&self) -> Decimal {
        self.previous_close.unwrap_or(Decimal::ZERO)
    }

    pub fn regular_market_price(&self) -> Decimal {
        self.regular_market_price
            .unwrap_or_else(|| self.previous_close())
    }

    pub fn market_state(&self) -> &str {
        self.market_state.as_deref().unwrap_or(DEFAULT_MARKET_STATE)
    }
}
