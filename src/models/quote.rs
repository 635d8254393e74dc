use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    prev_close: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    regular_market_price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    post_market_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pre_market_price: Option<Decimal>,
    market_state: String,
}

impl Quote {
    pub fn new(
        symbol: String,
        price: Decimal,
        prev_close: Decimal,
        regular_market_price: Decimal,
        post_market_price: Option<Decimal>,
        pre_market_price: Option<Decimal>,
        market_state: String,
    ) -> Self {
        Self {
            symbol,
            price,
            prev_close,
            regular_market_price,
            post_market_price,
            pre_market_price,
            market_state,
        }
    }
}
