#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        error::QuoteError,
        models::{PriceSample, RawInfo, RawSeries},
        services::normalize,
    };

    const SYMBOL: &str = "NVDL";

    fn series_of(closes: &[Decimal]) -> RawSeries {
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                let ts = Utc.timestamp_opt(1_700_000_000 + 60 * i as i64, 0).unwrap();
                PriceSample::new(ts, *close)
            })
            .collect()
    }

    fn info(
        previous_close: Option<Decimal>,
        regular_market_price: Option<Decimal>,
        market_state: Option<&str>,
    ) -> RawInfo {
        RawInfo::new(
            previous_close,
            regular_market_price,
            None,
            None,
            market_state.map(str::to_string),
        )
    }

    #[test]
    fn post_market_scenario() {
        let series = series_of(&[dec!(186.90), dec!(187.05), dec!(187.32)]);
        let info = RawInfo::new(
            Some(dec!(185.00)),
            Some(dec!(186.90)),
            Some(dec!(187.10)),
            None,
            Some("POST".to_string()),
        );

        let quote = normalize(SYMBOL, &series, &info).unwrap();

        assert_eq!(quote.symbol(), SYMBOL);
        assert_eq!(*quote.price(), dec!(187.32));
        assert_eq!(*quote.prev_close(), dec!(185.00));
        assert_eq!(*quote.regular_market_price(), dec!(186.90));
        assert_eq!(*quote.post_market_price(), Some(dec!(187.10)));
        assert_eq!(*quote.pre_market_price(), None);
        assert_eq!(quote.market_state(), "POST");
    }

    #[test]
    fn empty_info_falls_back_to_defaults() {
        let series = series_of(&[dec!(142.50)]);

        let quote = normalize(SYMBOL, &series, &RawInfo::default()).unwrap();

        assert_eq!(*quote.price(), dec!(142.50));
        assert_eq!(*quote.prev_close(), Decimal::ZERO);
        assert_eq!(*quote.regular_market_price(), Decimal::ZERO);
        assert_eq!(*quote.post_market_price(), None);
        assert_eq!(*quote.pre_market_price(), None);
        assert_eq!(quote.market_state(), "REGULAR");
    }

    #[test]
    fn price_is_last_sample_regardless_of_length() {
        for len in 1..50 {
            let closes: Vec<Decimal> = (0..len).map(|i| Decimal::from(100 + i)).collect();
            let quote = normalize(SYMBOL, &series_of(&closes), &RawInfo::default()).unwrap();
            assert_eq!(*quote.price(), Decimal::from(100 + len - 1));
        }
    }

    #[test]
    fn price_ignores_info_prices() {
        let series = series_of(&[dec!(10.00)]);
        let info = RawInfo::new(
            Some(dec!(20.00)),
            Some(dec!(30.00)),
            Some(dec!(40.00)),
            Some(dec!(50.00)),
            Some("PRE".to_string()),
        );

        let quote = normalize(SYMBOL, &series, &info).unwrap();

        assert_eq!(*quote.price(), dec!(10.00));
        assert_eq!(*quote.pre_market_price(), Some(dec!(50.00)));
    }

    #[test]
    fn regular_price_falls_back_to_previous_close() {
        let series = series_of(&[dec!(52.10)]);
        let quote = normalize(SYMBOL, &series, &info(Some(dec!(51.75)), None, None)).unwrap();

        assert_eq!(*quote.prev_close(), dec!(51.75));
        assert_eq!(*quote.regular_market_price(), dec!(51.75));
    }

    #[test]
    fn regular_price_is_kept_verbatim_when_present() {
        let series = series_of(&[dec!(52.10)]);
        let quote = normalize(
            SYMBOL,
            &series,
            &info(Some(dec!(51.75)), Some(dec!(9999.99)), Some("CLOSED")),
        )
        .unwrap();

        assert_eq!(*quote.prev_close(), dec!(51.75));
        assert_eq!(*quote.regular_market_price(), dec!(9999.99));
        assert_eq!(quote.market_state(), "CLOSED");
    }

    #[test]
    fn missing_previous_close_is_zero() {
        let series = series_of(&[dec!(52.10)]);
        let quote = normalize(SYMBOL, &series, &info(None, Some(dec!(52.00)), None)).unwrap();

        assert_eq!(*quote.prev_close(), Decimal::ZERO);
        assert_eq!(*quote.regular_market_price(), dec!(52.00));
    }

    #[test]
    fn unknown_market_state_passes_through() {
        let series = series_of(&[dec!(1.00)]);
        let quote = normalize(SYMBOL, &series, &info(None, None, Some("PREPRE"))).unwrap();

        assert_eq!(quote.market_state(), "PREPRE");
    }

    #[test]
    fn symbol_case_is_preserved() {
        let series = series_of(&[dec!(1.00)]);
        let quote = normalize("brk-b", &series, &RawInfo::default()).unwrap();

        assert_eq!(quote.symbol(), "brk-b");
    }

    #[test]
    fn empty_series_is_no_data() {
        let info = RawInfo::new(
            Some(dec!(185.00)),
            Some(dec!(186.90)),
            Some(dec!(187.10)),
            Some(dec!(184.00)),
            Some("POST".to_string()),
        );

        let err = normalize(SYMBOL, &RawSeries::default(), &info).unwrap_err();

        assert!(matches!(err, QuoteError::NoData { symbol } if symbol == SYMBOL));
    }

    #[test]
    fn quote_serializes_as_camel_case_numbers() {
        let series = series_of(&[dec!(142.50)]);
        let quote = normalize(SYMBOL, &series, &RawInfo::default()).unwrap();

        let value = serde_json::to_value(&quote).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "symbol": SYMBOL,
                "price": 142.5,
                "prevClose": 0.0,
                "regularMarketPrice": 0.0,
                "postMarketPrice": null,
                "preMarketPrice": null,
                "marketState": "REGULAR",
            })
        );
    }
}
