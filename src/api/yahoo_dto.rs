use anyhow::{Error, Result};
use chrono::{TimeZone, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{PriceSample, RawInfo, RawSeries};

const NOT_FOUND_CODE: &str = "Not Found";

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResponseDto {
    chart: YahooChartDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartDto {
    result: Option<Vec<YahooChartResultDto>>,
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooErrorDto {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResultDto {
    #[serde(default)]
    meta: YahooChartMetaDto,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicatorsDto,
}

/// Reference prices the chart endpoint carries alongside the bars.
#[derive(Debug, Default, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMetaDto {
    market_state: Option<String>,
    regular_market_price: Option<Decimal>,
    previous_close: Option<Decimal>,
    chart_previous_close: Option<Decimal>,
    pre_market_price: Option<Decimal>,
    post_market_price: Option<Decimal>,
}

impl YahooChartMetaDto {
    pub fn to_info(&self) -> RawInfo {
        RawInfo::new(
            self.previous_close.or(self.chart_previous_close),
            self.regular_market_price,
            self.post_market_price,
            self.pre_market_price,
            self.market_state.clone(),
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooIndicatorsDto {
    #[serde(default)]
    quote: Vec<YahooBarsDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooBarsDto {
    #[serde(default)]
    close: Vec<Option<Decimal>>,
}

impl YahooChartResponseDto {
    /// Zips timestamps with closes, dropping minutes the provider left empty.
    pub fn to_series(&self) -> Result<RawSeries> {
        if let Some(err) = &self.chart.error {
            // Unknown or delisted symbols simply have no data.
            if err.code == NOT_FOUND_CODE {
                return Ok(RawSeries::default());
            }
            return Err(Error::msg(format!("{}: {}", err.code, err.description)));
        }

        let Some(result) = self.first_result() else {
            return Ok(RawSeries::default());
        };

        let Some(bars) = result.indicators.quote.first() else {
            return Ok(RawSeries::default());
        };

        Ok(result
            .timestamp
            .iter()
            .zip(bars.close.iter())
            .filter_map(|(ts, close)| {
                let close = (*close)?;
                let timestamp = Utc.timestamp_opt(*ts, 0).single()?;
                Some(PriceSample::new(timestamp, close))
            })
            .collect())
    }

    /// Reference prices from the chart metadata, empty when there is no result.
    pub fn to_info(&self) -> RawInfo {
        self.first_result()
            .map(|result| result.meta.to_info())
            .unwrap_or_default()
    }

    fn first_result(&self) -> Option<&YahooChartResultDto> {
        self.chart.result.as_ref().and_then(|r| r.first())
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResponseDto {
    quote_response: YahooQuoteListDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooQuoteListDto {
    #[serde(default)]
    result: Vec<YahooQuoteDto>,
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteDto {
    symbol: Option<String>,
    market_state: Option<String>,
    regular_market_price: Option<Decimal>,
    regular_market_previous_close: Option<Decimal>,
    previous_close: Option<Decimal>,
    pre_market_price: Option<Decimal>,
    post_market_price: Option<Decimal>,
}

impl YahooQuoteDto {
    pub fn to_info(&self) -> RawInfo {
        RawInfo::new(
            self.regular_market_previous_close.or(self.previous_close),
            self.regular_market_price,
            self.post_market_price,
            self.pre_market_price,
            self.market_state.clone(),
        )
    }
}

impl YahooQuoteResponseDto {
    /// Missing quote entries yield an empty snapshot; the series alone
    /// decides whether a symbol has data.
    pub fn to_info(&self) -> Result<RawInfo> {
        if let Some(err) = &self.quote_response.error {
            return Err(Error::msg(format!("{}: {}", err.code, err.description)));
        }

        Ok(self
            .quote_response
            .result
            .first()
            .map(YahooQuoteDto::to_info)
            .unwrap_or_default())
    }
}
