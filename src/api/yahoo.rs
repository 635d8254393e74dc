use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode, Url, header};
use tracing::{debug, warn};

use super::{
    QuoteFetcher,
    utils::{make_request, parse_response, send_request},
    yahoo_dto::{YahooChartResponseDto, YahooQuoteResponseDto},
};
use crate::models::{RawInfo, RawSeries};

pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
    base_url: String,
}

impl YahooApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Appends path segments, percent-encoding the caller's symbol.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid provider URL {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Provider URL {} cannot take a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url.into())
    }

    /// Latest session at one-minute granularity, pre- and post-market included,
    /// together with the reference prices from the chart metadata.
    pub async fn get_chart(&self, symbol: &str) -> Result<(RawSeries, RawInfo)> {
        let url = self.endpoint(&["v8", "finance", "chart", symbol])?;
        let params = [
            ("range", "1d"),
            ("interval", "1m"),
            ("includePrePost", "true"),
        ];
        let res = make_request::<YahooChartResponseDto>(&self.client, &url, &params).await?;

        let series = res
            .to_series()
            .with_context(|| format!("Failed to load chart for {}", symbol))?;

        Ok((series, res.to_info()))
    }

    /// Full quote snapshot, or `None` when the provider demands a session
    /// crumb for the quote endpoint.
    pub async fn get_info(&self, symbol: &str) -> Result<Option<RawInfo>> {
        let url = self.endpoint(&["v7", "finance", "quote"])?;
        let (status, text) = send_request(&self.client, &url, &[("symbols", symbol)]).await?;

        if status == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(anyhow!("Request failed: {}", status));
        }

        parse_response::<YahooQuoteResponseDto>(&url, &text)?
            .to_info()
            .map(Some)
            .with_context(|| format!("Failed to load quote info for {}", symbol))
    }
}

impl QuoteFetcher for YahooApi {
    async fn fetch(&self, symbol: &str) -> Result<(RawSeries, RawInfo)> {
        let (series, chart_info) = self.get_chart(symbol).await?;
        debug!(symbol, samples = series.len(), "fetched intraday series");

        // Without trades the snapshot cannot change the outcome.
        if series.is_empty() {
            return Ok((series, RawInfo::default()));
        }

        let info = match self.get_info(symbol).await? {
            Some(info) => info,
            None => {
                warn!(symbol, "quote endpoint unauthorized, using chart metadata");
                chart_info
            }
        };
        debug!(symbol, market_state = info.market_state(), "fetched quote info");

        Ok((series, info))
    }
}
