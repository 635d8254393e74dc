use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

pub async fn send_request(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<(StatusCode, String)> {
    let res = client
        .get(url)
        .query(query)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = res.status();
    let text = res
        .text()
        .await
        .with_context(|| format!("Failed to read response from {}", url))?;

    Ok((status, text))
}

pub fn parse_response<T>(url: &str, text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text)
        .inspect_err(|_| debug!(url, body = text, "undecodable provider response"))
        .with_context(|| format!("Unexpected API response from {}", url))
}

pub async fn make_request<T>(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<T>
where
    T: DeserializeOwned,
{
    let (status, text) = send_request(client, url, query).await?;

    // Yahoo reports unknown symbols on the chart endpoint as 404 with a JSON
    // error body, which the caller still wants to inspect.
    if !status.is_success() && status != StatusCode::NOT_FOUND {
        return Err(anyhow::anyhow!("Request failed: {}", status));
    }

    parse_response(url, &text)
}
