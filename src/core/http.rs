//! HTTP utilities shared by the upstream provider clients

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::Result;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Build the client shared by every provider. `timeout` bounds each request.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Headers stats.nba.com expects before it will answer (it stalls requests
/// that don't look like they come from nba.com).
pub fn nba_stats_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h
}

/// GET `url` with `params` and decode the JSON body.
///
/// Non-2xx statuses are errors.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
    headers: Option<HeaderMap>,
) -> Result<T> {
    debug!(%url, ?params, "upstream request");

    let mut request = client.get(url).query(params);
    if let Some(headers) = headers {
        request = request.headers(headers);
    }

    let res = request
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await?;

    Ok(res)
}
