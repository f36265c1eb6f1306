use std::time::Duration;

use anyhow::Result;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER, USER_AGENT,
};
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const BODY_SNIPPET_LEN: usize = 200;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Safari/605.1.15 Edg/131.0.0.0";

/// One configured express query. The URL carries the carrier code,
/// tracking number, and provider tokens; `carrier` is the display name
/// used when the provider omits carrier metadata.
#[derive(Debug, Clone)]
pub struct TrackingQuery {
    pub url: String,
    pub tracking_number: String,
    pub carrier: String,
}

impl TrackingQuery {
    /// Browser-mimicking header set. The provider serves the JSONP
    /// endpoint to search-result pages, so the Referer points at a
    /// search for the tracking number.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9,zh-CN;q=0.8,zh;q=0.7"),
        );
        let referer = format!("https://www.baidu.com/s?wd={}", self.tracking_number);
        if let Ok(value) = HeaderValue::from_str(&referer) {
            headers.insert(REFERER, value);
        }
        headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("script"));
        headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("no-cors"));
        headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-site"));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers
    }
}

/// Classified failure of the express fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP status {status}")]
    Status { status: u16, snippet: String },
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err)
    }
}

pub struct ExpressClient {
    http: reqwest::Client,
}

impl ExpressClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()?;
        Ok(Self { http })
    }

    /// Issue the tracking query and return the raw response body.
    ///
    /// Non-2xx responses are an error even when a body was received;
    /// the first 200 chars of the body are kept for the fallback message.
    pub async fn fetch(&self, query: &TrackingQuery) -> Result<String, FetchError> {
        let response = self
            .http
            .get(&query.url)
            .headers(query.headers())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                snippet: body.chars().take(BODY_SNIPPET_LEN).collect(),
            });
        }

        Ok(body)
    }
}
