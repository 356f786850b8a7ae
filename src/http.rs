//! HTTP transport
//!
//! Thin wrapper over a blocking reqwest client. Exactly one request goes out
//! per user action; there is no retry loop, and without configured timeouts
//! a call blocks until the backend answers or the connection drops.

use crate::config::HttpConfig;
use anyhow::Result;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(cfg: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        // reqwest's blocking client defaults to a 30s timeout; None restores
        // the wait-forever behavior when nothing is configured.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout.map(Duration::from_secs))
            .connect_timeout(cfg.connect_timeout.map(Duration::from_secs))
            .build()?;

        Ok(Self { inner: client })
    }

    pub fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> reqwest::Result<Response> {
        self.inner.post(url).json(body).send()
    }
}
