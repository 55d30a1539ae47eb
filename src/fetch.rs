//! Async HTTP client wrapping reqwest.
//!
//! Not a browser — just GET requests with a browser-identifying
//! user-agent and limited redirects. There is deliberately no retry or
//! backoff anywhere: a failed fetch is either fatal (listing and roster
//! pages) or a permanent single-entity skip (player pages), decided by
//! the caller.

use crate::error::ScoutError;
use anyhow::{Context, Result};
use std::time::Duration;

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for the harvest pipeline.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with a standard Chrome user-agent.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET request. Transport errors surface with the
    /// URL in context; the status is returned as-is for the caller's
    /// error policy.
    pub async fn get(&self, url: &str) -> Result<HttpResponse> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("fetch failed for {url}"))?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        Ok(HttpResponse {
            url: url.to_string(),
            status,
            body,
        })
    }

    /// GET that treats any non-2xx status as an error. Used for pages
    /// whose failure is fatal to the run.
    pub async fn get_ok(&self, url: &str) -> Result<HttpResponse> {
        let resp = self.get(url).await?;
        if !resp.is_success() {
            return Err(ScoutError::Fetch {
                url: url.to_string(),
                status: resp.status,
            }
            .into());
        }
        Ok(resp)
    }

    /// Perform parallel GET requests with bounded concurrency, preserving
    /// input order in the results. One failed fetch never cancels its
    /// siblings; each slot carries its own `Result`.
    pub async fn get_many_ordered(
        &self,
        urls: &[String],
        concurrency: usize,
    ) -> Vec<Result<HttpResponse>> {
        use futures::stream::{self, StreamExt};

        stream::iter(urls.iter())
            .map(|url| {
                let client = self.clone();
                let u = url.clone();
                async move { client.get(&u).await }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
