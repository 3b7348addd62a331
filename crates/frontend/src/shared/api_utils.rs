//! HTTP access to the report backend.
//!
//! [`GlooClient`] is the browser implementation of [`ReportClient`]; the
//! base URL itself comes from [`crate::config::DashboardConfig`].

use crate::usecases::common::{HttpReply, ReportClient};
use async_trait::async_trait;
use contracts::reports::ReportError;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// `fetch`-backed client with an optional deadline
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient {
    timeout_ms: Option<u32>,
}

impl GlooClient {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self::new(Some(timeout_ms))
    }
}

#[async_trait(?Send)]
impl ReportClient for GlooClient {
    async fn get(&self, url: &str) -> Result<HttpReply, ReportError> {
        let Some(timeout_ms) = self.timeout_ms else {
            return fetch(url).await;
        };

        let request = Box::pin(fetch(url));
        let deadline = Box::pin(TimeoutFuture::new(timeout_ms));
        match select(request, deadline).await {
            Either::Left((reply, _)) => reply,
            Either::Right(_) => Err(ReportError::Timeout),
        }
    }
}

/// Reads the whole body for 2xx replies; other statuses come back without one
async fn fetch(url: &str) -> Result<HttpReply, ReportError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ReportError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = if response.ok() {
        response
            .binary()
            .await
            .map_err(|e| ReportError::Network(format!("Failed to read body: {}", e)))?
    } else {
        Vec::new()
    };

    Ok(HttpReply {
        status,
        status_text,
        body,
    })
}
