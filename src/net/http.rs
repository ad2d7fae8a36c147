//! Browser HTTP transport over `gloo-net`.
//!
//! Client-side (csr): real `fetch` calls against the configured base URL.
//! Native builds: every request fails with a network error, since there is
//! no browser to talk to.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::api::{ApiRequest, HttpReply, Transport};
use crate::error::SessionError;

/// `fetch`-backed [`Transport`] rooted at the API base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpReply, SessionError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            use super::api::Method;

            let url = self.url_for(request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| SessionError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.header("Content-Type", "application/json").send().await,
            }
            .map_err(|e| SessionError::Network(e.to_string()))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| SessionError::Network(e.to_string()))?;
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(SessionError::Network("not available outside the browser".to_owned()))
        }
    }
}
