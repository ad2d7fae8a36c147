//! REST client for the two backend endpoints.
//!
//! DESIGN
//! ======
//! The byte transport sits behind the [`Transport`] trait so the reply
//! interpretation below (status handling, error-message extraction, body
//! shape checks) is plain Rust and testable without a browser. The browser
//! implementation lives in `net::http`.
//!
//! ERROR HANDLING
//! ==============
//! - transport failure → [`SessionError::Network`]
//! - login non-2xx → [`SessionError::AuthRejected`] carrying the body's
//!   `message` or the generic fallback
//! - details non-2xx → [`SessionError::HttpStatus`] (no body contract)
//! - 2xx with an unexpected body → [`SessionError::MalformedResponse`]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::types::{ErrorBody, LoginRequest, LoginResponse, UserDetails};
use crate::error::{LOGIN_FAILED_MESSAGE, SessionError};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const DETAILS_PATH: &str = "/api/user/details";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as seen by the transport: path relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw status and body text returned by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Byte-level HTTP seam. Enables scripted replies in tests.
///
/// Futures are not `Send`: browser fetch futures live on the UI thread.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send a request and return the status and body text.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Network`] when the request cannot be sent or
    /// the body cannot be read. Non-2xx statuses are not errors here.
    async fn send(&self, request: ApiRequest) -> Result<HttpReply, SessionError>;
}

/// Typed client for the login and details endpoints.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] for network failures, rejected credentials,
    /// or a success body without a token and user object.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, SessionError> {
        let reply = self.transport.send(login_request(email, password)?).await?;
        interpret_login(&reply)
    }

    /// `GET /api/user/details` with the session token as a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] for network failures, non-2xx statuses, or
    /// a body that is not a JSON object.
    pub async fn fetch_details(&self, token: &str) -> Result<UserDetails, SessionError> {
        let reply = self.transport.send(details_request(token)).await?;
        interpret_details(&reply)
    }
}

fn login_request(email: &str, password: &str) -> Result<ApiRequest, SessionError> {
    let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let body = serde_json::to_value(&payload).map_err(|e| SessionError::MalformedResponse(e.to_string()))?;
    Ok(ApiRequest { method: Method::Post, path: LOGIN_PATH, bearer: None, body: Some(body) })
}

fn details_request(token: &str) -> ApiRequest {
    ApiRequest { method: Method::Get, path: DETAILS_PATH, bearer: Some(token.to_owned()), body: None }
}

/// Turn a login reply into a token + user pair or a typed failure.
fn interpret_login(reply: &HttpReply) -> Result<LoginResponse, SessionError> {
    if !reply.is_success() {
        return Err(SessionError::AuthRejected {
            status: reply.status,
            message: rejection_message(&reply.body),
        });
    }
    let parsed: LoginResponse =
        serde_json::from_str(&reply.body).map_err(|e| SessionError::MalformedResponse(e.to_string()))?;
    if parsed.token.is_empty() {
        return Err(SessionError::MalformedResponse("empty token".to_owned()));
    }
    Ok(parsed)
}

fn interpret_details(reply: &HttpReply) -> Result<UserDetails, SessionError> {
    if !reply.is_success() {
        return Err(SessionError::HttpStatus(reply.status));
    }
    serde_json::from_str(&reply.body).map_err(|e| SessionError::MalformedResponse(e.to_string()))
}

/// Human-readable message from a rejected login body, or the generic fallback.
///
/// Only a non-blank string `message` counts; any other shape falls back.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned())
}
