//! REST helpers for the sign-in endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: the browser transport reports
//! `ApiError::Unavailable`; callers substitute their own `LoginTransport`.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems are `ApiError`s. Everything the server said (status and
//! body) is folded into a `LoginFailure` by `interpret_reply`, so the page
//! only ever deals with the three user-facing failure kinds.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{HttpReply, LoginRequest, display_text};
use crate::state::login::LoginFailure;

/// Errors raised before a response could be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request encoding failed: {0}")]
    Encode(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

/// Sends login requests. The browser uses `GlooTransport`; tests inject fakes.
pub trait LoginTransport {
    /// POST `request` as JSON to `endpoint` and return the settled reply.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request could not be sent or its body could
    /// not be read.
    fn post_login(
        &self,
        endpoint: &str,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<HttpReply, ApiError>>;
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl LoginTransport for GlooTransport {
    #[allow(clippy::unused_async)]
    async fn post_login(&self, endpoint: &str, request: &LoginRequest) -> Result<HttpReply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(request)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let raw = resp.text().await.unwrap_or_default();
            Ok(HttpReply::from_raw(status, &raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, request);
            Err(ApiError::Unavailable)
        }
    }
}

/// Classify a settled reply: the `user` record on success, otherwise the
/// failure to show.
///
/// # Errors
///
/// `Rejected` for non-2xx statuses (carrying the body's `error`/`details`),
/// `MalformedResponse` for a 2xx reply without a usable `user`.
pub fn interpret_reply(reply: &HttpReply) -> Result<Value, LoginFailure> {
    if !reply.is_success() {
        return Err(LoginFailure::Rejected {
            error: reply.field("error").map(display_text),
            details: reply.field("details").map(display_text),
        });
    }
    reply.field("user").cloned().ok_or(LoginFailure::MalformedResponse)
}
