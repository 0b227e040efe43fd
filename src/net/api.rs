//! HTTP helpers for the account API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Non-browser
//! builds get stubs returning a transport error, since these endpoints
//! are only reachable from the browser.
//!
//! Helpers return the raw `(status, body)` pair; interpreting the status
//! and body into state changes is the store's job, so that logic stays
//! natively testable.

#![allow(clippy::unused_async)]

use crate::error::SessionError;

/// HTTP verbs used by the account API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Send a JSON request, optionally authenticated with a bearer token.
///
/// # Errors
///
/// Returns [`SessionError::Transport`] on connection failure (or outside
/// the browser) and [`SessionError::Decode`] if the response body cannot
/// be read.
pub async fn send_json(
    method: Method,
    url: &str,
    body: Option<&serde_json::Value>,
    bearer: Option<&str>,
) -> Result<(u16, String), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = match method {
            Method::Get => gloo_net::http::Request::get(url),
            Method::Post => gloo_net::http::Request::post(url),
            Method::Put => gloo_net::http::Request::put(url),
        }
        .header("Accept", "application/json")
        .header("Content-Type", "application/json");

        if let Some(token) = bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }

        let req = match body {
            Some(json) => req
                .json(json)
                .map_err(|e| SessionError::Decode(e.to_string()))?,
            None => req
                .build()
                .map_err(|e| SessionError::Transport(e.to_string()))?,
        };

        let resp = req.send().await.map_err(|e| {
            log::warn!("account API request to {url} failed: {e}");
            SessionError::Transport(e.to_string())
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SessionError::Decode(e.to_string()))?;
        Ok((status, text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body, bearer);
        Err(SessionError::Transport("not available outside the browser".to_owned()))
    }
}
