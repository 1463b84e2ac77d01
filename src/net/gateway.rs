//! The single HTTP path for every backend request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never build authorization headers or handle session expiry
//! themselves: each verb helper stamps the bearer credential from the
//! session store onto the outgoing request, and every response funnels
//! through the 401 interceptor. On expiry the session is purged and the
//! browser performs one full navigation to `/login`; the page reload that
//! follows re-initializes all client state, so nothing else needs to react.
//!
//! Concurrent requests may all resolve 401 in the same tick; a thread-local
//! latch collapses them into a single purge + navigation.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session;

#[cfg(any(test, feature = "hydrate"))]
const UNAUTHORIZED: u16 = 401;

/// Header value for the backend's token scheme.
#[cfg(any(test, feature = "hydrate"))]
fn auth_header_value(token: &str) -> String {
    format!("Token {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_unauthorized(status: u16) -> bool {
    status == UNAUTHORIZED
}

#[cfg(any(test, feature = "hydrate"))]
thread_local! {
    static EXPIRY_HANDLED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Purge the session and navigate to the login view, exactly once per page
/// lifetime. Returns whether this call was the one that acted.
///
/// Purging touches storage only, so it cannot start another authenticated
/// request cycle; late 401s from in-flight requests land here as no-ops.
#[cfg(any(test, feature = "hydrate"))]
fn handle_unauthorized() -> bool {
    let first = EXPIRY_HANDLED.with(|cell| {
        let first = !cell.get();
        cell.set(true);
        first
    });
    if !first {
        return false;
    }
    session::purge();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    true
}

#[cfg(test)]
fn reset_expiry_latch() {
    EXPIRY_HANDLED.with(|cell| cell.set(false));
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match session::current() {
        Some(session) => builder.header("Authorization", &auth_header_value(&session.token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = response.status();
    if is_unauthorized(status) {
        handle_unauthorized();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_empty(response: gloo_net::http::Response) -> Result<(), ApiError> {
    let status = response.status();
    if is_unauthorized(status) {
        handle_unauthorized();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    Ok(())
}

/// `GET path`, decoding a JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::get(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with a JSON body, decoding a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::post(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `PUT path` with a JSON body, decoding a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::put(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `PATCH path` with a JSON body, decoding a JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::patch(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE path`; the backend answers 204 with no body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::delete(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_empty(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
