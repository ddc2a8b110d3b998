//! API utilities for frontend-backend communication
//!
//! Every request carries the session cookie (`credentials: include`).
//! Failures are turned into the backend's `message` when the body has one,
//! otherwise into the per-operation fallback text.

use crate::shared::config::config;
use contracts::shared::api_message::error_message;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{FormData, RequestCredentials};

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/recipes/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Public URL of a stored upload; absolute URLs pass through unchanged
pub fn upload_url(name: &str) -> String {
    if name.starts_with("http://") || name.starts_with("https://") || name.starts_with("blob:") {
        return name.to_string();
    }
    format!(
        "{}/{}",
        config().uploads.base_url.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

/// Resolves a response into its body text, or a human-readable error
async fn read_body(response: Response, fallback: &str) -> Result<String, String> {
    let ok = response.ok();
    let status = response.status();
    let url = response.url();
    let body = response.text().await.unwrap_or_default();
    if ok {
        Ok(body)
    } else {
        log::warn!("{} failed with HTTP {}", url, status);
        Err(error_message(&body, fallback))
    }
}

fn send_failed(e: gloo_net::Error, fallback: &str) -> String {
    log::error!("Failed to send request: {}", e);
    fallback.to_string()
}

pub fn parse_body<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, String> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response: {}", e);
        fallback.to_string()
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, String> {
    let response = with_session(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| send_failed(e, fallback))?;
    let body = read_body(response, fallback).await?;
    parse_body(&body, fallback)
}

#[derive(Debug, Clone, Copy)]
pub enum Method {
    Post,
    Put,
    Patch,
    Delete,
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    };
    with_session(builder)
}

/// Sends a JSON body, returns the raw response body
pub async fn send_json<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<String, String> {
    let request = builder(method, &api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request.send().await.map_err(|e| send_failed(e, fallback))?;
    read_body(response, fallback).await
}

/// Sends a request without a body
pub async fn send_empty(method: Method, path: &str, fallback: &str) -> Result<String, String> {
    let response = builder(method, &api_url(path))
        .send()
        .await
        .map_err(|e| send_failed(e, fallback))?;
    read_body(response, fallback).await
}

/// Sends a multipart form; the browser sets the boundary header
pub async fn send_form(
    method: Method,
    path: &str,
    form: FormData,
    fallback: &str,
) -> Result<String, String> {
    let request = builder(method, &api_url(path))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request.send().await.map_err(|e| send_failed(e, fallback))?;
    read_body(response, fallback).await
}

/// Body as `T` when it parses, `None` for empty or unexpected payloads
pub fn parse_optional<T: DeserializeOwned>(body: &str) -> Option<T> {
    serde_json::from_str(body).ok()
}
