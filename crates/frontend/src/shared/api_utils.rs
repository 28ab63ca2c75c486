//! API utilities for frontend-backend communication
//!
//! URL construction and the authorized JSON request helpers every API
//! module goes through.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Uses the `DAILY_SHEET_API_BASE` value baked in at compile time when set,
/// otherwise the origin the page was served from (the backend is reverse
/// proxied under `/api`).
///
/// # Returns
/// - API base URL like "https://mis.example.org"
/// - Empty string if window is not available, which leaves URLs relative
pub fn api_base() -> String {
    if let Some(base) = option_env!("DAILY_SHEET_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/daily");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = with_auth(Request::get(&api_url(path)))
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST `body` as JSON to `path`. The response body is not read.
pub async fn post_json<B>(path: &str, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    Ok(())
}
