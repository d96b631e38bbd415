//! REST API helpers for communicating with the processing service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the processing API is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into page-level error states without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Submission;

/// Collection endpoint; the trailing slash matters to the service router.
#[cfg(any(test, feature = "hydrate"))]
const SUBMISSIONS_ENDPOINT: &str = "/api/submissions/";

#[cfg(any(test, feature = "hydrate"))]
fn submission_endpoint(submission_id: &str) -> String {
    format!("/api/submissions/{submission_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Create a new submission via `POST /api/submissions/`.
///
/// Returns the full submission record echoed by the server, including the
/// assigned ID and initial status.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response body does not parse.
pub async fn submit_content(content: &str) -> Result<Submission, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        let resp = gloo_net::http::Request::post(SUBMISSIONS_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Submission>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err("not available on server".to_owned())
    }
}

/// Fetch one submission by ID via `GET /api/submissions/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response body does not parse.
pub async fn get_submission_status(submission_id: &str) -> Result<Submission, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = submission_endpoint(submission_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Submission>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the full submission history via `GET /api/submissions/`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response body does not parse.
pub async fn list_submissions() -> Result<Vec<Submission>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SUBMISSIONS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<Submission>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
