//! HTTP helpers for loading notebook documents.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): the document area renders its loading state and the
//! fetch only runs after hydration, so the stub just reports unavailability.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a `DocumentError` whose `Display` is what the
//! viewer shows. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use notebook::{Document, DocumentError};

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, status_text: &str) -> DocumentError {
    DocumentError::Status { status, status_text: status_text.to_owned() }
}

/// Decode a fetched body, mapping a non-success status to an error first.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response(ok: bool, status: u16, status_text: &str, body: &str) -> Result<Document, DocumentError> {
    if !ok {
        return Err(status_error(status, status_text));
    }
    Document::parse(body)
}

/// Fetch and parse the notebook at `location` (already an `.ipynb` path).
///
/// # Errors
///
/// `Network` when no response arrived, `Status` for a non-2xx answer and
/// `Parse` when the body is not a notebook.
pub async fn fetch_document(location: &str) -> Result<Document, DocumentError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(location)
            .send()
            .await
            .map_err(|e| DocumentError::Network(e.to_string()))?;
        let body = if resp.ok() {
            resp.text().await.map_err(|e| DocumentError::Network(e.to_string()))?
        } else {
            String::new()
        };
        decode_response(resp.ok(), resp.status(), &resp.status_text(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location;
        Err(DocumentError::Network("not available on server".to_owned()))
    }
}
