//! Error handling utilities for the remote stores

use gallery_core::DomainError;

/// Convert a transport-level failure into a DomainError
pub fn map_transport_error(e: reqwest::Error) -> DomainError {
    DomainError::RemoteError(e.to_string())
}

/// Turn a non-success response into a DomainError with status and body detail
pub async fn response_error(response: reqwest::Response) -> DomainError {
    DomainError::RemoteError(error_detail(response).await)
}

/// Read "status: body" detail out of a failed response
pub async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {body}")
    }
}

/// Check a response for success, consuming it into an error otherwise
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(response_error(response).await)
    }
}
