//! HTTP client for the remote categories service
//!
//! `send_request` is the single dispatcher; commands carry their own verb, URL
//! and body.

use crate::shared::api_utils::join_url;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a001_category::commands::{list_path, CategoryCommand, HttpMethod};
use contracts::shared::remote_error::message_from_body;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

/// Shown when the remote gives no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error inesperado";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for the user: the remote's own text when present, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Send one JSON request and fail on non-2xx responses
pub async fn send_request<B: Serialize>(
    method: HttpMethod,
    url: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, url);

    let builder = match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
    .header("Accept", "application/json");

    // `json` also sets `Content-Type: application/json`
    let sent = match body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Serialize(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: message_from_body(&text),
        });
    }

    Ok(response)
}

/// URL of the collection endpoint under `base`
pub fn list_url(base: &str) -> String {
    join_url(base, &list_path())
}

/// Fetch all categories
pub async fn fetch_categories(base: &str) -> Result<Vec<Category>, ApiError> {
    let url = list_url(base);
    let response = send_request::<()>(HttpMethod::Get, &url, None).await?;
    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Run one mutating command; the response body is not used
pub async fn execute(base: &str, command: &CategoryCommand) -> Result<(), ApiError> {
    let url = command.url(base);
    send_request(command.method(), &url, command.payload()).await?;
    log::info!("{} {} succeeded", command.method(), url);
    Ok(())
}
