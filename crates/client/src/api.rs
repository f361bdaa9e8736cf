//! HTTP client for the folio API.
//!
//! Decodes the `{ "data": ... }` success envelope and converts non-2xx
//! responses into the [`ClientError`] taxonomy using the server's
//! `{ "message": ... }` error bodies.

use folio_core::types::DbId;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::model::{Project, ProjectDraft};

/// Errors surfaced by API calls, classified so the controller can react
/// differently to rejected input, missing records, and an unreachable
/// server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the submitted fields (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// The record no longer exists on the server (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS,
    /// timeout, malformed body).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Success envelope: every 2xx body wraps its payload in `data`.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Error envelope: every non-2xx body carries a human-readable `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slashes are
    /// tolerated and stripped).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// GET /projects
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self
            .http
            .get(format!("{}/projects", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST /projects
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ClientError> {
        let response = self
            .http
            .post(format!("{}/projects", self.base_url))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PUT /projects/{id}
    pub async fn update_project(
        &self,
        id: DbId,
        draft: &ProjectDraft,
    ) -> Result<Project, ClientError> {
        let response = self
            .http
            .put(format!("{}/projects/{id}", self.base_url))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// DELETE /projects/{id}
    pub async fn delete_project(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/projects/{id}", self.base_url))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Unwrap a success envelope or classify the error response.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        if response.status().is_success() {
            let envelope: DataEnvelope<T> = response.json().await?;
            Ok(envelope.data)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Build a [`ClientError`] from a non-2xx response, preferring the
    /// server's own message when the body parses.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}
