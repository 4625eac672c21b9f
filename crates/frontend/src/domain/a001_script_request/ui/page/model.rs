//! Script Request - Model Layer
//!
//! Backend client behind the `ScriptApi` seam and the two request flows
//! (health probe, script generation) expressed in terms of it.

use super::state::{ConnectivityStatus, SubmissionOutcome};
use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::system::health::HealthResponse;
use contracts::usecases::u601_generate_script::{GenerateScriptResponse, ProductDraft};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received at all
    #[error("{0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[async_trait(?Send)]
pub trait ScriptApi {
    async fn health(&self) -> Result<HealthResponse, ApiError>;

    async fn generate_script(&self, draft: &ProductDraft)
        -> Result<GenerateScriptResponse, ApiError>;
}

/// `ScriptApi` over the browser fetch API
#[derive(Debug, Clone)]
pub struct HttpScriptApi {
    base_url: String,
}

impl HttpScriptApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        log::debug!("Response status: {}", response.status());
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ScriptApi for HttpScriptApi {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = api_url(&self.base_url, "/health");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn generate_script(
        &self,
        draft: &ProductDraft,
    ) -> Result<GenerateScriptResponse, ApiError> {
        let url = api_url(&self.base_url, "/generate-script");
        log::debug!("Sending request to: {}", url);
        log::debug!("Data: {:?}", draft);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

/// Run the health probe once and classify the backend
pub async fn probe_connectivity(api: &dyn ScriptApi) -> ConnectivityStatus {
    let result = api.health().await;
    if let Err(err) = &result {
        log::warn!("Health check failed: {}", err);
    }
    let status = ConnectivityStatus::from_probe(result);
    log::info!("Backend status: {}", status.label());
    status
}

/// Send the draft and turn whatever comes back into the final outcome
pub async fn request_generation(api: &dyn ScriptApi, draft: &ProductDraft) -> SubmissionOutcome {
    let result = api.generate_script(draft).await;
    match &result {
        Ok(body) => log::debug!(
            "Response data: success={}, similar_products={}",
            body.success,
            body.similar_products.len()
        ),
        Err(err) => log::error!("Fetch error: {}", err),
    }
    SubmissionOutcome::from_response(result)
}
