//! Remote preset resource client.
//!
//! The backend stores presets by name under `/api/prophet/presets`.
//! Reads return preset rows; mutations return either a success payload or
//! `{"error": "..."}`, which is surfaced verbatim as a backend rejection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::preset::PresetConfig;

use super::PresetError;
use super::ingest::PresetRecord;

/// Operations against the remote preset resource.
///
/// Implemented by [`HttpPresetApi`] for the real backend and by scripted
/// doubles in tests.
#[async_trait]
pub trait PresetApi {
    async fn list_presets(&self) -> Result<Vec<PresetRecord>, PresetError>;
    async fn get_preset(&self, name: &str) -> Result<PresetRecord, PresetError>;
    async fn create_preset(&self, name: &str, config: &PresetConfig) -> Result<(), PresetError>;
    async fn update_preset(&self, name: &str, config: &PresetConfig) -> Result<(), PresetError>;
    async fn delete_preset(&self, name: &str) -> Result<(), PresetError>;
}

/// `reqwest`-backed implementation of [`PresetApi`].
pub struct HttpPresetApi {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateBody<'a> {
    preset_name: &'a str,
    #[serde(flatten)]
    config: &'a PresetConfig,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpPresetApi {
    /// Build a client with the configured base URL and request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, PresetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PresetError::Fetch(format!("HTTP client init failed: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/prophet/presets", self.base_url)
    }

    fn preset_url(&self, name: &str) -> String {
        format!("{}/api/prophet/presets/{name}", self.base_url)
    }

    /// Extract the structured `{error}` message from a rejected mutation,
    /// falling back to the HTTP status.
    async fn rejection(response: Response) -> PresetError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(message) }) => PresetError::Backend(message),
            _ => PresetError::Backend(format!("Request failed with status {status}")),
        }
    }
}

#[async_trait]
impl PresetApi for HttpPresetApi {
    async fn list_presets(&self) -> Result<Vec<PresetRecord>, PresetError> {
        debug!(url = %self.collection_url(), "listing presets");
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset list request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(PresetError::Fetch(format!(
                "Preset list failed: {status} {body}"
            )));
        }

        response
            .json::<Vec<PresetRecord>>()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset list parse error: {e}")))
    }

    async fn get_preset(&self, name: &str) -> Result<PresetRecord, PresetError> {
        debug!(preset = name, "fetching preset");
        let response = self
            .client
            .get(self.preset_url(name))
            .send()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(PresetError::Fetch(format!(
                "Preset fetch failed: {status} {body}"
            )));
        }

        response
            .json::<PresetRecord>()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset parse error: {e}")))
    }

    async fn create_preset(&self, name: &str, config: &PresetConfig) -> Result<(), PresetError> {
        debug!(preset = name, "creating preset");
        let response = self
            .client
            .post(self.collection_url())
            .json(&CreateBody {
                preset_name: name,
                config,
            })
            .send()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset create request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn update_preset(&self, name: &str, config: &PresetConfig) -> Result<(), PresetError> {
        debug!(preset = name, "updating preset");
        let response = self
            .client
            .put(self.preset_url(name))
            .json(config)
            .send()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset update request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn delete_preset(&self, name: &str) -> Result<(), PresetError> {
        debug!(preset = name, "deleting preset");
        let response = self
            .client
            .delete(self.preset_url(name))
            .send()
            .await
            .map_err(|e| PresetError::Fetch(format!("Preset delete request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}
