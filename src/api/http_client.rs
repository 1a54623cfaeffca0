use crate::{
    api::traits::GenerationApi,
    config::ClientConfig,
    error::{ImageGenError, Result},
    models::{ApiResponse, GenerationRequest, GenerationResult, SizesResponse, StylesResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct HttpGenerationApi {
    client: Client,
    config: ClientConfig,
}

impl HttpGenerationApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ImageGenError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageGenError::Network(format!("GET {} failed: {}", url, e)))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ImageGenError::Network(format!("Invalid JSON from {}: {}", url, e)))
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<ApiResponse> {
        let url = self.config.generate_url();
        log::debug!(
            "GET {} style={} ratio={}",
            url,
            request.style(),
            request.ratio()
        );

        let response = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| ImageGenError::Network(format!("Generate request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .json::<GenerationResult>()
            .await
            .map_err(|e| ImageGenError::Network(format!("Invalid generate response: {}", e)))?;

        Ok(ApiResponse { status, body })
    }

    async fn health(&self) -> Result<serde_json::Value> {
        self.get_json(&self.config.health_url()).await
    }

    async fn styles(&self) -> Result<StylesResponse> {
        self.get_json(&self.config.styles_url()).await
    }

    async fn sizes(&self) -> Result<SizesResponse> {
        self.get_json(&self.config.sizes_url()).await
    }
}
