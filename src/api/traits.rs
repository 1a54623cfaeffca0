use crate::{
    error::Result,
    models::{ApiResponse, GenerationRequest, SizesResponse, StylesResponse},
};
use async_trait::async_trait;

/// The remote generation service, seen from the form.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    /// Issues one generate call. Any response with a decodable body is `Ok`,
    /// whatever its status; only transport failures are errors.
    async fn generate(&self, request: &GenerationRequest) -> Result<ApiResponse>;

    async fn health(&self) -> Result<serde_json::Value>;

    async fn styles(&self) -> Result<StylesResponse>;

    async fn sizes(&self) -> Result<SizesResponse>;
}
