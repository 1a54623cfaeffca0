use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// JSON body returned by the generate endpoint, on success and on failure.
/// Only `success`, `image`, `prompt` and `message` drive the form; anything
/// else the service adds is kept untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, deserialize_with = "null_as_false")]
    pub success: bool,
    pub image: Option<String>, // Base64 encoded PNG
    pub prompt: Option<String>,
    pub message: Option<String>,
    pub error: Option<serde_json::Value>,
    pub style: Option<serde_json::Value>,
    pub size: Option<serde_json::Value>,
    pub generated_at: Option<serde_json::Value>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// HTTP status plus decoded body of a generate call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: GenerationResult,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The last successful generation, kept for the download action.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedImage {
    pub data: String,
    pub prompt: String,
    pub cached_at: DateTime<Utc>,
}

impl CachedImage {
    pub fn new(data: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            prompt: prompt.into(),
            cached_at: Utc::now(),
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.data)
    }

    pub fn alt_text(&self) -> String {
        format!("Generated image: {}", self.prompt)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Option<String>,
    pub service: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylesResponse {
    #[serde(default)]
    pub styles: Vec<StyleOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizesResponse {
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
}
