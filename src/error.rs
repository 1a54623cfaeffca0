use thiserror::Error;

pub const MAX_PROMPT_CHARS: usize = 1000;

pub const DEFAULT_GENERATION_FAILURE: &str = "Failed to generate image";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty prompt")]
    EmptyPrompt,
    #[error("too long: {length} characters (max 1000)")]
    TooLong { length: usize },
}

#[derive(Debug, Error)]
pub enum ImageGenError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Generation error: {0}")]
    Generation(String),
    #[error("No image available for download")]
    NoImage,
    #[error("Download error: {0}")]
    Download(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImageGenError {
    /// Text shown in the shared error panel.
    pub fn user_message(&self) -> String {
        match self {
            ImageGenError::Validation(ValidationError::EmptyPrompt) => {
                "Please enter a prompt for image generation.".to_string()
            }
            ImageGenError::Validation(ValidationError::TooLong { .. }) => {
                format!("Prompt must be less than {} characters.", MAX_PROMPT_CHARS)
            }
            ImageGenError::Network(_) => "Network error occurred. Please try again.".to_string(),
            ImageGenError::Generation(msg) => msg.clone(),
            ImageGenError::NoImage => "No image available for download".to_string(),
            ImageGenError::Download(_) => "Failed to download image".to_string(),
            ImageGenError::Config(msg) => format!("Configuration error: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageGenError>;
