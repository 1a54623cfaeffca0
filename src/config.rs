use crate::error::{ImageGenError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub generate_path: String,
    pub health_path: String,
    pub styles_path: String,
    pub sizes_path: String,
    pub download_dir: PathBuf,
    /// `None` leaves timing entirely to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            generate_path: "/api/generate".to_string(),
            health_path: "/api/health".to_string(),
            styles_path: "/api/styles".to_string(),
            sizes_path: "/api/sizes".to_string(),
            download_dir: PathBuf::from("."),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("IMGEN_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(dir) = env::var("IMGEN_DOWNLOAD_DIR") {
            config.download_dir = PathBuf::from(dir);
        }
        config.timeout = env::var("IMGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ImageGenError::Config("base URL is empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ImageGenError::Config(format!(
                "base URL must start with http:// or https://, got {}",
                base
            )));
        }
        Ok(())
    }

    pub fn generate_url(&self) -> String {
        self.join(&self.generate_path)
    }

    pub fn health_url(&self) -> String {
        self.join(&self.health_path)
    }

    pub fn styles_url(&self) -> String {
        self.join(&self.styles_path)
    }

    pub fn sizes_url(&self) -> String {
        self.join(&self.sizes_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.generate_url(), "http://127.0.0.1:5000/api/generate");
        assert_eq!(config.health_url(), "http://127.0.0.1:5000/api/health");
        assert!(config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_join_trims_slashes() {
        let config = ClientConfig::new().with_base_url("https://images.example.com/");
        assert_eq!(config.styles_url(), "https://images.example.com/api/styles");
        assert_eq!(config.sizes_url(), "https://images.example.com/api/sizes");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        assert!(matches!(
            ClientConfig::new().with_base_url("").validate(),
            Err(ImageGenError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new().with_base_url("ftp://host").validate(),
            Err(ImageGenError::Config(_))
        ));
    }
}
