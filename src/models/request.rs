use crate::error::{ValidationError, MAX_PROMPT_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Style {
    Realistic,
    Artistic,
    Cartoon,
    DigitalArt,
    ThreeD,
    /// Any value the service accepts that this client doesn't know about.
    Other(String),
}

impl Style {
    pub const KNOWN: [Style; 5] = [
        Style::Realistic,
        Style::Artistic,
        Style::Cartoon,
        Style::DigitalArt,
        Style::ThreeD,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Style::Realistic => "realistic",
            Style::Artistic => "artistic",
            Style::Cartoon => "cartoon",
            Style::DigitalArt => "digital_art",
            Style::ThreeD => "3d",
            Style::Other(value) => value,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Realistic
    }
}

impl From<String> for Style {
    fn from(value: String) -> Self {
        match value.as_str() {
            "realistic" => Style::Realistic,
            "artistic" => Style::Artistic,
            "cartoon" => Style::Cartoon,
            "digital_art" => Style::DigitalArt,
            "3d" => Style::ThreeD,
            _ => Style::Other(value),
        }
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.as_str().to_string()
    }
}

impl FromStr for Style {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Style::from(s.trim().to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AspectRatio {
    Square,
    Widescreen,
    Vertical,
    Standard,
    Portrait,
    UltraWide,
    Other(String),
}

impl AspectRatio {
    pub const KNOWN: [AspectRatio; 6] = [
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::Standard,
        AspectRatio::Portrait,
        AspectRatio::UltraWide,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Portrait => "3:4",
            AspectRatio::UltraWide => "21:9",
            AspectRatio::Other(value) => value,
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

impl From<String> for AspectRatio {
    fn from(value: String) -> Self {
        match value.as_str() {
            "1:1" => AspectRatio::Square,
            "16:9" => AspectRatio::Widescreen,
            "9:16" => AspectRatio::Vertical,
            "4:3" => AspectRatio::Standard,
            "3:4" => AspectRatio::Portrait,
            "21:9" => AspectRatio::UltraWide,
            _ => AspectRatio::Other(value),
        }
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.as_str().to_string()
    }
}

impl FromStr for AspectRatio {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AspectRatio::from(s.trim().to_string()))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated submission. Built fresh for every submit and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    prompt: String,
    style: Style,
    ratio: AspectRatio,
}

impl GenerationRequest {
    /// Trims the prompt and checks it holds 1..=1000 characters.
    pub fn new(
        prompt: &str,
        style: Style,
        ratio: AspectRatio,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        let length = prompt.chars().count();
        if length > MAX_PROMPT_CHARS {
            return Err(ValidationError::TooLong { length });
        }

        Ok(Self {
            prompt: prompt.to_string(),
            style,
            ratio,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn ratio(&self) -> &AspectRatio {
        &self.ratio
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("prompt", self.prompt.as_str()),
            ("style", self.style.as_str()),
            ("ratio", self.ratio.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_prompt() {
        let request =
            GenerationRequest::new("  a red fox \n", Style::Cartoon, AspectRatio::Widescreen)
                .unwrap();
        assert_eq!(request.prompt(), "a red fox");
        assert_eq!(
            request.query_pairs(),
            [("prompt", "a red fox"), ("style", "cartoon"), ("ratio", "16:9")]
        );
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(
            GenerationRequest::new("", Style::default(), AspectRatio::default()),
            Err(ValidationError::EmptyPrompt)
        );
        assert_eq!(
            GenerationRequest::new(" \t\n ", Style::default(), AspectRatio::default()),
            Err(ValidationError::EmptyPrompt)
        );
    }

    #[test]
    fn test_length_limit() {
        let exact = "x".repeat(1000);
        assert!(GenerationRequest::new(&exact, Style::default(), AspectRatio::default()).is_ok());

        let over = "x".repeat(1001);
        assert_eq!(
            GenerationRequest::new(&over, Style::default(), AspectRatio::default()),
            Err(ValidationError::TooLong { length: 1001 })
        );

        // Surrounding whitespace doesn't count towards the limit.
        let padded = format!("   {}   ", exact);
        assert!(GenerationRequest::new(&padded, Style::default(), AspectRatio::default()).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let prompt = "é".repeat(1000);
        assert!(prompt.len() > 1000);
        assert!(GenerationRequest::new(&prompt, Style::default(), AspectRatio::default()).is_ok());
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let style: Style = "watercolor".parse().unwrap();
        assert_eq!(style, Style::Other("watercolor".into()));
        assert_eq!(style.as_str(), "watercolor");

        let ratio: AspectRatio = "3:2".parse().unwrap();
        assert_eq!(ratio.to_string(), "3:2");

        assert_eq!("3d".parse::<Style>().unwrap(), Style::ThreeD);
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Vertical);
    }

    #[test]
    fn test_serializes_as_plain_strings() {
        let request =
            GenerationRequest::new("cat", Style::DigitalArt, AspectRatio::Square).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "prompt": "cat", "style": "digital_art", "ratio": "1:1" })
        );
    }
}
