use crate::error::MAX_PROMPT_CHARS;

/// Counts above this are shown as a warning.
pub const WARNING_THRESHOLD: usize = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Muted,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn for_count(count: usize) -> Self {
        if count > MAX_PROMPT_CHARS {
            CounterLevel::Danger
        } else if count > WARNING_THRESHOLD {
            CounterLevel::Warning
        } else {
            CounterLevel::Muted
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CounterLevel::Muted => "form-text text-muted",
            CounterLevel::Warning => "form-text text-warning",
            CounterLevel::Danger => "form-text text-danger",
        }
    }
}

/// Character counter shown under the prompt. It only signals; typing past the
/// limit is never blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub count: usize,
    pub level: CounterLevel,
}

impl CharCount {
    /// Measures the raw field text, untrimmed.
    pub fn measure(text: &str) -> Self {
        let count = text.chars().count();
        Self {
            count,
            level: CounterLevel::for_count(count),
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{} characters", self.count, MAX_PROMPT_CHARS)
    }
}
