//! Configuration for the report-generation model call.

use serde::{Deserialize, Serialize};

/// Parameters for the single chat-completion request behind a report.
///
/// The defaults favour a reproducible, factual tone: a low temperature and
/// a bounded output length.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_owned(),
            temperature: 0.3,
            max_tokens: 600,
        }
    }
}

impl ReportConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, 600);
    }

    #[test]
    fn test_with_model() {
        let config = ReportConfig::default().with_model("gpt-4o");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_tokens, 600);
    }
}
