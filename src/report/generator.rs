//! Report generation against a completion service.
//!
//! [`ReportGenerator`] is generic over the [`CompletionService`] seam so
//! tests can swap in a fake backend; production code uses
//! [`OpenAiService`]. One call to [`ReportGenerator::generate_report`]
//! performs exactly one request - no retries, no caching - and returns
//! the model's text unmodified, or a typed generation failure.

use super::{prompt, summary};
use crate::analyser::DatasetAnalysis;
use crate::config::ReportConfig;
use crate::error::{Error, Result};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
};
use std::future::Future;

/// A text-generation backend: send one prompt, get generated text back.
pub trait CompletionService {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Completion service backed by the OpenAI chat API.
pub struct OpenAiService {
    client: Client<OpenAIConfig>,
    config: ReportConfig,
}

impl OpenAiService {
    pub fn new(api_key: String, config: ReportConfig) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(openai_config),
            config,
        }
    }
}

impl CompletionService for OpenAiService {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages([message.into()])
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .build()?;

        tracing::debug!(model = %self.config.model, "sending report generation request");
        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| Error::Generation("no response content received".to_owned()))
    }
}

/// Turns an analysis into an executive report via one service call.
pub struct ReportGenerator<S> {
    service: S,
}

impl<S: CompletionService> ReportGenerator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The deterministic digest the prompt is built from.
    pub fn summarise(&self, analysis: &DatasetAnalysis) -> String {
        summary::summarise(analysis)
    }

    /// Generate the report. The response text passes through unmodified;
    /// any service fault comes back as [`Error::Generation`] carrying the
    /// underlying message.
    pub async fn generate_report(&self, analysis: &DatasetAnalysis) -> Result<String> {
        let digest = summary::summarise(analysis);
        let request = prompt::build_prompt(&digest);

        self.service.complete(&request).await.map_err(|e| match e {
            Error::Generation(_) => e,
            other => Error::Generation(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyser::analyse_df;
    use anyhow::Result as TestResult;
    use polars::prelude::*;
    use std::sync::{Arc, Mutex};

    struct CannedService {
        reply: String,
        seen_prompt: Arc<Mutex<Option<String>>>,
    }

    impl CannedService {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_owned(),
                seen_prompt: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl CompletionService for CannedService {
        async fn complete(&self, prompt: &str) -> Result<String> {
            if let Ok(mut seen) = self.seen_prompt.lock() {
                *seen = Some(prompt.to_owned());
            }
            Ok(self.reply.clone())
        }
    }

    struct FailingService;

    impl CompletionService for FailingService {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Err(Error::Other("insufficient quota".to_owned()))
        }
    }

    fn sample_analysis() -> TestResult<DatasetAnalysis> {
        let df = DataFrame::new(vec![
            Column::from(Series::new("amount".into(), vec![10.0, 20.0, 30.0])),
            Column::from(Series::new("category".into(), vec!["x", "y", "x"])),
        ])?;
        Ok(analyse_df(&df)?)
    }

    #[tokio::test]
    async fn test_report_text_passes_through_unmodified() -> TestResult<()> {
        let analysis = sample_analysis()?;
        let generator = ReportGenerator::new(CannedService::new("**Executive Summary**\n..."));

        let report = generator.generate_report(&analysis).await?;
        assert_eq!(report, "**Executive Summary**\n...");
        Ok(())
    }

    #[tokio::test]
    async fn test_prompt_contains_digest() -> TestResult<()> {
        let analysis = sample_analysis()?;
        let service = CannedService::new("ok");
        let seen_prompt = Arc::clone(&service.seen_prompt);
        let digest = summary::summarise(&analysis);

        ReportGenerator::new(service).generate_report(&analysis).await?;

        let seen = seen_prompt.lock().expect("lock").clone();
        let seen = seen.expect("service was called");
        assert!(seen.contains(&digest), "digest must be embedded verbatim");
        Ok(())
    }

    #[tokio::test]
    async fn test_failure_becomes_typed_generation_error() -> TestResult<()> {
        let analysis = sample_analysis()?;
        let before = analysis.clone();

        let result = ReportGenerator::new(FailingService)
            .generate_report(&analysis)
            .await;

        let err = result.expect_err("service failure must surface");
        assert!(matches!(err, Error::Generation(_)));
        assert!(
            err.to_string().contains("insufficient quota"),
            "underlying message preserved, got: {err}"
        );
        assert_eq!(analysis, before, "input analysis must not change");
        Ok(())
    }

    #[tokio::test]
    async fn test_generation_errors_pass_through_untouched() -> TestResult<()> {
        struct AuthFailure;
        impl CompletionService for AuthFailure {
            async fn complete(&self, _prompt: &str) -> Result<String> {
                Err(Error::Generation("invalid api key".to_owned()))
            }
        }

        let analysis = sample_analysis()?;
        let err = ReportGenerator::new(AuthFailure)
            .generate_report(&analysis)
            .await
            .expect_err("auth failure must surface");

        assert_eq!(err.to_string(), "Report generation failed: invalid api key");
        Ok(())
    }
}
