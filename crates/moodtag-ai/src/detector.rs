//! Common interface over both classifiers, so callers can pick one at runtime.

use async_trait::async_trait;
use moodtag_core::DetectionResult;

use crate::{CompletionClient, CredentialCheck, KeywordClassifier, ModelClassifier};

#[async_trait]
pub trait TagDetector: Send + Sync {
    /// Short name for logs and CLI output.
    fn name(&self) -> &'static str;

    /// Classify `text`. Infallible: implementations absorb their own failures.
    async fn detect(&self, text: &str) -> DetectionResult;
}

#[async_trait]
impl TagDetector for KeywordClassifier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn detect(&self, text: &str) -> DetectionResult {
        KeywordClassifier::detect(self, text)
    }
}

#[async_trait]
impl<C, K> TagDetector for ModelClassifier<C, K>
where
    C: CompletionClient,
    K: CredentialCheck,
{
    fn name(&self) -> &'static str {
        "model"
    }

    async fn detect(&self, text: &str) -> DetectionResult {
        ModelClassifier::detect(self, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChatRequest, ChatResponse, LlmError};
    use moodtag_core::{Sentiment, Tag};

    struct Unreachable;

    #[async_trait]
    impl CompletionClient for Unreachable {
        async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, LlmError> {
            Err(LlmError::Server {
                status: 502,
                body: "bad gateway".into(),
            })
        }
    }

    fn detectors() -> Vec<Box<dyn TagDetector>> {
        vec![
            Box::new(KeywordClassifier::new()),
            Box::new(ModelClassifier::new(Unreachable, || true)),
        ]
    }

    #[tokio::test]
    async fn both_detectors_share_the_contract() {
        for detector in detectors() {
            let result = detector.detect("").await;
            assert!(result.contains(Tag::EmotionScore), "{}", detector.name());
            assert_eq!(result.emotion_score, Some(Sentiment::Neutral));
        }
    }

    #[tokio::test]
    async fn keyword_detector_through_trait() {
        let detector: Box<dyn TagDetector> = Box::new(KeywordClassifier::new());
        let result = detector.detect("I am saving money and paying off my debt.").await;
        assert!(result.contains(Tag::Finance));
        assert_eq!(detector.name(), "keyword");
    }

    #[tokio::test]
    async fn model_detector_falls_back_through_trait() {
        let detector: Box<dyn TagDetector> = Box::new(ModelClassifier::new(Unreachable, || true));
        let result = detector.detect("I am so happy and grateful").await;
        assert_eq!(result, DetectionResult::fallback());
        assert_eq!(detector.name(), "model");
    }
}
