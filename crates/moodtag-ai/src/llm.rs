//! Model-backed tag detection.
//!
//! Asks a chat-completion model for a JSON verdict, validates it as an
//! untyped value, and only then turns it into a [`DetectionResult`]. Any
//! failure along the way (no credential, transport error, empty content,
//! bad JSON, bad shape) yields [`DetectionResult::fallback`].

use moodtag_core::{DetectionResult, Sentiment, Tag};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::{
    ChatMessage, ChatRequest, CompletionClient, CredentialCheck, DetectError, HttpCompletionClient,
    LlmError, ModelConfig,
};

// ── Prompt templates ──

pub const SYSTEM_PROMPT: &str = "\
You are a text analysis assistant. You identify relevant tags in short \
transcribed texts and always reply with strict JSON only, no markdown and no \
explanation.";

/// Prefix of the user message; the input text is appended verbatim.
pub const USER_PROMPT_TEMPLATE: &str = "\
Analyze the following text and identify which of these tags apply:
- gratitude
- achievement
- family
- stress
- work
- health
- growth
- relationships
- finance
- emotion_score (always include; rate the overall sentiment)

Reply with a JSON object of exactly this shape:
{\"tags\": [\"tag1\", \"tag2\"], \"emotion_score\": \"positive|negative|neutral\"}

Text: ";

pub fn build_user_prompt(text: &str) -> String {
    format!("{USER_PROMPT_TEMPLATE}{text}")
}

/// LLM-backed classifier with neutral fallback.
///
/// `C` performs the single outbound call; `K` decides whether the call is
/// attempted at all. Holds no state across calls.
pub struct ModelClassifier<C, K> {
    client: C,
    credentials: K,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ModelClassifier<HttpCompletionClient, ModelConfig> {
    /// HTTP-backed classifier whose credential check is "does `config` carry a key".
    pub fn from_config(config: ModelConfig) -> Result<Self, LlmError> {
        let client = HttpCompletionClient::new(&config)?;
        let (model, temperature, max_tokens) =
            (config.model.clone(), config.temperature, config.max_tokens);
        Ok(Self::new(client, config)
            .with_model(model)
            .with_temperature(temperature)
            .with_max_tokens(max_tokens))
    }
}

impl<C, K> ModelClassifier<C, K>
where
    C: CompletionClient,
    K: CredentialCheck,
{
    pub fn new(client: C, credentials: K) -> Self {
        Self {
            client,
            credentials,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Classify `text`. Never fails: every error becomes the fallback result.
    pub async fn detect(&self, text: &str) -> DetectionResult {
        match self.try_detect(text).await {
            Ok(result) => result,
            Err(e) => {
                match &e {
                    DetectError::MissingCredential => {
                        debug!("no model credential; using fallback result")
                    }
                    _ => warn!(error = %e, "model classification failed; using fallback result"),
                }
                DetectionResult::fallback()
            }
        }
    }

    /// Classify `text`, reporting why it failed instead of falling back.
    pub async fn try_detect(&self, text: &str) -> Result<DetectionResult, DetectError> {
        if !self.credentials.is_configured() {
            return Err(DetectError::MissingCredential);
        }

        let request = self.build_request(text);
        let response = self.client.complete(&request).await?;
        let content = response.first_content().ok_or(DetectError::EmptyContent)?;
        parse_payload(content)
    }

    /// The request sent for `text`: system prompt, then template + text.
    pub fn build_request(&self, text: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_user_prompt(text)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Parse model output as JSON and validate it.
pub fn parse_payload(content: &str) -> Result<DetectionResult, DetectError> {
    let value: Value = serde_json::from_str(content)?;
    validate_payload(&value)
}

/// Check the untyped payload and coerce it to a [`DetectionResult`].
///
/// `tags` must be an array and `emotion_score` one of the three sentiment
/// names. Array elements are not required to be tags: unknown or non-string
/// elements are dropped, duplicates collapse, and the sentiment tag is
/// appended if the model left it out.
pub fn validate_payload(value: &Value) -> Result<DetectionResult, DetectError> {
    let tags = value
        .get("tags")
        .and_then(Value::as_array)
        .ok_or_else(|| DetectError::InvalidPayload("`tags` is missing or not an array".into()))?;

    let sentiment: Sentiment = value
        .get("emotion_score")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DetectError::InvalidPayload("`emotion_score` is missing or not a string".into())
        })?
        .parse::<Sentiment>()
        .map_err(|e| DetectError::InvalidPayload(e.to_string()))?;

    let known = tags.iter().filter_map(|element| {
        let parsed = element.as_str().map(str::parse::<Tag>);
        match parsed {
            Some(Ok(tag)) => Some(tag),
            _ => {
                debug!(element = %element, "dropping unrecognised tag from model reply");
                None
            }
        }
    });

    Ok(DetectionResult::new(known, sentiment))
}
