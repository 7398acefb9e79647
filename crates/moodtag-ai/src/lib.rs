//! Tag detection: a deterministic keyword classifier and an LLM-backed
//! classifier that falls back to a neutral result on any failure.

pub mod classifier;
pub mod config;
pub mod credentials;
pub mod detector;
pub mod error;
pub mod http;
pub mod keywords;
pub mod llm;

pub use classifier::KeywordClassifier;
pub use config::ModelConfig;
pub use credentials::CredentialCheck;
pub use detector::TagDetector;
pub use error::{DetectError, LlmError};
pub use http::{ChatMessage, ChatRequest, ChatResponse, CompletionClient, HttpCompletionClient};
pub use llm::ModelClassifier;
pub use moodtag_core::{DetectionResult, Sentiment, Tag};
