use thiserror::Error;

/// Failure talking to the completion service.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// Why a model-backed classification could not produce a result.
///
/// Every variant ends in the same neutral fallback; the distinction only
/// matters for logging and for callers of `ModelClassifier::try_detect`.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("no model credential configured")]
    MissingCredential,
    #[error("completion request failed: {0}")]
    Transport(#[from] LlmError),
    #[error("completion returned no content")]
    EmptyContent,
    #[error("completion content is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("completion payload rejected: {0}")]
    InvalidPayload(String),
}
