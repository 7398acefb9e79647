use thiserror::Error;

/// A string that is not a member of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownValue {
    #[error("unknown tag: {0:?}")]
    Tag(String),

    #[error("unknown sentiment: {0:?} (expected positive, negative or neutral)")]
    Sentiment(String),
}
