pub mod error;
pub mod tags;

pub use error::UnknownValue;
pub use tags::{DetectionResult, Sentiment, Tag};
