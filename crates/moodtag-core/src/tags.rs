//! Closed tag vocabulary and the detection result shared by every classifier.
//!
//! Wire names are snake_case and match the JSON reply shape the model-backed
//! classifier asks for: `{"tags": [...], "emotion_score": "positive|negative|neutral"}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownValue;

/// One of the ten tags a piece of text can carry.
///
/// `EmotionScore` is the sentiment marker; the other nine are topical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Gratitude,
    Achievement,
    Family,
    Stress,
    Work,
    Health,
    Growth,
    Relationships,
    Finance,
    EmotionScore,
}

impl Tag {
    /// Full vocabulary in canonical order: topical tags first, sentiment tag last.
    pub const ALL: [Tag; 10] = [
        Tag::Gratitude,
        Tag::Achievement,
        Tag::Family,
        Tag::Stress,
        Tag::Work,
        Tag::Health,
        Tag::Growth,
        Tag::Relationships,
        Tag::Finance,
        Tag::EmotionScore,
    ];

    /// The nine topical tags, in canonical order.
    pub const TOPICAL: [Tag; 9] = [
        Tag::Gratitude,
        Tag::Achievement,
        Tag::Family,
        Tag::Stress,
        Tag::Work,
        Tag::Health,
        Tag::Growth,
        Tag::Relationships,
        Tag::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gratitude => "gratitude",
            Self::Achievement => "achievement",
            Self::Family => "family",
            Self::Stress => "stress",
            Self::Work => "work",
            Self::Health => "health",
            Self::Growth => "growth",
            Self::Relationships => "relationships",
            Self::Finance => "finance",
            Self::EmotionScore => "emotion_score",
        }
    }

    pub fn is_sentiment(&self) -> bool {
        matches!(self, Self::EmotionScore)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownValue::Tag(s.to_string()))
    }
}

/// Coarse sentiment attached to the `emotion_score` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|sentiment| sentiment.as_str() == s)
            .ok_or_else(|| UnknownValue::Sentiment(s.to_string()))
    }
}

/// Tags detected in one piece of text.
///
/// `tags` holds no duplicates, and contains [`Tag::EmotionScore`] whenever
/// `emotion_score` is set. Both classifiers always set it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_score: Option<Sentiment>,
}

impl DetectionResult {
    /// Build a result from topical tags, appending the sentiment tag.
    ///
    /// Duplicate tags are dropped (first occurrence wins).
    pub fn new(tags: impl IntoIterator<Item = Tag>, sentiment: Sentiment) -> Self {
        let mut out: Vec<Tag> = Vec::new();
        for tag in tags {
            if !out.contains(&tag) {
                out.push(tag);
            }
        }
        if !out.contains(&Tag::EmotionScore) {
            out.push(Tag::EmotionScore);
        }
        Self {
            tags: out,
            emotion_score: Some(sentiment),
        }
    }

    /// The result returned whenever a classifier has nothing better to say:
    /// only the sentiment tag, with neutral sentiment.
    pub fn fallback() -> Self {
        Self {
            tags: vec![Tag::EmotionScore],
            emotion_score: Some(Sentiment::Neutral),
        }
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Topical tags only, in result order.
    pub fn topical(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().copied().filter(|t| !t.is_sentiment())
    }
}
