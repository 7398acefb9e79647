//! Keyword-based tag detection.
//!
//! Lowercases the input once, then checks each topical tag's trigger words
//! by substring containment. Sentiment is a signed count of positive and
//! negative signal words. Pure and total: every input yields a result.

use moodtag_core::{DetectionResult, Sentiment, Tag};

use crate::keywords::{KEYWORDS, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Deterministic keyword classifier.
///
/// Holds references to static tables only, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    keywords: &'static [(Tag, &'static [&'static str])],
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    /// Classifier over the built-in tables in [`crate::keywords`].
    pub fn new() -> Self {
        Self::with_tables(KEYWORDS, POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    /// Classifier over caller-supplied tables. Words must be lowercase.
    pub fn with_tables(
        keywords: &'static [(Tag, &'static [&'static str])],
        positive: &'static [&'static str],
        negative: &'static [&'static str],
    ) -> Self {
        Self {
            keywords,
            positive,
            negative,
        }
    }

    /// Detect topical tags and sentiment in `text`.
    ///
    /// Topical tags come out in vocabulary order, followed by
    /// [`Tag::EmotionScore`], which is always present.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let lower = text.to_lowercase();

        let topical = Tag::TOPICAL
            .into_iter()
            .filter(|&tag| self.matches(tag, &lower));

        let score = score_sentiment(&lower, self.positive, self.negative);
        DetectionResult::new(topical, sentiment_from_score(score))
    }

    /// Whether any trigger word for `tag` occurs in the already-lowercased text.
    fn matches(&self, tag: Tag, lower: &str) -> bool {
        self.keywords
            .iter()
            .filter(|(t, _)| *t == tag)
            .flat_map(|(_, words)| words.iter())
            .any(|word| lower.contains(word))
    }
}

/// +1 per positive word present, −1 per negative word present.
///
/// Each word counts once regardless of how often it occurs. `lower` must
/// already be lowercased.
pub fn score_sentiment(lower: &str, positive: &[&str], negative: &[&str]) -> i32 {
    let pos = positive.iter().filter(|w| lower.contains(*w)).count() as i32;
    let neg = negative.iter().filter(|w| lower.contains(*w)).count() as i32;
    pos - neg
}

pub fn sentiment_from_score(score: i32) -> Sentiment {
    match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> DetectionResult {
        KeywordClassifier::new().detect(text)
    }

    #[test]
    fn gratitude_and_achievement_are_positive() {
        let result = detect("I am so happy and grateful for my recent achievement!");
        assert!(result.contains(Tag::EmotionScore));
        assert!(result.contains(Tag::Gratitude));
        assert!(result.contains(Tag::Achievement));
        assert_eq!(result.emotion_score, Some(Sentiment::Positive));
    }

    #[test]
    fn family_stress_is_negative() {
        let result = detect("My family is causing me a lot of stress lately.");
        assert!(result.contains(Tag::Family));
        assert!(result.contains(Tag::Stress));
        assert_eq!(result.emotion_score, Some(Sentiment::Negative));
    }

    #[test]
    fn plain_work_is_neutral() {
        let result = detect("I went to work and finished my project.");
        assert!(result.contains(Tag::Work));
        assert!(!result.contains(Tag::Stress));
        assert_eq!(result.emotion_score, Some(Sentiment::Neutral));
    }

    #[test]
    fn sick_and_stressed() {
        let result = detect("I have been feeling sick and stressed.");
        assert!(result.contains(Tag::Health));
        assert!(result.contains(Tag::Stress));
        assert_eq!(result.emotion_score, Some(Sentiment::Negative));
    }

    #[test]
    fn learning_and_friends() {
        let result = detect("I am learning new skills and making new friends.");
        assert!(result.contains(Tag::Growth));
        assert!(result.contains(Tag::Relationships));
        assert_eq!(result.emotion_score, Some(Sentiment::Neutral));
    }

    #[test]
    fn saving_money() {
        let result = detect("I am saving money and paying off my debt.");
        assert!(result.contains(Tag::Finance));
        assert_eq!(result.emotion_score, Some(Sentiment::Neutral));
    }

    #[test]
    fn empty_text_yields_sentiment_tag_only() {
        let result = detect("");
        assert_eq!(result, DetectionResult::fallback());
    }

    #[test]
    fn sentiment_tag_always_last_and_present() {
        for text in [
            "",
            "   ",
            "nothing to see here",
            "My boss, my mom and my money",
            "ÜBER STRESS",
            "😀 grateful 🙏",
        ] {
            let result = detect(text);
            assert_eq!(result.tags.last(), Some(&Tag::EmotionScore), "{text:?}");
            assert!(result.emotion_score.is_some(), "{text:?}");
        }
    }

    #[test]
    fn tags_follow_vocabulary_order() {
        // Mentions finance first and gratitude last; output is still vocabulary order.
        let result = detect("Paid my debt, talked to my boss, and I'm thankful.");
        assert_eq!(
            result.tags,
            vec![Tag::Gratitude, Tag::Work, Tag::Finance, Tag::EmotionScore]
        );
    }

    #[test]
    fn each_tag_appears_once() {
        let result = detect("work work WORK job office meeting");
        assert_eq!(result.tags, vec![Tag::Work, Tag::EmotionScore]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = detect("MY FAMILY IS GREAT");
        assert!(result.contains(Tag::Family));
        assert_eq!(result.emotion_score, Some(Sentiment::Positive));
    }

    #[test]
    fn matching_is_substring_not_word_boundary() {
        // "workout" contains "work".
        let result = detect("Morning workout done");
        assert!(result.contains(Tag::Work));
        assert!(result.contains(Tag::Health));
    }

    #[test]
    fn balanced_signals_are_neutral() {
        let result = detect("I feel great but also sad.");
        assert_eq!(result.emotion_score, Some(Sentiment::Neutral));
    }

    #[test]
    fn repeated_signal_word_counts_once() {
        // One positive word repeated vs. two distinct negative words.
        let result = detect("happy happy happy but tired and upset");
        assert_eq!(result.emotion_score, Some(Sentiment::Negative));
    }

    #[test]
    fn score_thresholds() {
        assert_eq!(sentiment_from_score(3), Sentiment::Positive);
        assert_eq!(sentiment_from_score(1), Sentiment::Positive);
        assert_eq!(sentiment_from_score(0), Sentiment::Neutral);
        assert_eq!(sentiment_from_score(-1), Sentiment::Negative);
    }

    #[test]
    fn score_counts_distinct_words() {
        let score = score_sentiment("happy and proud, but sad", &["happy", "proud"], &["sad"]);
        assert_eq!(score, 1);
    }

    #[test]
    fn custom_tables() {
        const TABLE: &[(Tag, &[&str])] = &[(Tag::Health, &["yoga"])];
        let clf = KeywordClassifier::with_tables(TABLE, &["calm"], &[]);
        let result = clf.detect("Yoga keeps me calm at work");
        // Only the supplied table is consulted.
        assert_eq!(result.tags, vec![Tag::Health, Tag::EmotionScore]);
        assert_eq!(result.emotion_score, Some(Sentiment::Positive));
    }
}
