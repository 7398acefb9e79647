//! Plain-text rendering for detection results and the tag vocabulary.

use moodtag_ai::keywords::{NEGATIVE_WORDS, POSITIVE_WORDS, keywords_for};
use moodtag_core::{DetectionResult, Tag};

const MAX_LIST_ITEMS: usize = 10;

/// Two-line summary: the tags, then the sentiment.
pub fn render_result(result: &DetectionResult) -> String {
    let tags: Vec<&str> = result.tags.iter().map(|t| t.as_str()).collect();
    let emotion = result
        .emotion_score
        .map(|s| s.as_str())
        .unwrap_or("(none)");
    format!("tags:    {}\nemotion: {emotion}", tags.join(", "))
}

/// One line per tag with its trigger words.
pub fn render_vocabulary() -> String {
    let width = Tag::ALL
        .iter()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for tag in Tag::ALL {
        let detail = if tag.is_sentiment() {
            format!(
                "+ {}  / - {}",
                format_list(POSITIVE_WORDS),
                format_list(NEGATIVE_WORDS)
            )
        } else {
            format_list(keywords_for(tag))
        };
        out.push_str(&format!("{:<width$}  {detail}\n", tag.as_str()));
    }
    out
}

fn format_list(words: &[&str]) -> String {
    if words.len() <= MAX_LIST_ITEMS {
        words.join(", ")
    } else {
        format!(
            "{}, … ({} more)",
            words[..MAX_LIST_ITEMS].join(", "),
            words.len() - MAX_LIST_ITEMS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodtag_core::Sentiment;

    #[test]
    fn result_lines() {
        let result = DetectionResult::new([Tag::Family, Tag::Stress], Sentiment::Negative);
        assert_eq!(
            render_result(&result),
            "tags:    family, stress, emotion_score\nemotion: negative"
        );
    }

    #[test]
    fn result_without_sentiment() {
        let result = DetectionResult {
            tags: vec![],
            emotion_score: None,
        };
        assert!(render_result(&result).ends_with("emotion: (none)"));
    }

    #[test]
    fn vocabulary_has_a_line_per_tag() {
        let text = render_vocabulary();
        assert_eq!(text.lines().count(), Tag::ALL.len());
        for (line, tag) in text.lines().zip(Tag::ALL) {
            assert!(line.starts_with(tag.as_str()), "{line:?}");
        }
        assert!(text.lines().last().unwrap().contains("+ happy"));
    }

    #[test]
    fn long_lists_are_truncated() {
        let words = ["a"; 12];
        assert_eq!(format_list(&words), "a, a, a, a, a, a, a, a, a, a, … (2 more)");
        assert_eq!(format_list(&["x", "y"]), "x, y");
    }
}
