//! Static trigger words for the keyword classifier.
//!
//! Every entry is lowercase: matching is plain substring containment against
//! the lowercased input, so a trigger also fires inside a longer word
//! (`"work"` matches `"workout"`).

use moodtag_core::Tag;

/// Topical tag → trigger words, in vocabulary order.
pub const KEYWORDS: &[(Tag, &[&str])] = &[
    (
        Tag::Gratitude,
        &[
            "grateful",
            "thankful",
            "thank you",
            "appreciate",
            "blessed",
            "gratitude",
        ],
    ),
    (
        Tag::Achievement,
        &[
            "achievement",
            "accomplished",
            "achieved",
            "milestone",
            "success",
            "promotion",
            "goal",
            "award",
        ],
    ),
    (
        Tag::Family,
        &[
            "family", "mom", "dad", "mother", "father", "sister", "brother", "parents",
            "children", "daughter", "husband", "wife",
        ],
    ),
    (
        Tag::Stress,
        &[
            "stress",
            "anxious",
            "anxiety",
            "overwhelmed",
            "pressure",
            "worried",
            "burnout",
            "deadline",
        ],
    ),
    (
        Tag::Work,
        &[
            "work", "job", "office", "boss", "meeting", "project", "career", "colleague",
        ],
    ),
    (
        Tag::Health,
        &[
            "health",
            "sick",
            "doctor",
            "exercise",
            "workout",
            "sleep",
            "pain",
            "hospital",
            "medication",
        ],
    ),
    (
        Tag::Growth,
        &[
            "learning", "learn", "growth", "skills", "improve", "progress", "course", "practice",
        ],
    ),
    (
        Tag::Relationships,
        &[
            "friend",
            "partner",
            "relationship",
            "dating",
            "boyfriend",
            "girlfriend",
            "social",
        ],
    ),
    (
        Tag::Finance,
        &[
            "money", "saving", "debt", "budget", "salary", "bills", "invest", "expenses", "loan",
        ],
    ),
];

/// Words that push the sentiment score up by one each.
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "grateful",
    "thankful",
    "excited",
    "proud",
    "joy",
    "love",
    "great",
    "wonderful",
    "amazing",
];

/// Words that push the sentiment score down by one each.
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "stress",
    "anxious",
    "worried",
    "tired",
    "sick",
    "frustrated",
    "upset",
    "lonely",
];

/// Trigger words for a topical tag. Empty for the sentiment tag.
pub fn keywords_for(tag: Tag) -> &'static [&'static str] {
    KEYWORDS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}
