//! # Sample content for the lesson, dictionary and practice tabs
//!
//! Everything here is static demo data. The only logic is filtering: the
//! dictionary narrows [`SIGNS`] by search text, category and difficulty, and the
//! lessons tab groups [`LESSONS`] by category and reports completion progress.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// CSS modifier for the difficulty badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "badge badge--beginner",
            Difficulty::Intermediate => "badge badge--intermediate",
            Difficulty::Advanced => "badge badge--advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// A category shown as a filter chip. `total` is the advertised size of the
/// full dictionary, not of the sample below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub total: u32,
}

pub const SIGN_CATEGORIES: [Category; 7] = [
    Category { id: "basics", name: "Basics", total: 120 },
    Category { id: "numbers", name: "Numbers", total: 50 },
    Category { id: "family", name: "Family", total: 80 },
    Category { id: "emotions", name: "Emotions", total: 60 },
    Category { id: "food", name: "Food", total: 150 },
    Category { id: "colors", name: "Colors", total: 25 },
    Category { id: "animals", name: "Animals", total: 100 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignEntry {
    pub id: u32,
    pub word: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub favorite: bool,
    pub description: &'static str,
}

pub const SIGNS: [SignEntry; 10] = [
    SignEntry { id: 1, word: "Hello", category: "basics", difficulty: Difficulty::Beginner, favorite: true, description: "Common greeting sign" },
    SignEntry { id: 2, word: "Thank You", category: "basics", difficulty: Difficulty::Beginner, favorite: false, description: "Express gratitude" },
    SignEntry { id: 3, word: "Family", category: "family", difficulty: Difficulty::Beginner, favorite: true, description: "Group of related people" },
    SignEntry { id: 4, word: "Happy", category: "emotions", difficulty: Difficulty::Beginner, favorite: false, description: "Feeling of joy" },
    SignEntry { id: 5, word: "Mother", category: "family", difficulty: Difficulty::Beginner, favorite: false, description: "Female parent" },
    SignEntry { id: 6, word: "Water", category: "food", difficulty: Difficulty::Beginner, favorite: false, description: "Clear liquid for drinking" },
    SignEntry { id: 7, word: "Red", category: "colors", difficulty: Difficulty::Beginner, favorite: true, description: "Primary color" },
    SignEntry { id: 8, word: "Cat", category: "animals", difficulty: Difficulty::Beginner, favorite: false, description: "Domestic feline animal" },
    SignEntry { id: 9, word: "One", category: "numbers", difficulty: Difficulty::Beginner, favorite: false, description: "Number 1" },
    SignEntry { id: 10, word: "Please", category: "basics", difficulty: Difficulty::Beginner, favorite: false, description: "Polite request" },
];

/// Dictionary filter. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignFilter {
    pub search: String,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl SignFilter {
    pub fn matches(&self, sign: &SignEntry) -> bool {
        // Whitespace is part of the query: " " matches multi-word signs only.
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty() || sign.word.to_lowercase().contains(&search);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| sign.category == category);
        let matches_difficulty = self
            .difficulty
            .map_or(true, |difficulty| sign.difficulty == difficulty);
        matches_search && matches_category && matches_difficulty
    }
}

pub fn filter_signs<'a>(signs: &'a [SignEntry], filter: &SignFilter) -> Vec<&'a SignEntry> {
    signs.iter().filter(|sign| filter.matches(sign)).collect()
}

pub const LESSON_CATEGORIES: [Category; 5] = [
    Category { id: "basics", name: "Basics", total: 12 },
    Category { id: "numbers", name: "Numbers", total: 8 },
    Category { id: "family", name: "Family", total: 15 },
    Category { id: "emotions", name: "Emotions", total: 10 },
    Category { id: "daily", name: "Daily Life", total: 20 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub category: &'static str,
    pub title: &'static str,
    pub minutes: u32,
    pub completed: bool,
    pub locked: bool,
    pub difficulty: Difficulty,
}

pub const LESSONS: [Lesson; 14] = [
    Lesson { id: 1, category: "basics", title: "Hello & Goodbye", minutes: 5, completed: true, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 2, category: "basics", title: "Thank You & Please", minutes: 4, completed: true, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 3, category: "basics", title: "Yes & No", minutes: 3, completed: true, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 4, category: "basics", title: "My Name Is...", minutes: 6, completed: false, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 5, category: "basics", title: "Basic Questions", minutes: 8, completed: false, locked: true, difficulty: Difficulty::Intermediate },
    Lesson { id: 6, category: "numbers", title: "Numbers 1-10", minutes: 7, completed: true, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 7, category: "numbers", title: "Numbers 11-20", minutes: 6, completed: false, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 8, category: "numbers", title: "Counting Practice", minutes: 5, completed: false, locked: true, difficulty: Difficulty::Intermediate },
    Lesson { id: 9, category: "family", title: "Parents & Siblings", minutes: 8, completed: false, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 10, category: "family", title: "Extended Family", minutes: 10, completed: false, locked: true, difficulty: Difficulty::Intermediate },
    Lesson { id: 11, category: "emotions", title: "Happy & Sad", minutes: 5, completed: false, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 12, category: "emotions", title: "Angry & Surprised", minutes: 6, completed: false, locked: true, difficulty: Difficulty::Beginner },
    Lesson { id: 13, category: "daily", title: "Food & Drinks", minutes: 12, completed: false, locked: false, difficulty: Difficulty::Beginner },
    Lesson { id: 14, category: "daily", title: "Home & Furniture", minutes: 15, completed: false, locked: true, difficulty: Difficulty::Intermediate },
];

pub fn lessons_in(category: &str) -> Vec<&'static Lesson> {
    LESSONS.iter().filter(|lesson| lesson.category == category).collect()
}

/// Completed and total sample lessons in `category`.
pub fn lesson_progress(category: &str) -> (usize, usize) {
    let lessons = lessons_in(category);
    let completed = lessons.iter().filter(|lesson| lesson.completed).count();
    (completed, lessons.len())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Analyzed,
    Processing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PracticeUpload {
    pub id: u32,
    pub name: &'static str,
    pub when: &'static str,
    pub status: UploadStatus,
    pub score: Option<u8>,
}

pub const RECENT_UPLOADS: [PracticeUpload; 4] = [
    PracticeUpload { id: 1, name: "Hello Practice", when: "2 hours ago", status: UploadStatus::Analyzed, score: Some(85) },
    PracticeUpload { id: 2, name: "Numbers 1-10", when: "1 day ago", status: UploadStatus::Processing, score: None },
    PracticeUpload { id: 3, name: "Family Signs", when: "2 days ago", status: UploadStatus::Analyzed, score: Some(92) },
    PracticeUpload { id: 4, name: "Thank You", when: "3 days ago", status: UploadStatus::Analyzed, score: Some(78) },
];

pub const PRACTICE_CATEGORIES: [(&str, &str); 4] = [
    ("Basic Signs", "Practice fundamental ISL signs"),
    ("Numbers", "Number practice sessions"),
    ("Family Signs", "Family-related vocabulary"),
    ("Emotions", "Express feelings and emotions"),
];

/// CSS class for a feedback score: 80+ good, 60+ fair, else poor.
pub fn score_class(score: u8) -> &'static str {
    if score >= 80 {
        "score score--good"
    } else if score >= 60 {
        "score score--fair"
    } else {
        "score score--poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(signs: Vec<&SignEntry>) -> Vec<&'static str> {
        signs.into_iter().map(|sign| sign.word).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_signs(&SIGNS, &SignFilter::default()).len(), SIGNS.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = SignFilter {
            search: "TH".to_string(),
            ..SignFilter::default()
        };
        assert_eq!(words(filter_signs(&SIGNS, &filter)), vec!["Thank You", "Mother"]);
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let filter = SignFilter {
            search: " ".to_string(),
            ..SignFilter::default()
        };
        assert_eq!(words(filter_signs(&SIGNS, &filter)), vec!["Thank You"]);

        let filter = SignFilter {
            search: "hello ".to_string(),
            ..SignFilter::default()
        };
        assert!(filter_signs(&SIGNS, &filter).is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        let filter = SignFilter {
            search: "e".to_string(),
            category: Some("basics".to_string()),
            difficulty: None,
        };
        assert_eq!(words(filter_signs(&SIGNS, &filter)), vec!["Hello", "Please"]);
    }

    #[test]
    fn test_difficulty_filter() {
        let filter = SignFilter {
            difficulty: Some(Difficulty::Advanced),
            ..SignFilter::default()
        };
        assert!(filter_signs(&SIGNS, &filter).is_empty());
    }

    #[test]
    fn test_lessons_by_category() {
        assert_eq!(lessons_in("basics").len(), 5);
        assert_eq!(lesson_progress("basics"), (3, 5));
        assert_eq!(lesson_progress("family"), (0, 2));
        assert_eq!(lesson_progress("missing"), (0, 0));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_class(80), "score score--good");
        assert_eq!(score_class(79), "score score--fair");
        assert_eq!(score_class(60), "score score--fair");
        assert_eq!(score_class(59), "score score--poor");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
