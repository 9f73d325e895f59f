// The five feature categories a model tracks, in score-vector order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coordinating and common subordinating conjunctions counted by the
/// `conjunctions` category. English only.
pub const CONJUNCTIONS: [&str; 7] = ["and", "or", "but", "nor", "yet", "so", "because"];

/// Returns true when `word` (already cleaned) is one of [`CONJUNCTIONS`].
pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTIONS.contains(&word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    Words,
    WordLengths,
    Stems,
    SentenceLengths,
    Conjunctions,
}

impl FeatureCategory {
    /// Every category, in the order scores are reported.
    pub const ALL: [FeatureCategory; 5] = [
        FeatureCategory::Words,
        FeatureCategory::WordLengths,
        FeatureCategory::Stems,
        FeatureCategory::SentenceLengths,
        FeatureCategory::Conjunctions,
    ];

    /// Position of this category in a score vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureCategory::Words => "words",
            FeatureCategory::WordLengths => "word lengths",
            FeatureCategory::Stems => "stems",
            FeatureCategory::SentenceLengths => "sentence lengths",
            FeatureCategory::Conjunctions => "conjunctions",
        }
    }

    /// Suffix appended to a model name to form this category's record key.
    pub fn record_suffix(self) -> &'static str {
        match self {
            FeatureCategory::Words => "_words",
            FeatureCategory::WordLengths => "_word_lengths",
            FeatureCategory::Stems => "_stems",
            FeatureCategory::SentenceLengths => "_sentence_lengths",
            FeatureCategory::Conjunctions => "_conjunctions",
        }
    }

    pub fn record_key(self, model_name: &str) -> String {
        format!("{model_name}{}", self.record_suffix())
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
