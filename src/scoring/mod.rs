// Scoring: per-category similarity and two-candidate classification.

pub mod classify;
pub mod similarity;

pub use classify::{classify, CandidateScores, Classification, Verdict};
pub use similarity::{compare, similarity_scores, ScoreVector};
