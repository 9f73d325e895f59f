// Two-candidate authorship classification.
//
// The unknown model is scored against each candidate in all five categories.
// Each category is a vote for whichever candidate scored strictly higher;
// equal scores vote for neither. More votes wins, equal votes is no verdict.

use serde::Serialize;
use tracing::info;

use super::similarity::ScoreVector;
use crate::features::FeatureModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    First,
    Second,
    Undetermined,
}

/// A candidate's scores and the number of categories it won.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScores {
    pub name: String,
    pub scores: ScoreVector,
    pub points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub unknown: String,
    pub first: CandidateScores,
    pub second: CandidateScores,
    pub verdict: Verdict,
}

impl Classification {
    /// Name of the winning candidate, or None when undetermined.
    pub fn winner(&self) -> Option<&str> {
        match self.verdict {
            Verdict::First => Some(&self.first.name),
            Verdict::Second => Some(&self.second.name),
            Verdict::Undetermined => None,
        }
    }
}

/// Score `unknown` against both candidates and count category wins.
pub fn classify(
    unknown: &FeatureModel,
    first: &FeatureModel,
    second: &FeatureModel,
) -> Classification {
    let first_scores = unknown.similarity_scores(first);
    let second_scores = unknown.similarity_scores(second);
    let (first_points, second_points) = tally(&first_scores, &second_scores);

    let verdict = if first_points > second_points {
        Verdict::First
    } else if second_points > first_points {
        Verdict::Second
    } else {
        Verdict::Undetermined
    };

    info!(
        unknown = unknown.name(),
        first = first.name(),
        second = second.name(),
        first_points,
        second_points,
        ?verdict,
        "Classified model"
    );

    Classification {
        unknown: unknown.name().to_string(),
        first: CandidateScores {
            name: first.name().to_string(),
            scores: first_scores,
            points: first_points,
        },
        second: CandidateScores {
            name: second.name().to_string(),
            scores: second_scores,
            points: second_points,
        },
        verdict,
    }
}

/// Count the categories each side wins outright.
pub fn tally(first: &ScoreVector, second: &ScoreVector) -> (usize, usize) {
    first
        .as_array()
        .iter()
        .zip(second.as_array())
        .fold((0, 0), |(a, b), (x, y)| {
            if x > y {
                (a + 1, b)
            } else if y > x {
                (a, b + 1)
            } else {
                (a, b)
            }
        })
}
