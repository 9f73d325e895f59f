// Log-likelihood similarity between two frequency tables.
//
// The reference table is treated as a probability distribution. Each key in
// the sample contributes `count * ln(p)`, where `p` is the key's share of the
// reference total. Keys the reference never saw are priced as if seen half a
// time. Higher (closer to zero) means the sample looks more like something
// the reference would have produced.
//
// The comparison is asymmetric: swapping reference and sample changes the
// score.

use std::ops::Index;

use serde::ser::{Serialize, Serializer};

use crate::features::{Counts, FeatureCategory, FeatureModel};

/// Added to the reference total so an empty reference never divides by zero.
pub const EPSILON: f64 = 1e-8;

/// Pseudo-count used for sample keys missing from the reference.
pub const UNSEEN_COUNT: f64 = 0.5;

/// Score `sample` against the distribution in `reference`.
pub fn compare<K: Ord>(reference: &Counts<K>, sample: &Counts<K>) -> f64 {
    let total = reference.values().map(|&c| c as f64).sum::<f64>() + EPSILON;

    sample
        .iter()
        .map(|(key, &count)| {
            let seen = reference.get(key).map_or(UNSEEN_COUNT, |&c| c as f64);
            (seen / total).ln() * count as f64
        })
        .sum()
}

/// Compare `model` (the sample) against `other` (the reference) in every
/// category.
pub fn similarity_scores(model: &FeatureModel, other: &FeatureModel) -> ScoreVector {
    ScoreVector([
        compare(other.words(), model.words()),
        compare(other.word_lengths(), model.word_lengths()),
        compare(other.stems(), model.stems()),
        compare(other.sentence_lengths(), model.sentence_lengths()),
        compare(other.conjunctions(), model.conjunctions()),
    ])
}

/// One score per feature category, in [`FeatureCategory::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector([f64; 5]);

impl ScoreVector {
    pub fn new(scores: [f64; 5]) -> Self {
        Self(scores)
    }

    pub fn get(&self, category: FeatureCategory) -> f64 {
        self.0[category.index()]
    }

    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureCategory, f64)> + '_ {
        FeatureCategory::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<FeatureCategory> for ScoreVector {
    type Output = f64;

    fn index(&self, category: FeatureCategory) -> &f64 {
        &self.0[category.index()]
    }
}

// Serialized as {"words": -16.39, "word_lengths": ...} so JSON output is
// self-describing.
impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Counts<String> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_compare_known_keys() {
        let reference = counts(&[("a", 3), ("b", 1)]);
        let sample = counts(&[("a", 2)]);
        let expected = (3.0 / (4.0 + EPSILON)).ln() * 2.0;
        assert!((compare(&reference, &sample) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_compare_unseen_key_uses_half_count() {
        let reference = counts(&[("a", 4)]);
        let sample = counts(&[("z", 3)]);
        let expected = (0.5 / (4.0 + EPSILON)).ln() * 3.0;
        assert!((compare(&reference, &sample) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_compare_empty_reference_is_finite() {
        let reference: Counts<String> = Counts::new();
        let sample = counts(&[("but", 1)]);
        let score = compare(&reference, &sample);
        assert!(score.is_finite());
        assert!((score - (0.5 / EPSILON).ln()).abs() < 1e-6);
    }

    #[test]
    fn test_compare_empty_sample_is_zero() {
        let reference = counts(&[("a", 1)]);
        assert_eq!(compare(&reference, &Counts::new()), 0.0);
    }

    #[test]
    fn test_compare_is_asymmetric() {
        let a = counts(&[("x", 5), ("y", 1)]);
        let b = counts(&[("x", 1), ("z", 2)]);
        assert!((compare(&a, &b) - compare(&b, &a)).abs() > 1e-6);
    }

    #[test]
    fn test_score_vector_indexing() {
        let scores = ScoreVector::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(scores[FeatureCategory::Stems], 3.0);
        assert_eq!(scores.get(FeatureCategory::Conjunctions), 5.0);
        let collected: Vec<_> = scores.iter().map(|(c, _)| c).collect();
        assert_eq!(collected, FeatureCategory::ALL.to_vec());
    }

    #[test]
    fn test_score_vector_serializes_as_map() {
        let scores = ScoreVector::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["words"], 1.0);
        assert_eq!(json["sentence_lengths"], 4.0);
    }
}
