// Unit tests for similarity scoring and classification.
//
// Checks compare() against hand-computed values, the argument order of
// similarity_scores(), and the vote counting in classify().

use inkprint::features::{Counts, FeatureCategory, FeatureModel};
use inkprint::scoring::similarity::EPSILON;
use inkprint::scoring::{classify, compare, ScoreVector, Verdict};

fn model(name: &str, text: &str) -> FeatureModel {
    let mut m = FeatureModel::new(name);
    m.add_text(text);
    m
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================
// compare
// ============================================================

#[test]
fn self_comparison_never_uses_fallback() {
    let m = model("m", "It is interesting that she is interested.");
    let total = m.total(FeatureCategory::Words) as f64 + EPSILON;
    let expected: f64 = m
        .words()
        .values()
        .map(|&c| (c as f64 / total).ln() * c as f64)
        .sum();
    assert_close(compare(m.words(), m.words()), expected);
}

#[test]
fn compare_integer_keyed_tables() {
    let reference: Counts<usize> = [(2, 3), (4, 1)].into_iter().collect();
    let sample: Counts<usize> = [(2, 1), (9, 2)].into_iter().collect();
    let total = 4.0 + EPSILON;
    let expected = (3.0 / total).ln() + (0.5 / total).ln() * 2.0;
    assert_close(compare(&reference, &sample), expected);
}

#[test]
fn both_empty_scores_zero() {
    let empty: Counts<String> = Counts::new();
    assert_eq!(compare(&empty, &empty), 0.0);
}

// ============================================================
// similarity_scores
// ============================================================

#[test]
fn similarity_scores_use_other_as_reference() {
    let a = model("a", "It is interesting that she is interested.");
    let b = model("b", "Is he interested? No, but I am.");

    let scores = b.similarity_scores(&a);
    assert_close(scores[FeatureCategory::Words], compare(a.words(), b.words()));
    assert_close(scores[FeatureCategory::Stems], compare(a.stems(), b.stems()));
    assert_close(
        scores[FeatureCategory::SentenceLengths],
        compare(a.sentence_lengths(), b.sentence_lengths()),
    );
}

#[test]
fn similarity_scores_depend_on_argument_order() {
    let a = model("a", "the the the cat.");
    let b = model("b", "a cat.");

    // Reference a has 4 tokens: "a" is unseen, "cat" seen once.
    let total_a = 4.0 + EPSILON;
    let b_against_a = (0.5 / total_a).ln() + (1.0 / total_a).ln();
    // Reference b has 2 tokens: "the" is unseen three times, "cat" seen once.
    let total_b = 2.0 + EPSILON;
    let a_against_b = (0.5 / total_b).ln() * 3.0 + (1.0 / total_b).ln();

    let scores = b.similarity_scores(&a);
    let reversed = a.similarity_scores(&b);
    assert_close(scores[FeatureCategory::Words], b_against_a);
    assert_close(reversed[FeatureCategory::Words], a_against_b);
    assert!((scores[FeatureCategory::Words] - reversed[FeatureCategory::Words]).abs() > 1e-6);
}

#[test]
fn mystery_scores_against_reference_sources() {
    let source1 = model("source1", "It is interesting that she is interested.");
    let source2 = model("source2", "I am very, very excited about this!");
    let mystery = model("mystery", "Is he interested? No, but I am.");

    let s1 = mystery.similarity_scores(&source1);
    let s2 = mystery.similarity_scores(&source2);

    let expected1 = [
        -16.393959775626975,
        -9.9200690792747,
        -14.314518233947137,
        -1.3862943811198905,
        17.72753356339242,
    ];
    let expected2 = [
        -17.08710695618692,
        -15.007665414507082,
        -16.393959775626975,
        -1.3862943811198905,
        17.72753356339242,
    ];
    for i in 0..5 {
        assert!((s1.as_array()[i] - expected1[i]).abs() < 1e-6);
        assert!((s2.as_array()[i] - expected2[i]).abs() < 1e-6);
    }
}

// ============================================================
// classify
// ============================================================

#[test]
fn classify_reference_scenario() {
    let source1 = model("source1", "It is interesting that she is interested.");
    let source2 = model("source2", "I am very, very excited about this!");
    let mystery = model("mystery", "Is he interested? No, but I am.");

    let result = mystery.classify(&source1, &source2);
    assert_eq!(result.unknown, "mystery");
    assert_eq!(result.first.name, "source1");
    assert_eq!(result.second.name, "source2");
    assert_eq!(result.first.points, 3);
    assert_eq!(result.second.points, 0);
    assert_eq!(result.verdict, Verdict::First);
    assert_eq!(result.winner(), Some("source1"));
}

#[test]
fn classify_swapped_candidates_swaps_verdict() {
    let source1 = model("source1", "It is interesting that she is interested.");
    let source2 = model("source2", "I am very, very excited about this!");
    let mystery = model("mystery", "Is he interested? No, but I am.");

    let result = classify(&mystery, &source2, &source1);
    assert_eq!(result.verdict, Verdict::Second);
    assert_eq!(result.winner(), Some("source1"));
}

#[test]
fn classify_empty_models_is_undetermined() {
    let empty_a = FeatureModel::new("a");
    let empty_b = FeatureModel::new("b");
    let unknown = model("u", "Some words here.");

    let result = unknown.classify(&empty_a, &empty_b);
    assert_eq!(result.verdict, Verdict::Undetermined);
    assert!(result.first.scores.as_array().iter().all(|s| s.is_finite()));
}

#[test]
fn classification_serializes_with_named_scores() {
    let source1 = model("source1", "It is interesting that she is interested.");
    let source2 = model("source2", "I am very, very excited about this!");
    let mystery = model("mystery", "Is he interested? No, but I am.");

    let json = serde_json::to_value(mystery.classify(&source1, &source2)).unwrap();
    assert_eq!(json["verdict"], "first");
    assert_eq!(json["first"]["name"], "source1");
    assert_eq!(json["first"]["points"], 3);
    assert!(json["second"]["scores"]["conjunctions"].is_number());
}

#[test]
fn score_vector_default_is_zero() {
    let scores = ScoreVector::default();
    assert!(scores.iter().all(|(_, s)| s == 0.0));
}
