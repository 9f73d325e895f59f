// Record encoding: the on-disk shape of one feature table.
//
// Each record is a small JSON document:
//
//   {"category": "word_lengths", "counts": {"2": 3, "11": 1}}
//
// Decoding is strict: unknown fields, a category that doesn't match the key,
// zero counts and (for conjunctions) keys outside the closed set are all
// rejected rather than silently repaired.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::features::category::{is_conjunction, FeatureCategory};
use crate::features::Counts;

#[derive(Serialize)]
struct RecordRef<'a, K: Ord> {
    category: FeatureCategory,
    counts: &'a Counts<K>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Record<K: Ord> {
    category: FeatureCategory,
    counts: Counts<K>,
}

pub fn encode<K: Serialize + Ord>(category: FeatureCategory, counts: &Counts<K>) -> Result<String> {
    let payload = serde_json::to_string(&RecordRef { category, counts })?;
    Ok(payload)
}

/// Parse and validate the record stored under `key`.
pub fn decode<K: DeserializeOwned + Ord>(
    key: &str,
    expected: FeatureCategory,
    payload: &str,
) -> Result<Counts<K>> {
    let record: Record<K> = serde_json::from_str(payload)
        .with_context(|| format!("Malformed model record '{key}'"))?;

    if record.category != expected {
        bail!(
            "Malformed model record '{key}': holds {} counts, expected {}",
            record.category,
            expected
        );
    }

    if record.counts.values().any(|&count| count == 0) {
        bail!("Malformed model record '{key}': counts must be at least 1");
    }

    Ok(record.counts)
}

/// Reject conjunction tables containing words outside the closed set.
pub fn check_conjunction_keys(key: &str, counts: &Counts<String>) -> Result<()> {
    if let Some(word) = counts.keys().find(|word| !is_conjunction(word)) {
        bail!("Malformed model record '{key}': '{word}' is not a tracked conjunction");
    }
    Ok(())
}
