// FeatureModel: the statistical fingerprint of one or more documents.
//
// A model is five independent frequency tables keyed by word, word length,
// stem, sentence length and conjunction. Adding text only ever inserts keys
// or increments counts; a reload swaps all five tables at once.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use super::category::{is_conjunction, FeatureCategory};
use crate::scoring::classify::{self, Classification};
use crate::scoring::similarity::{self, ScoreVector};
use crate::store::records;
use crate::store::traits::ModelStore;
use crate::text::{decode_permissive, stem, tokenize};

/// Occurrence counts keyed by feature value. Every stored count is >= 1.
pub type Counts<K> = BTreeMap<K, u64>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureModel {
    name: String,
    words: Counts<String>,
    word_lengths: Counts<usize>,
    stems: Counts<String>,
    sentence_lengths: Counts<usize>,
    conjunctions: Counts<String>,
}

impl FeatureModel {
    /// Create an empty model. The name labels output and keys persistence.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a model named `name` and fill it from `store`.
    pub fn load(name: impl Into<String>, store: &dyn ModelStore) -> Result<Self> {
        let mut model = Self::new(name);
        model.reload(store)?;
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &Counts<String> {
        &self.words
    }

    pub fn word_lengths(&self) -> &Counts<usize> {
        &self.word_lengths
    }

    pub fn stems(&self) -> &Counts<String> {
        &self.stems
    }

    pub fn sentence_lengths(&self) -> &Counts<usize> {
        &self.sentence_lengths
    }

    pub fn conjunctions(&self) -> &Counts<String> {
        &self.conjunctions
    }

    /// Number of distinct keys in one category.
    pub fn distinct(&self, category: FeatureCategory) -> usize {
        match category {
            FeatureCategory::Words => self.words.len(),
            FeatureCategory::WordLengths => self.word_lengths.len(),
            FeatureCategory::Stems => self.stems.len(),
            FeatureCategory::SentenceLengths => self.sentence_lengths.len(),
            FeatureCategory::Conjunctions => self.conjunctions.len(),
        }
    }

    /// Sum of all counts in one category.
    pub fn total(&self, category: FeatureCategory) -> u64 {
        match category {
            FeatureCategory::Words => self.words.values().sum(),
            FeatureCategory::WordLengths => self.word_lengths.values().sum(),
            FeatureCategory::Stems => self.stems.values().sum(),
            FeatureCategory::SentenceLengths => self.sentence_lengths.values().sum(),
            FeatureCategory::Conjunctions => self.conjunctions.values().sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        FeatureCategory::ALL.iter().all(|&c| self.distinct(c) == 0)
    }

    /// Tokenize `text` and accumulate it into all five tables.
    pub fn add_text(&mut self, text: &str) {
        let tokens = tokenize(text);

        let mut word_count = 0usize;
        for word in tokens.words() {
            word_count += 1;
            increment(&mut self.words, word.to_string());
            increment(&mut self.word_lengths, word.chars().count());
            increment(&mut self.stems, stem(word));
            if is_conjunction(word) {
                increment(&mut self.conjunctions, word.to_string());
            }
        }

        for &length in tokens.sentence_lengths() {
            increment(&mut self.sentence_lengths, length);
        }

        debug!(
            model = %self.name,
            words = word_count,
            sentences = tokens.sentence_lengths().len(),
            "Added text to model"
        );
    }

    /// Read a whole document from disk and accumulate it.
    ///
    /// Invalid UTF-8 sequences are dropped. Read failures are returned with
    /// the path attached; the model is unchanged in that case.
    pub fn add_document(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;

        self.add_text(&decode_permissive(&bytes));

        info!(
            model = %self.name,
            path = %path.display(),
            bytes = bytes.len(),
            "Added document to model"
        );
        Ok(())
    }

    /// Add several documents in order, stopping at the first unreadable one.
    pub fn add_documents<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        for path in paths {
            self.add_document(path)?;
        }
        Ok(())
    }

    /// Write all five tables to `store` under `<name>_<category>` keys.
    ///
    /// Every table is encoded before anything is written, and the records go
    /// to the store as one batch. The SQLite backend commits the batch in a
    /// single transaction. The flat-file backend stages every record before
    /// replacing any, so a failed write leaves the previous model intact.
    pub fn persist(&self, store: &dyn ModelStore) -> Result<()> {
        let batch = vec![
            self.record(FeatureCategory::Words, &self.words)?,
            self.record(FeatureCategory::WordLengths, &self.word_lengths)?,
            self.record(FeatureCategory::Stems, &self.stems)?,
            self.record(FeatureCategory::SentenceLengths, &self.sentence_lengths)?,
            self.record(FeatureCategory::Conjunctions, &self.conjunctions)?,
        ];
        store
            .save_records(&batch)
            .with_context(|| format!("Failed to save model '{}'", self.name))?;

        info!(
            model = %self.name,
            backend = store.backend_name(),
            "Persisted model"
        );
        Ok(())
    }

    /// Replace all five tables with the records stored under this model's name.
    ///
    /// Every record is read and validated first, so a missing or malformed
    /// record leaves the model exactly as it was.
    pub fn reload(&mut self, store: &dyn ModelStore) -> Result<()> {
        let words: Counts<String> = self.load_category(store, FeatureCategory::Words)?;
        let word_lengths: Counts<usize> =
            self.load_category(store, FeatureCategory::WordLengths)?;
        let stems: Counts<String> = self.load_category(store, FeatureCategory::Stems)?;
        let sentence_lengths: Counts<usize> =
            self.load_category(store, FeatureCategory::SentenceLengths)?;
        let conjunctions: Counts<String> =
            self.load_category(store, FeatureCategory::Conjunctions)?;
        records::check_conjunction_keys(
            &FeatureCategory::Conjunctions.record_key(&self.name),
            &conjunctions,
        )?;

        self.words = words;
        self.word_lengths = word_lengths;
        self.stems = stems;
        self.sentence_lengths = sentence_lengths;
        self.conjunctions = conjunctions;

        info!(
            model = %self.name,
            backend = store.backend_name(),
            words = self.words.len(),
            "Reloaded model"
        );
        Ok(())
    }

    pub fn describe(&self) -> ModelSummary {
        ModelSummary {
            name: self.name.clone(),
            words: self.words.len(),
            word_lengths: self.word_lengths.len(),
            stems: self.stems.len(),
            sentence_lengths: self.sentence_lengths.len(),
            conjunctions: self.conjunctions.len(),
        }
    }

    /// Score this model against `other`, which acts as the reference.
    pub fn similarity_scores(&self, other: &FeatureModel) -> ScoreVector {
        similarity::similarity_scores(self, other)
    }

    /// Decide which of two candidate models more likely produced this one.
    pub fn classify(&self, first: &FeatureModel, second: &FeatureModel) -> Classification {
        classify::classify(self, first, second)
    }

    fn record<K: Serialize + Ord>(
        &self,
        category: FeatureCategory,
        counts: &Counts<K>,
    ) -> Result<(String, String)> {
        let key = category.record_key(&self.name);
        let payload = records::encode(category, counts)?;
        Ok((key, payload))
    }

    fn load_category<K: serde::de::DeserializeOwned + Ord>(
        &self,
        store: &dyn ModelStore,
        category: FeatureCategory,
    ) -> Result<Counts<K>> {
        let key = category.record_key(&self.name);
        let payload = store
            .load_record(&key)?
            .ok_or_else(|| anyhow!("Model record '{key}' not found"))?;
        records::decode(&key, category, &payload)
    }
}

impl fmt::Display for FeatureModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.describe(), f)
    }
}

fn increment<K: Ord>(counts: &mut Counts<K>, key: K) {
    *counts.entry(key).or_insert(0) += 1;
}

/// Distinct-key counts of each table in a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub words: usize,
    pub word_lengths: usize,
    pub stems: usize,
    pub sentence_lengths: usize,
    pub conjunctions: usize,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "text model name: {}", self.name)?;
        writeln!(f, "  number of words: {}", self.words)?;
        writeln!(f, "  number of word lengths: {}", self.word_lengths)?;
        writeln!(f, "  number of stems: {}", self.stems)?;
        writeln!(f, "  number of sentence lengths: {}", self.sentence_lengths)?;
        writeln!(f, "  number of conjunctions: {}", self.conjunctions)
    }
}
