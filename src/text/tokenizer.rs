// Tokenizer: turns raw document text into a word stream and sentence lengths.
//
// Two independent passes over the same text:
//
//   1. Sentence lengths: whitespace-split the raw text and count tokens until
//      one ends in `.`, `!` or `?`. A trailing run with no terminator is dropped.
//   2. Words: lowercase, delete the stripped punctuation set, then split on
//      whitespace. Apostrophes and hyphens survive ("don't", "well-known").
//
// The passes can disagree on token boundaries ("end .start" is one raw token
// but cleans to "endstart"); each feeds different feature categories.

/// Characters that end a sentence when they are the last char of a raw token.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Characters deleted from the text before word splitting.
pub const STRIPPED_PUNCTUATION: [char; 7] = ['.', ',', '?', '!', ';', ':', '"'];

/// A tokenized document. The cleaned text is owned so `words()` can be
/// iterated any number of times without re-cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedText {
    cleaned: String,
    sentence_lengths: Vec<usize>,
}

impl TokenizedText {
    /// Iterate the cleaned word tokens in document order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.cleaned.split_whitespace()
    }

    /// Word counts of every completed sentence, in document order.
    pub fn sentence_lengths(&self) -> &[usize] {
        &self.sentence_lengths
    }

    pub fn is_empty(&self) -> bool {
        self.words().next().is_none() && self.sentence_lengths.is_empty()
    }
}

/// Run both tokenizer passes over `text`.
pub fn tokenize(text: &str) -> TokenizedText {
    TokenizedText {
        cleaned: clean_text(text),
        sentence_lengths: sentence_lengths(text),
    }
}

/// Lowercase `text` and delete every char in [`STRIPPED_PUNCTUATION`].
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Count whitespace-delimited raw tokens per sentence.
pub fn sentence_lengths(text: &str) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut current = 0usize;

    for token in text.split_whitespace() {
        current += 1;
        if token
            .chars()
            .next_back()
            .is_some_and(|c| SENTENCE_TERMINATORS.contains(&c))
        {
            lengths.push(current);
            current = 0;
        }
    }

    lengths
}
