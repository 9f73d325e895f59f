// Text processing: tokenizing raw documents and stemming their words.

pub mod stemmer;
pub mod tokenizer;

pub use stemmer::stem;
pub use tokenizer::{tokenize, TokenizedText};

/// Decode document bytes as UTF-8, dropping invalid sequences instead of
/// failing or substituting U+FFFD.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
