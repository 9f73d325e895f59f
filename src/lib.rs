// Inkprint: stylometric fingerprints for guessing the author of a text.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: text -> features -> scoring, plus persistence and output.

pub mod config;
pub mod features;
pub mod output;
pub mod scoring;
pub mod store;
pub mod text;
