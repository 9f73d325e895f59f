// Feature extraction: the five frequency tables that fingerprint a text.

pub mod category;
pub mod model;

pub use category::{FeatureCategory, CONJUNCTIONS};
pub use model::{Counts, FeatureModel, ModelSummary};
