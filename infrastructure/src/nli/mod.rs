//! Zero-shot NLI label scoring adapters

mod hf_scorer;

pub use hf_scorer::{DEFAULT_TOKEN_ENV, HfZeroShotScorer};
