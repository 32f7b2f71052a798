//! Ports (interfaces) for the application layer
//!
//! Infrastructure adapters implement these traits.

pub mod generation;
pub mod label_scorer;
pub mod progress;
pub mod prompt_provider;
pub mod records;
