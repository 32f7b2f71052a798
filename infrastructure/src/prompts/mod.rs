//! Prompt template files

mod file_provider;

pub use file_provider::FilePromptProvider;
