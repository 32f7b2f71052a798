//! Prompt templates
//!
//! Templates are plain text with a `{description}` placeholder; the citation
//! template also carries `{sdg}`. Built-in defaults are used when no template
//! file is provided.

mod template;

pub use template::{
    CITATION_TEMPLATE, DESCRIPTION_PLACEHOLDER, LABEL_TEMPLATE, PromptTemplate, SDG_PLACEHOLDER,
};
