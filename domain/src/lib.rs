//! Domain layer for patent-sdg
//!
//! This crate contains the core business logic and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## SDG identifiers
//!
//! Model answers reference the 17 Sustainable Development Goals in loose
//! notations. [`extract_sdgs`] normalizes any text into a canonical
//! [`SdgList`], rendered `["None"]` when no goal is found.
//!
//! ## Tagged output
//!
//! Models answer inside named tags (`<sdg>`, `<reason>`, `<citation>`,
//! `<explanation>`, `<summary>`). [`ParsedFields`] and [`extract_evidence`]
//! turn a raw response into typed fields without ever failing.
//!
//! ## Evaluation
//!
//! [`SingleLabelTally`] and [`MultiLabelMetrics`] score predictions against
//! ground truth.

pub mod classification;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod parsing;
pub mod prompt;
pub mod sdg;
pub mod util;

// Re-export commonly used types
pub use classification::{Classification, ClassifierKind, MatchPolicy};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use evaluation::{
    ConfusionCounts, DESCRIPTION_PREVIEW_BYTES, EvaluationSummary, FAILURE_SENTINEL,
    INCORRECT_SAMPLE_LIMIT, IncorrectSample, LabelBreakdown, LabelMetrics, META_DATA_KEY,
    MultiLabelMetrics, MultiLabelSample, MultiLabelSummary, PrfScores, RunMetadata,
    SingleLabelTally, TimingStats,
};
pub use parsing::{
    Evidence, EvidencePair, ParsedFields, TagKind, extract_evidence, extract_tag, format_evidence,
    strip_reasoning,
};
pub use prompt::PromptTemplate;
pub use sdg::{
    catalogue::{GoalInfo, all_goals, goal_from_title, goal_info},
    extractor::{extract_sdg_labels, extract_sdgs, extract_sdgs_from_value, extract_sdgs_opt},
    identifier::{NONE_SENTINEL, SdgId, SdgList},
};
