//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod cite_evidence;
pub mod report;
pub mod run_evaluation;
pub(crate) mod shared;
