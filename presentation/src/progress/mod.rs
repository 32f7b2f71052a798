//! Progress display for evaluation runs

pub mod reporter;
