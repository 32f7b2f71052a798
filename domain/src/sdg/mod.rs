//! Sustainable Development Goal identifiers.
//!
//! - [`identifier`] — [`SdgId`](identifier::SdgId) and the canonical [`SdgList`](identifier::SdgList)
//! - [`extractor`] — multi-notation recognition of goal references in text
//! - [`catalogue`] — titles and keywords of the 17 goals

pub mod catalogue;
pub mod extractor;
pub mod identifier;
