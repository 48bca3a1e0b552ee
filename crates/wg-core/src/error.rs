//! Extractor error type.
//!
//! Sub-crates define their own error enums and wrap `WgError` as one variant
//! where attribute lookups can fail inside them.

use thiserror::Error;

/// The top-level error type for `wg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WgError {
    #[error("{owner} is missing required attribute {key:?}")]
    MissingAttr { owner: String, key: &'static str },

    #[error("{owner} attribute {key:?} has type {found}, expected {expected}")]
    AttrType {
        owner:    String,
        key:      &'static str,
        expected: &'static str,
        found:    &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wg-*` crates.
pub type WgResult<T> = Result<T, WgError>;
