//! Framework error type.
//!
//! Sub-crates define their own error enums (`TreeError`, `MobilityError`,
//! `SimError`, …) and wrap `BtError` as one variant where they need to.

use thiserror::Error;

/// The top-level error type for `bt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BtError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `bt-*` crates.
pub type BtResult<T> = Result<T, BtError>;
