//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `LuxError` via `From` impls, or keep them separate and wrap `LuxError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `lux-core` and a common base for sub-crates.
///
/// The simulation itself has no recoverable failures — every runtime input
/// is numeric and config-bounded — so the only thing that can go wrong this
/// far down is a degenerate configuration.
#[derive(Debug, Error)]
pub enum LuxError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lux-*` crates.
pub type LuxResult<T> = Result<T, LuxError>;
