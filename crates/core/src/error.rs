//! Error types surfaced by the diff engine

use thiserror::Error;

/// Errors observable to callers of [`crate::DiffEngine::diff`].
///
/// Everything else the engine can run into (a snake that fails validation,
/// a heuristic walker that stops making progress) is recovered internally
/// and never produces a partial script paired with an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The requested strategy name is not in the registry.
    #[error("unknown diff strategy: {0:?}")]
    UnknownStrategy(String),

    /// A diff region violates `0 <= start <= end <= length`. This is a
    /// programmer error in the caller or in a registered strategy.
    #[error("invalid range [{start}, {end}) for sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
}
