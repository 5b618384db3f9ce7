//! # seamdiff
//!
//! An anchor-guided shortest-edit-script engine. Inputs are two string
//! sequences; the output is an ordered program of `EQUAL`/`ADD`/`REMOVE`
//! operations whose application to the first sequence yields the second.
//!
//! ## Core Concepts
//!
//! - **Symbols**: both inputs are interned into integer symbols; the
//!   engine never compares strings while diffing
//! - **Anchors**: long verified common runs, found by rolling-hash search,
//!   split huge problems into independent gaps
//! - **Strategies**: pluggable compositions of the toolbox (`commonSES`,
//!   `patienceDiff`, `preserveStructure` built in)
//! - **Fallbacks**: precise Myers for small gaps, divide-and-conquer with
//!   middle snakes in between, a bounded-corridor heuristic for the rest
//!
//! ## Example
//!
//! ```rust
//! use seamdiff_core::{DiffEngine, EditKind};
//!
//! let old: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
//! let new: Vec<String> = ["a", "x", "c"].iter().map(|s| s.to_string()).collect();
//!
//! let mut engine = DiffEngine::new();
//! let script = engine.diff(&old, &new, false, None).unwrap();
//!
//! assert_eq!(script.count(EditKind::Equal), 2);
//! assert_eq!(script.apply_to(&old), Some(new));
//! ```

pub mod algorithm;
pub mod anchor;
pub mod config;
pub mod engine;
pub mod error;
pub mod hash;
pub mod script;
pub mod strategy;
pub mod tokenizers;
pub mod toolbox;
pub mod trim;

// Re-export main types
pub use config::{AnchorSearchMode, DiffConfig};
pub use engine::DiffEngine;
pub use error::DiffError;
pub use script::{EditKind, EditOp, EditScript};
pub use strategy::DiffStrategy;
pub use toolbox::Toolbox;

/// Compute the edit script between two string sequences with a one-off
/// engine.
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The target sequence
/// * `options` - Optional configuration (uses defaults if `None`)
///
/// # Example
///
/// ```rust
/// use seamdiff_core::compute_diff;
///
/// let old = vec!["line 1".to_string(), "line 3".to_string()];
/// let new = vec![
///     "line 1".to_string(),
///     "line 2".to_string(),
///     "line 3".to_string(),
/// ];
///
/// let script = compute_diff(&old, &new, None).unwrap();
/// assert_eq!(script.len(), 3);
/// ```
pub fn compute_diff(
    old: &[String],
    new: &[String],
    options: Option<DiffConfig>,
) -> Result<EditScript, DiffError> {
    let mut engine = DiffEngine::new();
    engine.diff(old, new, false, options)
}
