//! Common prefix/suffix trimming
//!
//! Shrinks the diff window before a strategy runs: the longest common
//! prefix and the longest non-overlapping common suffix are emitted as
//! `EQUAL` runs, and only the interior window is handed to the strategy.

use std::ops::Range;

use crate::script::RawOp;
use crate::tokenizers::Symbol;

/// Result of trimming: the affix runs plus the remaining interior windows.
#[derive(Debug, Clone)]
pub struct Trimmed {
    pub prefix: Vec<RawOp>,
    pub suffix: Vec<RawOp>,
    pub old_window: Range<usize>,
    pub new_window: Range<usize>,
}

impl Trimmed {
    /// Untrimmed windows covering both full sequences.
    pub fn full(old: &[Symbol], new: &[Symbol]) -> Self {
        Self {
            prefix: Vec::new(),
            suffix: Vec::new(),
            old_window: 0..old.len(),
            new_window: 0..new.len(),
        }
    }
}

/// Strip the longest common prefix and suffix from both sequences.
pub fn trim_common_affixes(old: &[Symbol], new: &[Symbol]) -> Trimmed {
    let prefix_len = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // The suffix must not overlap the prefix match on either side.
    let max_suffix = old.len().min(new.len()) - prefix_len;
    let suffix_len = old[prefix_len..]
        .iter()
        .rev()
        .zip(new[prefix_len..].iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let prefix = old[..prefix_len].iter().map(|&s| RawOp::equal(s)).collect();
    let suffix = old[old.len() - suffix_len..]
        .iter()
        .map(|&s| RawOp::equal(s))
        .collect();

    Trimmed {
        prefix,
        suffix,
        old_window: prefix_len..old.len() - suffix_len,
        new_window: prefix_len..new.len() - suffix_len,
    }
}
