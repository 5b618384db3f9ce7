//! Anchors: long verified common runs
//!
//! An anchor is a stretch of symbols confirmed equal on both sides, long
//! enough to split a big diff problem into independent sub-problems. The
//! finder locates candidates by rolling-hash matches; the chain selector
//! picks a monotone, non-overlapping subset covering as much as possible.

pub mod chain;
pub mod finder;

pub use chain::select_chain;
pub use finder::find_anchors;

/// A verified common run between the two sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Start of the run in the old sequence.
    pub old_pos: usize,
    /// Start of the run in the new sequence.
    pub new_pos: usize,
    /// Length of the run; at least `min_match_length`.
    pub length: usize,
    /// Absolute distance between the two start positions.
    pub drift_distance: usize,
    /// Drift normalized by length.
    pub drift_ratio: f64,
    /// Combined drift/length score in `[0, 1]`.
    pub confidence: f64,
}

impl Anchor {
    /// Build an anchor and derive its drift and confidence scores.
    ///
    /// Confidence favors length over positional stability (70/30): a long
    /// match far from its original position is still a better split point
    /// than a short match that stayed put.
    pub fn scored(
        old_pos: usize,
        new_pos: usize,
        length: usize,
        min_match_length: usize,
        old_window_len: usize,
        new_window_len: usize,
    ) -> Self {
        let drift_distance = old_pos.abs_diff(new_pos);
        let drift_ratio = drift_distance as f64 / length as f64;

        let max_expected_drift =
            100.0_f64.max(0.1 * old_window_len.min(new_window_len) as f64);
        let drift_conf = (1.0 - drift_distance as f64 / max_expected_drift).max(0.0);
        let length_conf = (length as f64 / (2 * min_match_length) as f64).min(1.0);

        Self {
            old_pos,
            new_pos,
            length,
            drift_distance,
            drift_ratio,
            confidence: 0.3 * drift_conf + 0.7 * length_conf,
        }
    }

    pub fn old_end(&self) -> usize {
        self.old_pos + self.length
    }

    pub fn new_end(&self) -> usize {
        self.new_pos + self.length
    }
}
