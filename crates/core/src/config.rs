//! Configuration for the diff engine

use serde::{Deserialize, Serialize};

use crate::strategy;

/// Which kinds of anchors the finder keeps after scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSearchMode {
    /// Keep anchors whose drift exceeds `positional_anchor_max_drift`.
    Floating,
    /// Keep anchors whose drift is at most `positional_anchor_max_drift`.
    Positional,
    /// Keep all anchors regardless of drift.
    Combo,
}

impl Default for AnchorSearchMode {
    fn default() -> Self {
        Self::Combo
    }
}

/// Configuration for one diff computation.
///
/// Immutable for the duration of a call. Unknown fields are rejected when
/// deserializing. All size units are tokens unless noted otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Which strategy plugin to invoke.
    pub strategy_name: String,

    /// Minimum anchor length.
    pub min_match_length: usize,

    /// N+M below which a gap is solved by precise Myers with trace.
    pub quick_diff_threshold: usize,

    /// N+M above which a gap falls through to the corridor heuristic.
    pub huge_diff_threshold: usize,

    /// Corridor heuristic max forward scan for companion tokens.
    pub lookahead: usize,

    /// Maximum deviation from the starting diagonal in the corridor
    /// heuristic.
    pub corridor_width: usize,

    /// Suppress common prefix/suffix trimming.
    pub skip_trimming: bool,

    /// Scan step when hashing the old sequence during anchor search.
    pub jump_step: usize,

    /// Window size of the rolling hash.
    pub hunt_chunk_size: usize,

    /// Lower bound on final anchor confidence.
    pub min_anchor_confidence: f64,

    /// Toggle global anchor search.
    pub use_anchors: bool,

    /// Strategy-level search distance for local positional anchors.
    pub local_lookahead: usize,

    /// Which anchors survive the type filter.
    pub anchor_search_mode: AnchorSearchMode,

    /// Drift threshold separating positional from floating anchors.
    pub positional_anchor_max_drift: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            strategy_name: strategy::COMMON_SES.to_string(),
            min_match_length: 30,
            quick_diff_threshold: 64,
            huge_diff_threshold: 256,
            lookahead: 10,
            corridor_width: 10,
            skip_trimming: false,
            jump_step: 30,
            hunt_chunk_size: 10,
            min_anchor_confidence: 0.8,
            use_anchors: true,
            local_lookahead: 50,
            anchor_search_mode: AnchorSearchMode::Combo,
            positional_anchor_max_drift: 20,
        }
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy to invoke
    pub fn with_strategy(mut self, name: impl Into<String>) -> Self {
        self.strategy_name = name.into();
        self
    }

    /// Set the minimum anchor length
    pub fn with_min_match_length(mut self, length: usize) -> Self {
        self.min_match_length = length;
        self
    }

    /// Set the precise-Myers size cutoff
    pub fn with_quick_diff_threshold(mut self, threshold: usize) -> Self {
        self.quick_diff_threshold = threshold;
        self
    }

    /// Set the corridor-heuristic size cutoff
    pub fn with_huge_diff_threshold(mut self, threshold: usize) -> Self {
        self.huge_diff_threshold = threshold;
        self
    }

    /// Set the corridor heuristic lookahead
    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Set the corridor width
    pub fn with_corridor_width(mut self, width: usize) -> Self {
        self.corridor_width = width;
        self
    }

    /// Enable or disable prefix/suffix trimming
    pub fn with_skip_trimming(mut self, skip: bool) -> Self {
        self.skip_trimming = skip;
        self
    }

    /// Set the anchor-scan stride
    pub fn with_jump_step(mut self, step: usize) -> Self {
        self.jump_step = step;
        self
    }

    /// Set the rolling hash window size
    pub fn with_hunt_chunk_size(mut self, size: usize) -> Self {
        self.hunt_chunk_size = size;
        self
    }

    /// Set the anchor confidence floor
    pub fn with_min_anchor_confidence(mut self, confidence: f64) -> Self {
        self.min_anchor_confidence = confidence;
        self
    }

    /// Enable or disable global anchor search
    pub fn with_use_anchors(mut self, enable: bool) -> Self {
        self.use_anchors = enable;
        self
    }

    /// Set the local anchor search distance
    pub fn with_local_lookahead(mut self, lookahead: usize) -> Self {
        self.local_lookahead = lookahead;
        self
    }

    /// Set the anchor type filter
    pub fn with_anchor_search_mode(mut self, mode: AnchorSearchMode) -> Self {
        self.anchor_search_mode = mode;
        self
    }

    /// Set the positional/floating drift threshold
    pub fn with_positional_anchor_max_drift(mut self, drift: usize) -> Self {
        self.positional_anchor_max_drift = drift;
        self
    }
}
