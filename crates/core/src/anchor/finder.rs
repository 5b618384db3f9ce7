//! Hash-guided anchor search
//!
//! Two phases. The index phase hashes every `hunt_chunk_size` window of the
//! new side into a position table. The scan phase walks the old side with a
//! `jump_step` stride and, for each hash hit, "hunts": it keeps jumping
//! chunk by chunk, re-finding each chunk's hash a bounded distance beyond
//! the previous fragment, until enough chunks are confirmed to be worth a
//! full symbol-by-symbol verification. Verified runs are scored, their
//! new-side span is marked used, and the scan continues past them.

use std::collections::HashMap;

use log::debug;

use super::Anchor;
use crate::algorithm::Region;
use crate::config::{AnchorSearchMode, DiffConfig};
use crate::hash::{window_hash, RollingHash};
use crate::tokenizers::Symbol;

/// How many `jump_step` offsets past the previous fragment a hunted chunk
/// may land.
pub const HUNT_PROBE_OFFSETS: usize = 3;

/// Find anchors inside `region`. Returns an empty list for windows below
/// `quick_diff_threshold` (the caller diffs those directly) and for invalid
/// parameter combinations (non-fatal by design).
pub fn find_anchors(
    old: &[Symbol],
    new: &[Symbol],
    region: Region,
    config: &DiffConfig,
    debug_trace: bool,
) -> Vec<Anchor> {
    let chunk = config.hunt_chunk_size;
    if chunk == 0 || config.min_match_length < chunk || config.jump_step == 0 {
        return Vec::new();
    }
    if region.total_len() < config.quick_diff_threshold {
        return Vec::new();
    }
    if region.old_len() < chunk || region.new_len() < chunk {
        return Vec::new();
    }

    // Index phase: hash every chunk window of the new side
    let mut table: HashMap<u64, Vec<usize>> = HashMap::new();
    let mut rolling = RollingHash::new(chunk);
    rolling.seed(&new[region.new_start..]);
    table.entry(rolling.value()).or_default().push(region.new_start);
    for pos in region.new_start + 1..=region.new_end - chunk {
        rolling.slide(new[pos - 1], new[pos + chunk - 1]);
        table.entry(rolling.value()).or_default().push(pos);
    }

    let mut used = vec![false; new.len()];
    let mut anchors = Vec::new();

    // Scan phase: stride through the old side looking for hash hits
    let mut cursor = region.old_start;
    while cursor + chunk <= region.old_end {
        let hash = window_hash(&old[cursor..cursor + chunk]);
        let accepted = table.get(&hash).map_or(false, |candidates| {
            candidates.iter().copied().any(|candidate| {
                !used[candidate]
                    && try_anchor(
                        old, new, region, config, &table, &mut used, cursor, candidate,
                        &mut anchors,
                    )
            })
        });

        if accepted {
            cursor = anchors.last().map(Anchor::old_end).unwrap_or(cursor);
        } else {
            cursor += config.jump_step;
        }
    }

    if debug_trace {
        debug!("anchor scan found {} raw anchors", anchors.len());
    }

    // Type filter, then confidence filter
    anchors.retain(|anchor| match config.anchor_search_mode {
        AnchorSearchMode::Positional => {
            anchor.drift_distance <= config.positional_anchor_max_drift
        }
        AnchorSearchMode::Floating => anchor.drift_distance > config.positional_anchor_max_drift,
        AnchorSearchMode::Combo => true,
    });
    anchors.retain(|anchor| anchor.confidence >= config.min_anchor_confidence);

    if debug_trace {
        debug!("{} anchors survive the filters", anchors.len());
    }

    anchors
}

/// Hunt, verify and score one candidate pair. On success the anchor is
/// appended, its new-side span marked, and `true` returned.
#[allow(clippy::too_many_arguments)]
fn try_anchor(
    old: &[Symbol],
    new: &[Symbol],
    region: Region,
    config: &DiffConfig,
    table: &HashMap<u64, Vec<usize>>,
    used: &mut [bool],
    old_start: usize,
    new_start: usize,
    anchors: &mut Vec<Anchor>,
) -> bool {
    let chunk = config.hunt_chunk_size;

    // Hunt: confirm chunk hashes forward until the confirmed total reaches
    // the minimum match length or no continuation is found
    let mut confirmed = 1usize;
    let mut prev_old_end = old_start + chunk;
    let mut prev_new_end = new_start + chunk;

    while confirmed * chunk < config.min_match_length {
        if prev_old_end + chunk > region.old_end {
            break;
        }
        let hash = window_hash(&old[prev_old_end..prev_old_end + chunk]);
        let probe_limit = prev_new_end + HUNT_PROBE_OFFSETS * config.jump_step;
        let next = table.get(&hash).and_then(|candidates| {
            candidates
                .iter()
                .copied()
                .find(|&q| q >= prev_new_end && q <= probe_limit && !used[q])
        });

        match next {
            Some(found) => {
                confirmed += 1;
                prev_old_end += chunk;
                prev_new_end = found + chunk;
            }
            None => break,
        }
    }

    // The ratio is measured against the expected minimum length, not the
    // achieved one; the verification pass below settles the real length.
    let hunt_confidence = (confirmed * chunk) as f64 / config.min_match_length as f64;
    if hunt_confidence < config.min_anchor_confidence {
        return false;
    }

    // Verify and extend symbol-by-symbol from the first fragment
    let mut length = 0usize;
    while old_start + length < region.old_end
        && new_start + length < region.new_end
        && old[old_start + length] == new[new_start + length]
        && !used[new_start + length]
    {
        length += 1;
    }

    if length < config.min_match_length {
        return false;
    }

    let anchor = Anchor::scored(
        old_start,
        new_start,
        length,
        config.min_match_length,
        region.old_len(),
        region.new_len(),
    );
    used[new_start..new_start + length].fill(true);
    anchors.push(anchor);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two windows sharing one 60-symbol run, embedded in distinct noise.
    fn shared_run_inputs() -> (Vec<Symbol>, Vec<Symbol>) {
        let run: Vec<Symbol> = (1..=60).collect();
        let mut old: Vec<Symbol> = (1000..1030).collect();
        old.extend(&run);
        old.extend(2000..2030);

        let mut new: Vec<Symbol> = (3000..3040).collect();
        new.extend(&run);
        new.extend(4000..4020);
        (old, new)
    }

    fn full_region(old: &[Symbol], new: &[Symbol]) -> Region {
        Region::new(0..old.len(), 0..new.len())
    }

    #[test]
    fn test_finds_shared_run() {
        let (old, new) = shared_run_inputs();
        let config = DiffConfig::default();
        let anchors = find_anchors(&old, &new, full_region(&old, &new), &config, false);

        assert_eq!(anchors.len(), 1);
        let anchor = &anchors[0];
        assert_eq!(anchor.old_pos, 30);
        assert_eq!(anchor.new_pos, 40);
        assert_eq!(anchor.length, 60);
        assert_eq!(anchor.drift_distance, 10);
        assert!(anchor.confidence >= config.min_anchor_confidence);
    }

    #[test]
    fn test_anchor_spans_verify_equal() {
        let (old, new) = shared_run_inputs();
        let config = DiffConfig::default();
        let anchors = find_anchors(&old, &new, full_region(&old, &new), &config, false);

        for anchor in &anchors {
            for i in 0..anchor.length {
                assert_eq!(old[anchor.old_pos + i], new[anchor.new_pos + i]);
            }
        }
    }

    #[test]
    fn test_mode_filters() {
        let (old, new) = shared_run_inputs();

        // drift is 10, at most the positional threshold of 20
        let positional = DiffConfig::default()
            .with_anchor_search_mode(AnchorSearchMode::Positional);
        assert_eq!(
            find_anchors(&old, &new, full_region(&old, &new), &positional, false).len(),
            1
        );

        let floating =
            DiffConfig::default().with_anchor_search_mode(AnchorSearchMode::Floating);
        assert!(find_anchors(&old, &new, full_region(&old, &new), &floating, false).is_empty());

        let combo = DiffConfig::default().with_anchor_search_mode(AnchorSearchMode::Combo);
        assert_eq!(
            find_anchors(&old, &new, full_region(&old, &new), &combo, false).len(),
            1
        );
    }

    #[test]
    fn test_confidence_filter_drops_short_runs() {
        // A run of exactly min_match_length has length confidence 0.5;
        // with zero drift the total lands at 0.65, below the 0.8 floor.
        let run: Vec<Symbol> = (1..=30).collect();
        let mut old: Vec<Symbol> = (1000..1030).collect();
        old.extend(&run);
        old.extend(2000..2030);
        let mut new: Vec<Symbol> = (3000..3030).collect();
        new.extend(&run);
        new.extend(4000..4030);

        let config = DiffConfig::default();
        let anchors = find_anchors(&old, &new, full_region(&old, &new), &config, false);
        assert!(anchors.is_empty());

        // Lowering the floor lets the same run through
        let relaxed = DiffConfig::default().with_min_anchor_confidence(0.6);
        let anchors = find_anchors(&old, &new, full_region(&old, &new), &relaxed, false);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].length, 30);
    }

    #[test]
    fn test_invalid_parameters_yield_empty() {
        let (old, new) = shared_run_inputs();
        let region = full_region(&old, &new);

        let zero_chunk = DiffConfig::default().with_hunt_chunk_size(0);
        assert!(find_anchors(&old, &new, region, &zero_chunk, false).is_empty());

        let chunk_above_match = DiffConfig::default()
            .with_hunt_chunk_size(10)
            .with_min_match_length(5);
        assert!(find_anchors(&old, &new, region, &chunk_above_match, false).is_empty());
    }

    #[test]
    fn test_small_window_is_skipped() {
        let old: Vec<Symbol> = (0..20).collect();
        let new: Vec<Symbol> = (0..20).collect();
        let config = DiffConfig::default();
        // total 40 < quick_diff_threshold 64
        assert!(find_anchors(&old, &new, full_region(&old, &new), &config, false).is_empty());
    }

    #[test]
    fn test_disjoint_windows_find_nothing() {
        let old: Vec<Symbol> = (0..100).collect();
        let new: Vec<Symbol> = (1000..1100).collect();
        let config = DiffConfig::default();
        assert!(find_anchors(&old, &new, full_region(&old, &new), &config, false).is_empty());
    }

    #[test]
    fn test_used_positions_are_not_reanchored() {
        // The same run twice in old, once in new: only one anchor can
        // claim the new-side span
        let run: Vec<Symbol> = (1..=60).collect();
        let mut old: Vec<Symbol> = run.clone();
        old.extend(5000..5030);
        old.extend(&run);
        let mut new: Vec<Symbol> = run.clone();
        new.extend(6000..6040);

        let config = DiffConfig::default();
        let anchors = find_anchors(&old, &new, full_region(&old, &new), &config, false);

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].new_pos, 0);
    }
}
