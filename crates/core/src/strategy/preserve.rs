//! Structure-preserving strategy
//!
//! A four-level hybrid. L1 looks for large floating anchors (moved blocks)
//! with a widened configuration. The gaps are walked positionally by L2,
//! which asks the local-anchor helper for the next nearby match and hands
//! each micro-gap to L3. L3 re-runs the anchor machinery at micro scale
//! where that can pay off, and everything that resists alignment lands in
//! L4, the corridor heuristic.

use std::collections::HashSet;

use log::debug;

use super::DiffStrategy;
use crate::algorithm::Region;
use crate::config::{AnchorSearchMode, DiffConfig};
use crate::error::DiffError;
use crate::script::RawOp;
use crate::tokenizers::Symbol;
use crate::toolbox::Toolbox;

pub struct PreserveStructure;

impl DiffStrategy for PreserveStructure {
    fn compute(&self, toolbox: &mut Toolbox<'_>, window: Region) -> Result<Vec<RawOp>, DiffError> {
        let mut out = Vec::new();

        // L1: global floating anchors over a widened configuration
        let overlay = level1_config(toolbox.config);
        if toolbox.config.use_anchors && window.total_len() >= overlay.quick_diff_threshold {
            let anchors = toolbox.find_anchors_with(&overlay, window);
            let chain = toolbox.select_chain(anchors);
            if !chain.is_empty() {
                if toolbox.debug {
                    debug!(
                        "preserveStructure: {} floating anchors over {}x{} window",
                        chain.len(),
                        window.old_len(),
                        window.new_len()
                    );
                }
                let mut prev_old = window.old_start;
                let mut prev_new = window.new_start;
                for anchor in &chain {
                    let gap = Region::new(prev_old..anchor.old_pos, prev_new..anchor.new_pos);
                    local_gap_diff(toolbox, gap, &mut out);
                    toolbox.push_anchor_equals(anchor, &mut out);
                    prev_old = anchor.old_end();
                    prev_new = anchor.new_end();
                }
                let tail = Region::new(prev_old..window.old_end, prev_new..window.new_end);
                local_gap_diff(toolbox, tail, &mut out);
                return Ok(out);
            }
        }

        local_gap_diff(toolbox, window, &mut out);
        Ok(out)
    }
}

/// L1 search overlay: only long, genuinely moved runs qualify as global
/// anchors here; positionally stable content is cheaper to recover in L2.
fn level1_config(base: &DiffConfig) -> DiffConfig {
    let mut overlay = base.clone();
    overlay.min_match_length = base.min_match_length * 2;
    overlay.anchor_search_mode = AnchorSearchMode::Floating;
    overlay.quick_diff_threshold = base.quick_diff_threshold * 2;
    overlay.huge_diff_threshold = base.huge_diff_threshold * 2;
    overlay
}

/// L2: positional scan. Walks both cursors forward, emitting matches as
/// they align and pushing every micro-gap down to L3. Exposed to other
/// strategies through [`Toolbox::local_gap_diff`].
pub(crate) fn local_gap_diff(toolbox: &mut Toolbox<'_>, region: Region, out: &mut Vec<RawOp>) {
    let mut old_pos = region.old_start;
    let mut new_pos = region.new_start;

    while old_pos < region.old_end && new_pos < region.new_end {
        if toolbox.old[old_pos] == toolbox.new[new_pos] {
            out.push(RawOp::equal(toolbox.old[old_pos]));
            old_pos += 1;
            new_pos += 1;
            continue;
        }

        match toolbox.local_anchor(old_pos, new_pos, region, toolbox.config.local_lookahead) {
            Some((match_old, match_new)) => {
                let micro = Region::new(old_pos..match_old, new_pos..match_new);
                micro_gap_diff(toolbox, micro, out);
                out.push(RawOp::equal(toolbox.old[match_old]));
                old_pos = match_old + 1;
                new_pos = match_new + 1;
            }
            None => break,
        }
    }

    // Trailing tails once no further local match exists
    out.extend(
        toolbox.old[old_pos..region.old_end]
            .iter()
            .map(|&s| RawOp::remove(s)),
    );
    out.extend(
        toolbox.new[new_pos..region.new_end]
            .iter()
            .map(|&s| RawOp::add(s)),
    );
}

/// L3: micro anchors. Gaps whose sides share no symbol at all go straight
/// to the corridor; sizeable gaps get one more anchor pass at micro scale
/// before they do.
fn micro_gap_diff(toolbox: &mut Toolbox<'_>, region: Region, out: &mut Vec<RawOp>) {
    if region.is_empty() {
        return;
    }
    if region.old_len() == 0 {
        toolbox.push_all_added(region, out);
        return;
    }
    if region.new_len() == 0 {
        toolbox.push_all_removed(region, out);
        return;
    }

    let old_symbols: HashSet<Symbol> = toolbox.old[region.old_range()].iter().copied().collect();
    let any_common = toolbox.new[region.new_range()]
        .iter()
        .any(|s| old_symbols.contains(s));
    if !any_common {
        toolbox.corridor_diff(region, out);
        return;
    }

    if region.total_len() >= toolbox.config.quick_diff_threshold / 2 {
        let overlay = micro_config(toolbox.config);
        let anchors = toolbox.find_anchors_with(&overlay, region);
        let chain = toolbox.select_chain(anchors);
        if !chain.is_empty() {
            let mut prev_old = region.old_start;
            let mut prev_new = region.new_start;
            for anchor in &chain {
                let gap = Region::new(prev_old..anchor.old_pos, prev_new..anchor.new_pos);
                micro_gap_diff(toolbox, gap, out);
                toolbox.push_anchor_equals(anchor, out);
                prev_old = anchor.old_end();
                prev_new = anchor.new_end();
            }
            let tail = Region::new(prev_old..region.old_end, prev_new..region.new_end);
            micro_gap_diff(toolbox, tail, out);
            return;
        }
    }

    // L4
    toolbox.corridor_diff(region, out);
}

/// L3 search overlay: tiny chunks and stride so short runs can anchor.
fn micro_config(base: &DiffConfig) -> DiffConfig {
    let mut overlay = base.clone();
    overlay.min_match_length = 2;
    overlay.hunt_chunk_size = 2;
    overlay.jump_step = 2;
    overlay.quick_diff_threshold = 0;
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::snake::SnakeScratch;
    use crate::script::EditKind;

    fn run_with(old: &[Symbol], new: &[Symbol], config: &DiffConfig) -> Vec<RawOp> {
        let mut scratch = SnakeScratch::new();
        let mut toolbox = Toolbox::new(old, new, config, false, &mut scratch);
        PreserveStructure
            .compute(&mut toolbox, Region::new(0..old.len(), 0..new.len()))
            .unwrap()
    }

    fn run(old: &[Symbol], new: &[Symbol]) -> Vec<RawOp> {
        run_with(old, new, &DiffConfig::default())
    }

    fn apply(ops: &[RawOp], old: &[Symbol]) -> Vec<Symbol> {
        let mut cursor = 0;
        let mut result = Vec::new();
        for op in ops {
            match op.kind {
                EditKind::Equal => {
                    assert_eq!(old[cursor], op.symbol);
                    result.push(op.symbol);
                    cursor += 1;
                }
                EditKind::Remove => {
                    assert_eq!(old[cursor], op.symbol);
                    cursor += 1;
                }
                EditKind::Add => result.push(op.symbol),
            }
        }
        assert_eq!(cursor, old.len());
        result
    }

    #[test]
    fn test_aligned_content_stays_equal() {
        let old: Vec<Symbol> = (0..100).collect();
        let mut new = old.clone();
        new[40] = 999;

        let ops = run(&old, &new);
        assert_eq!(apply(&ops, &old), new);
        let equal_count = ops.iter().filter(|op| op.kind == EditKind::Equal).count();
        assert_eq!(equal_count, 99);
    }

    #[test]
    fn test_moved_block_becomes_floating_anchor() {
        // A 150-symbol block drifts 30 positions forward inside a large
        // window; L1 must recover it as one equal run
        let block: Vec<Symbol> = (1..=150).collect();
        let mut old: Vec<Symbol> = block.clone();
        old.extend(10_000..10_900);
        let mut new: Vec<Symbol> = (20_000..20_030).collect();
        new.extend(&block);
        new.extend(30_000..30_900);

        let ops = run(&old, &new);
        assert_eq!(apply(&ops, &old), new);
        let equal_count = ops.iter().filter(|op| op.kind == EditKind::Equal).count();
        assert_eq!(equal_count, 150);
    }

    #[test]
    fn test_micro_gap_with_no_common_symbols() {
        let old = vec![1, 5, 6, 2, 3];
        let new = vec![1, 8, 9, 2, 3];
        let ops = run(&old, &new);
        assert_eq!(apply(&ops, &old), new);
    }

    #[test]
    fn test_interleaved_churn_round_trips() {
        let old: Vec<Symbol> = (0..200).map(|i| i % 50).collect();
        let new: Vec<Symbol> = (0..180).map(|i| (i + 25) % 50).collect();
        let ops = run(&old, &new);
        assert_eq!(apply(&ops, &old), new);
    }

    #[test]
    fn test_empty_window() {
        assert!(run(&[], &[]).is_empty());
    }
}
