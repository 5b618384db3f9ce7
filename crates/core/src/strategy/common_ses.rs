//! Default strategy: anchors plus shortest edit script
//!
//! Large windows are broken up along a global anchor chain; each gap is
//! then solved by whichever primitive fits its size, so precision is spent
//! where it is affordable and the corridor heuristic absorbs the rest.

use log::debug;

use super::DiffStrategy;
use crate::algorithm::{pathological_ratio, Region};
use crate::error::DiffError;
use crate::script::RawOp;
use crate::toolbox::Toolbox;

pub struct CommonSes;

impl DiffStrategy for CommonSes {
    fn compute(&self, toolbox: &mut Toolbox<'_>, window: Region) -> Result<Vec<RawOp>, DiffError> {
        let mut out = Vec::new();

        if window.total_len() < toolbox.config.quick_diff_threshold || !toolbox.config.use_anchors
        {
            toolbox.recursive_diff(window, &mut out)?;
            return Ok(out);
        }

        let anchors = toolbox.find_anchors(window);
        let chain = toolbox.select_chain(anchors);
        if chain.is_empty() {
            toolbox.recursive_diff(window, &mut out)?;
            return Ok(out);
        }

        if toolbox.debug {
            debug!(
                "commonSES: {} anchors chain a {}x{} window",
                chain.len(),
                window.old_len(),
                window.new_len()
            );
        }

        let mut prev_old = window.old_start;
        let mut prev_new = window.new_start;
        for anchor in &chain {
            let gap = Region::new(prev_old..anchor.old_pos, prev_new..anchor.new_pos);
            dispatch_gap(toolbox, gap, &mut out)?;
            toolbox.push_anchor_equals(anchor, &mut out);
            prev_old = anchor.old_end();
            prev_new = anchor.new_end();
        }
        let tail = Region::new(prev_old..window.old_end, prev_new..window.new_end);
        dispatch_gap(toolbox, tail, &mut out)?;

        Ok(out)
    }
}

/// Pick the right primitive for one gap between anchors.
fn dispatch_gap(
    toolbox: &mut Toolbox<'_>,
    gap: Region,
    out: &mut Vec<RawOp>,
) -> Result<(), DiffError> {
    if gap.is_empty() {
        return Ok(());
    }
    if pathological_ratio(gap.old_len(), gap.new_len()) {
        toolbox.push_all_removed(gap, out);
        toolbox.push_all_added(gap, out);
        return Ok(());
    }
    if gap.total_len() > toolbox.config.huge_diff_threshold {
        toolbox.corridor_diff(gap, out);
        return Ok(());
    }
    toolbox.recursive_diff(gap, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::snake::SnakeScratch;
    use crate::config::DiffConfig;
    use crate::script::EditKind;
    use crate::tokenizers::Symbol;

    fn run(old: &[Symbol], new: &[Symbol], config: &DiffConfig) -> Vec<RawOp> {
        let mut scratch = SnakeScratch::new();
        let mut toolbox = Toolbox::new(old, new, config, false, &mut scratch);
        CommonSes
            .compute(&mut toolbox, Region::new(0..old.len(), 0..new.len()))
            .unwrap()
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
    fn test_small_window_round_trip() {
        let config = DiffConfig::default();
        let old = vec![1, 2, 3, 4, 5];
        let new = vec![1, 9, 3, 4, 8, 5];
        let ops = run(&old, &new, &config);
        assert_eq!(apply(&ops, &old), new);
    }

    #[test]
    fn test_anchored_window_keeps_shared_run_equal() {
        // A 60-symbol shared run flanked by churn: the run must come back
        // purely as EQUAL operations
        let run_syms: Vec<Symbol> = (1..=60).collect();
        let mut old: Vec<Symbol> = (1000..1040).collect();
        old.extend(&run_syms);
        old.extend(2000..2040);
        let mut new: Vec<Symbol> = (3000..3040).collect();
        new.extend(&run_syms);
        new.extend(4000..4040);

        let config = DiffConfig::default();
        let ops = run(&old, &new, &config);
        assert_eq!(apply(&ops, &old), new);

        let equal_count = ops.iter().filter(|op| op.kind == EditKind::Equal).count();
        assert_eq!(equal_count, 60);
    }

    #[test]
    fn test_anchors_disabled_still_round_trips() {
        let run_syms: Vec<Symbol> = (1..=60).collect();
        let mut old: Vec<Symbol> = (1000..1040).collect();
        old.extend(&run_syms);
        let mut new: Vec<Symbol> = (3000..3040).collect();
        new.extend(&run_syms);

        let config = DiffConfig::default().with_use_anchors(false);
        let ops = run(&old, &new, &config);
        assert_eq!(apply(&ops, &old), new);
    }

    #[test]
    fn test_huge_gap_takes_the_corridor() {
        // Two anchors with a gap above huge_diff_threshold between them;
        // the result must still apply cleanly
        let run_a: Vec<Symbol> = (1..=60).collect();
        let run_b: Vec<Symbol> = (61..=120).collect();
        let mut old: Vec<Symbol> = run_a.clone();
        old.extend(10_000..10_150);
        old.extend(&run_b);
        let mut new: Vec<Symbol> = run_a.clone();
        new.extend(20_000..20_150);
        new.extend(&run_b);

        let config = DiffConfig::default();
        let ops = run(&old, &new, &config);
        assert_eq!(apply(&ops, &old), new);
        assert_eq!(
            ops.iter().filter(|op| op.kind == EditKind::Equal).count(),
            120
        );
    }

    #[test]
    fn test_pathological_gap_is_flushed() {
        let run_syms: Vec<Symbol> = (1..=60).collect();
        let mut old: Vec<Symbol> = run_syms.clone();
        old.extend(10_000..10_603); // 603 removed tokens
        let mut new: Vec<Symbol> = run_syms.clone();
        new.extend(20_000..20_005); // 5 added tokens

        let config = DiffConfig::default();
        let ops = run(&old, &new, &config);
        assert_eq!(apply(&ops, &old), new);
        assert_eq!(ops.len(), 60 + 603 + 5);
    }
}
