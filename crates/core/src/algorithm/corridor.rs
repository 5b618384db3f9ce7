//! Bounded-corridor heuristic diff
//!
//! A linear-time greedy walker for gaps where the precise algorithm would
//! explode. Two cursors advance through the region; a corridor of diagonals
//! around the starting diagonal keeps the walk from wandering, a short
//! lookahead decides which side to consume when the current symbols differ,
//! and rarity of the competing symbols breaks ties. The output is not
//! guaranteed minimal, only valid and cheap.

use log::debug;

use super::{push_adds, push_removes, pathological_ratio, Region};
use crate::config::DiffConfig;
use crate::script::RawOp;
use crate::tokenizers::Symbol;

/// A symbol with at most this many occurrences left in its window counts
/// as rare and is worth holding on to.
pub const RARE_OCCURRENCE_LIMIT: usize = 3;

/// Occurrence counting stops here; beyond the rarity limit the exact count
/// does not matter.
pub const OCCURRENCE_COUNT_CAP: usize = 4;

/// Emit an edit script for `region` onto `out`. Always terminates within
/// `N + M + 100` iterations.
pub fn diff_region(
    old: &[Symbol],
    new: &[Symbol],
    region: Region,
    config: &DiffConfig,
    debug_trace: bool,
    out: &mut Vec<RawOp>,
) {
    let n = region.old_len();
    let m = region.new_len();

    // A grotesquely lopsided gap is not worth walking
    if pathological_ratio(n, m) {
        if debug_trace {
            debug!("pathological {}x{} gap, flushing as remove+add", n, m);
        }
        push_removes(out, old, region.old_range());
        push_adds(out, new, region.new_range());
        return;
    }

    let total = n + m;
    let adaptive_corridor = config.corridor_width.min(10.max(total / 100)) as isize;
    let adaptive_lookahead = config.lookahead.min(5.max(total / 200));

    let max_iterations = total + 100;
    let stall_limit = 50.max(max_iterations / 10);

    let oe = region.old_end;
    let ne = region.new_end;
    let mut old_pos = region.old_start;
    let mut new_pos = region.new_start;
    let start_diagonal = new_pos as isize - old_pos as isize;

    let mut iterations = 0usize;
    let mut last_progress = 0usize;

    loop {
        iterations += 1;
        if iterations > max_iterations || iterations - last_progress > stall_limit {
            if debug_trace {
                debug!(
                    "corridor walker hit its rails after {} iterations, flushing",
                    iterations
                );
            }
            push_removes(out, old, old_pos..oe);
            push_adds(out, new, new_pos..ne);
            return;
        }

        if old_pos >= oe && new_pos >= ne {
            return;
        }
        if old_pos >= oe {
            push_adds(out, new, new_pos..ne);
            return;
        }
        if new_pos >= ne {
            push_removes(out, old, old_pos..oe);
            return;
        }

        if old[old_pos] == new[new_pos] {
            out.push(RawOp::equal(old[old_pos]));
            old_pos += 1;
            new_pos += 1;
            last_progress = iterations;
            continue;
        }

        // Pull back toward the starting diagonal before anything else
        let current_diagonal = new_pos as isize - old_pos as isize;
        if (current_diagonal - start_diagonal).abs() > adaptive_corridor {
            if current_diagonal > start_diagonal {
                out.push(RawOp::remove(old[old_pos]));
                old_pos += 1;
            } else {
                out.push(RawOp::add(new[new_pos]));
                new_pos += 1;
            }
            last_progress = iterations;
            continue;
        }

        // How soon does each side's current symbol appear on the other?
        let old_in_new = find_ahead(new, new_pos + 1, ne, adaptive_lookahead, old[old_pos]);
        let new_in_old = find_ahead(old, old_pos + 1, oe, adaptive_lookahead, new[new_pos]);

        let take_new = match (old_in_new, new_in_old) {
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(a), Some(b)) => a <= b,
            (None, None) => {
                // Neither companion is nearby; keep whichever current
                // symbol is rarer in its remaining window
                let old_rare = occurrences(old, old_pos, oe, old[old_pos]) <= RARE_OCCURRENCE_LIMIT;
                let new_rare = occurrences(new, new_pos, ne, new[new_pos]) <= RARE_OCCURRENCE_LIMIT;
                match (old_rare, new_rare) {
                    (true, false) => true,
                    (false, true) => false,
                    // Both or neither: consume from the longer side
                    _ => (oe - old_pos) < (ne - new_pos),
                }
            }
        };

        if take_new {
            out.push(RawOp::add(new[new_pos]));
            new_pos += 1;
        } else {
            out.push(RawOp::remove(old[old_pos]));
            old_pos += 1;
        }
        last_progress = iterations;
    }
}

/// Distance (1-based) to the first occurrence of `needle` in
/// `seq[from..end)`, scanning at most `limit` positions.
fn find_ahead(
    seq: &[Symbol],
    from: usize,
    end: usize,
    limit: usize,
    needle: Symbol,
) -> Option<usize> {
    seq[from..end.min(from + limit)]
        .iter()
        .position(|&s| s == needle)
        .map(|offset| offset + 1)
}

/// Occurrences of `needle` in `seq[from..end)`, counting no further than
/// the cap.
fn occurrences(seq: &[Symbol], from: usize, end: usize, needle: Symbol) -> usize {
    let mut count = 0;
    for &s in &seq[from..end] {
        if s == needle {
            count += 1;
            if count >= OCCURRENCE_COUNT_CAP {
                break;
            }
        }
    }
    count
}
