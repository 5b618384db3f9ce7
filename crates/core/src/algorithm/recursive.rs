//! Divide-and-conquer Myers driver
//!
//! Splits a region around middle snakes until the pieces are small enough
//! for the precise trace-based search. Snakes that fail validation (which
//! should be impossible) are recovered by re-running precise Myers on the
//! region; a missing or empty snake falls through to the corridor
//! heuristic so huge chaotic gaps stay linear.

use log::debug;

use super::snake::{find_middle_snake, SnakeScratch};
use super::{corridor, myers, push_adds, push_removes, Region};
use crate::config::DiffConfig;
use crate::error::DiffError;
use crate::script::RawOp;
use crate::tokenizers::Symbol;

/// Diff `region` and append the resulting operations to `out`.
pub fn diff_region(
    old: &[Symbol],
    new: &[Symbol],
    region: Region,
    config: &DiffConfig,
    scratch: &mut SnakeScratch,
    debug_trace: bool,
    out: &mut Vec<RawOp>,
) -> Result<(), DiffError> {
    region.validate(old.len(), new.len())?;

    if region.is_empty() {
        return Ok(());
    }
    if region.old_len() == 0 {
        push_adds(out, new, region.new_range());
        return Ok(());
    }
    if region.new_len() == 0 {
        push_removes(out, old, region.old_range());
        return Ok(());
    }

    if region.total_len() < config.quick_diff_threshold {
        myers::diff_region(old, new, region, out);
        return Ok(());
    }

    let snake = match find_middle_snake(old, new, region, scratch) {
        Some(snake) if !snake.is_empty() => snake,
        _ => {
            // No usable split point; stay linear instead of thrashing
            if debug_trace {
                debug!(
                    "no positive middle snake for {}x{} region, using corridor",
                    region.old_len(),
                    region.new_len()
                );
            }
            corridor::diff_region(old, new, region, config, debug_trace, out);
            return Ok(());
        }
    };

    // The snake must be a genuine matching run on both sides
    let valid = (0..snake.len()).all(|i| {
        old[region.old_start + snake.x + i] == new[region.new_start + snake.y + i]
    });
    if !valid {
        if debug_trace {
            debug!("middle snake failed validation, re-running precise search");
        }
        myers::diff_region(old, new, region, out);
        return Ok(());
    }

    if debug_trace {
        debug!(
            "middle snake ({}, {})..({}, {}) splits {}x{} region",
            snake.x,
            snake.y,
            snake.u,
            snake.v,
            region.old_len(),
            region.new_len()
        );
    }

    let left = Region::new(
        region.old_start..region.old_start + snake.x,
        region.new_start..region.new_start + snake.y,
    );
    diff_region(old, new, left, config, scratch, debug_trace, out)?;

    out.extend(
        old[region.old_start + snake.x..region.old_start + snake.u]
            .iter()
            .map(|&s| RawOp::equal(s)),
    );

    let right = Region::new(
        region.old_start + snake.u..region.old_end,
        region.new_start + snake.v..region.new_end,
    );
    diff_region(old, new, right, config, scratch, debug_trace, out)
}
