//! The engine handle passed to strategies
//!
//! A [`Toolbox`] is created per diff call and exposes the full algorithmic
//! toolbox over the two symbol sequences: anchor search and chain
//! selection, the middle-snake search (with the engine's reusable scratch
//! buffers), the recursive and precise Myers variants, the corridor
//! heuristic, local-anchor probing, and pure-run emitters. Strategies hold
//! no back-reference to the engine; everything they need is here.

use crate::algorithm::snake::{find_middle_snake, MiddleSnake, SnakeScratch};
use crate::algorithm::{corridor, myers, push_adds, push_removes, recursive, Region};
use crate::anchor::{chain, finder, Anchor};
use crate::config::DiffConfig;
use crate::error::DiffError;
use crate::script::RawOp;
use crate::strategy::preserve;
use crate::tokenizers::Symbol;

/// Per-call handle over the sequences, configuration and scratch state.
pub struct Toolbox<'a> {
    pub old: &'a [Symbol],
    pub new: &'a [Symbol],
    pub config: &'a DiffConfig,
    pub debug: bool,
    scratch: &'a mut SnakeScratch,
}

impl<'a> Toolbox<'a> {
    pub(crate) fn new(
        old: &'a [Symbol],
        new: &'a [Symbol],
        config: &'a DiffConfig,
        debug: bool,
        scratch: &'a mut SnakeScratch,
    ) -> Self {
        Self {
            old,
            new,
            config,
            debug,
            scratch,
        }
    }

    /// Run the anchor finder over `region` with the call's configuration.
    pub fn find_anchors(&self, region: Region) -> Vec<Anchor> {
        finder::find_anchors(self.old, self.new, region, self.config, self.debug)
    }

    /// Run the anchor finder with an overlay configuration, for strategies
    /// that re-tune the search per level.
    pub fn find_anchors_with(&self, config: &DiffConfig, region: Region) -> Vec<Anchor> {
        finder::find_anchors(self.old, self.new, region, config, self.debug)
    }

    /// Select the best monotone non-overlapping chain.
    pub fn select_chain(&self, anchors: Vec<Anchor>) -> Vec<Anchor> {
        chain::select_chain(anchors)
    }

    /// Locate a middle snake for `region`.
    pub fn middle_snake(&mut self, region: Region) -> Option<MiddleSnake> {
        find_middle_snake(self.old, self.new, region, self.scratch)
    }

    /// Divide-and-conquer diff of `region` onto `out`.
    pub fn recursive_diff(&mut self, region: Region, out: &mut Vec<RawOp>) -> Result<(), DiffError> {
        recursive::diff_region(
            self.old,
            self.new,
            region,
            self.config,
            self.scratch,
            self.debug,
            out,
        )
    }

    /// Precise trace-based Myers diff of `region` onto `out`.
    pub fn precise_myers(&self, region: Region, out: &mut Vec<RawOp>) {
        myers::diff_region(self.old, self.new, region, out);
    }

    /// Corridor-heuristic diff of `region` onto `out`.
    pub fn corridor_diff(&self, region: Region, out: &mut Vec<RawOp>) {
        corridor::diff_region(self.old, self.new, region, self.config, self.debug, out);
    }

    /// Positional-scan diff of `region` onto `out` (the local-gap handler
    /// shared by the structure-preserving and patience strategies).
    pub fn local_gap_diff(&mut self, region: Region, out: &mut Vec<RawOp>) {
        preserve::local_gap_diff(self, region, out);
    }

    /// Search for the next nearby matching position after `(old_pos,
    /// new_pos)`: first along the main diagonal up to `lookahead`, then in
    /// a small off-diagonal neighborhood. Returns absolute positions.
    pub fn local_anchor(
        &self,
        old_pos: usize,
        new_pos: usize,
        region: Region,
        lookahead: usize,
    ) -> Option<(usize, usize)> {
        for offset in 1..=lookahead {
            let (o, n) = (old_pos + offset, new_pos + offset);
            if o >= region.old_end || n >= region.new_end {
                break;
            }
            if self.old[o] == self.new[n] {
                return Some((o, n));
            }
        }

        let max_radius = (lookahead / 2).min(10);
        for radius in 1..=max_radius {
            let o = old_pos + radius;
            if o >= region.old_end {
                break;
            }
            for delta in -(radius as isize)..=(radius as isize) {
                if delta == 0 {
                    continue;
                }
                let n = new_pos as isize + radius as isize + delta;
                if n < new_pos as isize || n >= region.new_end as isize {
                    continue;
                }
                if self.old[o] == self.new[n as usize] {
                    return Some((o, n as usize));
                }
            }
        }

        None
    }

    /// Emit the whole old-side of `region` as a `REMOVE` run.
    pub fn push_all_removed(&self, region: Region, out: &mut Vec<RawOp>) {
        push_removes(out, self.old, region.old_range());
    }

    /// Emit the whole new-side of `region` as an `ADD` run.
    pub fn push_all_added(&self, region: Region, out: &mut Vec<RawOp>) {
        push_adds(out, self.new, region.new_range());
    }

    /// Emit an anchor as its run of `EQUAL` operations.
    pub fn push_anchor_equals(&self, anchor: &Anchor, out: &mut Vec<RawOp>) {
        out.extend(
            self.old[anchor.old_pos..anchor.old_end()]
                .iter()
                .map(|&s| RawOp::equal(s)),
        );
    }
}
