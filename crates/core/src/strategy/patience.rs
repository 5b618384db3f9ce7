//! Patience strategy: unique-token LIS anchors
//!
//! At every level, symbols occurring exactly once on both sides are paired
//! and the longest increasing subsequence of those pairs becomes the anchor
//! skeleton. Regions between anchors recurse; regions with no unique
//! common symbols fall through to the positional local-gap handler.

use std::collections::HashMap;

use log::debug;

use super::DiffStrategy;
use crate::algorithm::Region;
use crate::error::DiffError;
use crate::script::RawOp;
use crate::tokenizers::Symbol;
use crate::toolbox::Toolbox;

pub struct PatienceDiff;

impl DiffStrategy for PatienceDiff {
    fn compute(&self, toolbox: &mut Toolbox<'_>, window: Region) -> Result<Vec<RawOp>, DiffError> {
        let mut out = Vec::new();
        diff_level(toolbox, window, &mut out);
        Ok(out)
    }
}

fn diff_level(toolbox: &mut Toolbox<'_>, region: Region, out: &mut Vec<RawOp>) {
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

    let pairs = unique_pairs(toolbox.old, toolbox.new, region);
    let lis = longest_increasing(&pairs);

    if lis.is_empty() {
        if toolbox.debug {
            debug!(
                "patience: no unique anchors in {}x{} region, using local scan",
                region.old_len(),
                region.new_len()
            );
        }
        toolbox.local_gap_diff(region, out);
        return;
    }

    let mut prev_old = region.old_start;
    let mut prev_new = region.new_start;
    for &(old_pos, new_pos) in &lis {
        let before = Region::new(prev_old..old_pos, prev_new..new_pos);
        diff_level(toolbox, before, out);
        out.push(RawOp::equal(toolbox.old[old_pos]));
        prev_old = old_pos + 1;
        prev_new = new_pos + 1;
    }
    let tail = Region::new(prev_old..region.old_end, prev_new..region.new_end);
    diff_level(toolbox, tail, out);
}

/// Pair up symbols that occur exactly once on each side of the region,
/// ordered by old position.
fn unique_pairs(old: &[Symbol], new: &[Symbol], region: Region) -> Vec<(usize, usize)> {
    let mut old_seen: HashMap<Symbol, (usize, usize)> = HashMap::new();
    for pos in region.old_range() {
        let entry = old_seen.entry(old[pos]).or_insert((0, pos));
        entry.0 += 1;
        entry.1 = pos;
    }
    let mut new_seen: HashMap<Symbol, (usize, usize)> = HashMap::new();
    for pos in region.new_range() {
        let entry = new_seen.entry(new[pos]).or_insert((0, pos));
        entry.0 += 1;
        entry.1 = pos;
    }

    let mut pairs: Vec<(usize, usize)> = old_seen
        .iter()
        .filter(|(_, &(count, _))| count == 1)
        .filter_map(|(symbol, &(_, old_pos))| match new_seen.get(symbol) {
            Some(&(1, new_pos)) => Some((old_pos, new_pos)),
            _ => None,
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Longest strictly-increasing subsequence by new position, via patience
/// sorting with predecessor pointers.
fn longest_increasing(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut piles: Vec<usize> = Vec::new();
    let mut pred: Vec<Option<usize>> = vec![None; pairs.len()];

    for (i, &(_, new_pos)) in pairs.iter().enumerate() {
        let slot = piles.partition_point(|&p| pairs[p].1 < new_pos);
        pred[i] = if slot > 0 { Some(piles[slot - 1]) } else { None };
        if slot == piles.len() {
            piles.push(i);
        } else {
            piles[slot] = i;
        }
    }

    let mut chain = Vec::new();
    let mut cursor = piles.last().copied();
    while let Some(i) = cursor {
        chain.push(pairs[i]);
        cursor = pred[i];
    }
    chain.reverse();
    chain
}
