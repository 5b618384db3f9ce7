//! Anchor chain selection
//!
//! From an unsorted anchor list, pick the non-overlapping subset that is
//! monotone in both coordinates and maximizes the total covered length.
//! Classic weighted-subsequence DP with predecessor reconstruction.

use itertools::Itertools;
use log::debug;

use super::Anchor;

/// Select the best chain. A chain that fails the post-reconstruction
/// validation is discarded wholesale: better no anchors than a corrupt
/// chain.
pub fn select_chain(mut anchors: Vec<Anchor>) -> Vec<Anchor> {
    if anchors.is_empty() {
        return anchors;
    }

    anchors.sort_by_key(|a| (a.old_pos, a.new_pos));
    let n = anchors.len();

    // best[i] = greatest total covered length of any chain ending at i
    let mut best: Vec<usize> = anchors.iter().map(|a| a.length).collect();
    let mut pred: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        for j in 0..i {
            let extends = anchors[i].old_pos >= anchors[j].old_end()
                && anchors[i].new_pos >= anchors[j].new_end();
            if extends && best[j] + anchors[i].length > best[i] {
                best[i] = best[j] + anchors[i].length;
                pred[i] = Some(j);
            }
        }
    }

    let mut index = (0..n).max_by_key(|&i| best[i]).unwrap_or(0);
    let mut chain = vec![anchors[index]];
    while let Some(prev) = pred[index] {
        chain.push(anchors[prev]);
        index = prev;
    }
    chain.reverse();

    // Every consecutive pair must leave non-negative gaps on both sides
    let valid = chain
        .iter()
        .tuple_windows()
        .all(|(p, q)| q.old_pos >= p.old_end() && q.new_pos >= p.new_end());
    if !valid {
        debug!("selected anchor chain failed validation, dropping all anchors");
        return Vec::new();
    }

    chain
}
