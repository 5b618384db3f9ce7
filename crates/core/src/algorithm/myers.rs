//! Precise Myers O(ND) diff with trace backtracking
//!
//! The classic forward search from "An O(ND) Difference Algorithm and Its
//! Variations" (Myers, 1986), keeping a snapshot of the furthest-reaching
//! frontier per `d` so the optimal path can be reconstructed afterwards.
//! Memory is O((N+M)^2) in the worst case, which is why the recursive
//! driver only delegates here for gaps below `quick_diff_threshold`.

use super::{push_adds, push_removes, Region};
use crate::script::RawOp;
use crate::tokenizers::Symbol;

/// Compute a shortest edit script for `region` and append it to `out`.
pub fn diff_region(old: &[Symbol], new: &[Symbol], region: Region, out: &mut Vec<RawOp>) {
    let n = region.old_len();
    let m = region.new_len();

    if n == 0 && m == 0 {
        return;
    }
    if n == 0 {
        push_adds(out, new, region.new_range());
        return;
    }
    if m == 0 {
        push_removes(out, old, region.old_range());
        return;
    }

    let os = region.old_start;
    let ns = region.new_start;

    let max_d = n + m;
    let offset = max_d as isize;
    let idx = |k: isize| (k + offset) as usize;

    // v[k + offset] = furthest-reaching x on diagonal k; one snapshot per d
    let mut v = vec![0usize; 2 * max_d + 1];
    let mut trace: Vec<Vec<usize>> = Vec::new();

    'search: for d in 0..=(max_d as isize) {
        let mut k = -d;
        while k <= d {
            // Step down (take from new) or right (take from old), whichever
            // frontier reaches further.
            let mut x = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
                v[idx(k + 1)]
            } else {
                v[idx(k - 1)] + 1
            };
            let mut y = (x as isize - k) as usize;

            // Follow the snake
            while x < n && y < m && old[os + x] == new[ns + y] {
                x += 1;
                y += 1;
            }

            v[idx(k)] = x;

            if x >= n && y >= m {
                trace.push(v.clone());
                break 'search;
            }

            k += 2;
        }
        trace.push(v.clone());
    }

    backtrack(&trace, old, new, region, offset, out);
}

fn backtrack(
    trace: &[Vec<usize>],
    old: &[Symbol],
    new: &[Symbol],
    region: Region,
    offset: isize,
    out: &mut Vec<RawOp>,
) {
    let os = region.old_start;
    let ns = region.new_start;
    let idx = |k: isize| (k + offset) as usize;

    let mut ops: Vec<RawOp> = Vec::new();
    let mut x = region.old_len();
    let mut y = region.new_len();

    for d in (0..trace.len()).rev() {
        let k = x as isize - y as isize;
        let d_signed = d as isize;

        // Decide whether the previous frontier sat on k+1 (down, an ADD
        // from new) or k-1 (right, a REMOVE from old).
        let prev_k = if d == 0 {
            k
        } else if k == -d_signed
            || (k != d_signed && trace[d - 1][idx(k - 1)] < trace[d - 1][idx(k + 1)])
        {
            k + 1
        } else {
            k - 1
        };

        let prev_x = if d == 0 { 0 } else { trace[d - 1][idx(prev_k)] };
        let prev_y = (prev_x as isize - prev_k) as usize;

        // Walk the snake back, emitting the matching run
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            ops.push(RawOp::equal(old[os + x]));
        }

        if d > 0 {
            if prev_k == k + 1 {
                y -= 1;
                ops.push(RawOp::add(new[ns + y]));
            } else {
                x -= 1;
                ops.push(RawOp::remove(old[os + x]));
            }
        }
    }

    ops.reverse();
    out.extend(ops);
}
