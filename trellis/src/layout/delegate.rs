//! Size delegation: dividing available space among grid lines.
//!
//! Greedy water-filling. Each round computes an equal share of whatever is
//! left, resolves the single most constrained line against that share, and
//! repeats with the rest. Resolving the tightest bound first means the
//! slack it frees (or the space it claims) is redistributed evenly over
//! every line still open.
//!
//! The algorithm is total: over-constrained input produces a degraded
//! allocation (some line below its minimum), never an error.
//!
//! # Guarantees
//!
//! When the visible minimums fit into `available` and the visible lines
//! can absorb it (one of them has no maximum, or the maximums add up to at
//! least `available`), every line lands inside its bounds and the sizes
//! add up to `available` exactly.
//!
//! Per-line sizes are not monotonic in `available` when minimums and
//! maximums interact. Lines (min 44), (max 18), (max 23) resolve to
//! `[44, 6, 6]` at 56 px but `[44, 13, 0]` at 57 px: once the share exceeds
//! 18 the second line is max-bound and resolves before the minimum.

use std::cmp::Reverse;

use crate::primitives::Axis;

use super::aggregate::LineSpec;

/// How tightly a line is bound relative to the current share.
///
/// Variant order is priority order; within a variant the payload orders
/// most-constrained first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    /// Maximum below the share: smaller maximum first.
    MaxBound(i32),
    /// Minimum above the share: larger minimum first.
    MinBound(Reverse<i32>),
    /// Fits the share under a maximum: least headroom first.
    Capped(i32),
    /// No maximum. Resolves last, so it takes the remainder.
    Free,
}

fn priority(line: &LineSpec, axis: Axis, share: i32) -> Priority {
    let max = line.spec.max(axis);
    if let Some(max) = max {
        if max < share {
            return Priority::MaxBound(max);
        }
    }
    if let Some(min) = line.spec.min(axis) {
        if min > share {
            return Priority::MinBound(Reverse(min));
        }
    }
    match max {
        Some(max) => Priority::Capped(max.saturating_sub(share)),
        None => Priority::Free,
    }
}

/// Divide `available` pixels along `axis` among `lines`.
///
/// Returns one size per input line. Hidden lines get 0 and take no part in
/// the distribution. Equal priorities resolve by ascending line index.
///
/// While the minimums of the lines still open fit into what is left, a
/// line never takes space those minimums need. Rounding leftovers go to
/// the most recently resolved lines that still have room. Infeasible
/// minimums or a total maximum below `available` break conservation, and
/// a single line's size is not monotonic in `available` (see the module
/// docs).
pub fn delegate(axis: Axis, available: i32, lines: &[LineSpec]) -> Vec<i32> {
    let mut sizes = vec![0; lines.len()];
    let mut remaining: Vec<usize> = (0..lines.len()).filter(|&i| !lines[i].hidden).collect();
    let mut resolved = Vec::with_capacity(remaining.len());
    let mut remaining_total = available;
    let mut reserved = remaining
        .iter()
        .fold(0i32, |sum, &i| sum.saturating_add(lines[i].spec.lower(axis)));
    let mut degraded = false;

    while !remaining.is_empty() {
        let share = remaining_total / remaining.len() as i32;

        let Some((pos, &line)) = remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| (priority(&lines[i], axis, share), i))
        else {
            break;
        };

        let spec = &lines[line].spec;
        let own_min = spec.lower(axis);
        reserved = reserved.saturating_sub(own_min);
        let limit = if reserved.saturating_add(own_min) <= remaining_total {
            remaining_total - reserved
        } else {
            remaining_total
        };

        let assigned = spec.clamp_extent(axis, share).clamp(0, limit.max(0));
        if assigned < own_min {
            degraded = true;
        }

        sizes[line] = assigned;
        remaining_total -= assigned;
        remaining.swap_remove(pos);
        resolved.push(line);
    }

    for &line in resolved.iter().rev() {
        if remaining_total <= 0 {
            break;
        }
        let room = lines[line].spec.upper(axis).saturating_sub(sizes[line]);
        let extra = room.min(remaining_total).max(0);
        sizes[line] += extra;
        remaining_total -= extra;
    }

    if degraded {
        tracing::warn!(
            "over-constrained {:?} delegation: {} px across {} lines -> {:?}",
            axis,
            available,
            lines.len(),
            sizes
        );
    } else {
        tracing::debug!("{:?} delegation: {} px -> {:?}", axis, available, sizes);
    }

    sizes
}
