use std::collections::{HashMap, HashSet};

use log::{debug, info};
use rayon::prelude::*;

use crate::solver::types::{Calculation, Group, Solution, Solutions};
use crate::utils::{distinct_combinations, multiset_difference};

/// Find every arithmetic combination of `numbers` that comes closest to
/// `target`.
///
/// Each number may be used at most once; the operators are addition,
/// subtraction, multiplication and exact division, and every intermediate
/// result must be a positive integer. The returned [`Solutions`] carries the
/// true minimum distance from the target and one expression for every
/// distinct value at that distance.
///
/// `numbers` must be non-empty; the search is exponential in its length, so
/// callers with unbounded inputs should budget accordingly.
pub fn solve(target: u64, numbers: &[u64]) -> Solutions {
    info!("Solving for {} from {:?}", target, numbers);

    let mut selection = numbers.to_vec();
    selection.sort_unstable_by(|a, b| b.cmp(a));

    let arena = build_groups(&selection);

    let all: Vec<&Calculation> = arena
        .groups
        .iter()
        .flat_map(|group| group.calculations.iter())
        .collect();

    let difference = all
        .par_iter()
        .map(|calc| calc.value.abs_diff(target))
        .min()
        .unwrap_or(target);

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for calc in &all {
        if calc.value.abs_diff(target) == difference && seen.insert(calc.value) {
            results.push(Solution {
                value: calc.value,
                expression: calc.expression.clone(),
            });
        }
    }

    info!(
        "Smallest difference {} with {} distinct value(s)",
        difference,
        results.len()
    );

    Solutions {
        target,
        difference,
        results,
    }
}

/// Groups for every distinct sub-multiset of the selection, stored in
/// creation order so iteration is deterministic
struct Arena {
    groups: Vec<Group>,
    index: HashMap<Vec<u64>, usize>,
}

/// Build the group for every distinct sub-multiset of `selection`, smallest
/// first so both sides of every partition already exist.
fn build_groups(selection: &[u64]) -> Arena {
    let mut arena = Arena {
        groups: Vec::new(),
        index: HashMap::new(),
    };

    for size in 1..=selection.len() {
        for key in distinct_combinations(selection, size) {
            let calculations = if size == 1 {
                vec![Calculation::singleton(key[0])]
            } else {
                combine_partitions(&key, &arena)
            };
            debug!(
                "Group {:?}: {} calculation(s)",
                key,
                calculations.len()
            );
            arena.index.insert(key, arena.groups.len());
            arena.groups.push(Group { calculations });
        }
    }

    arena
}

/// Cross-combine the calculations of every unordered partition of `key` into
/// two non-empty complementary sides.
fn combine_partitions(key: &[u64], arena: &Arena) -> Vec<Calculation> {
    let mut calculations = Vec::new();

    for (left, right) in partition_pairs(key) {
        let left_group = &arena.groups[arena.index[&left]];
        let right_group = &arena.groups[arena.index[&right]];

        for c1 in &left_group.calculations {
            for c2 in &right_group.calculations {
                combine(c1, c2, &mut calculations);
            }
        }
    }

    calculations
}

/// Enumerate each unordered partition of `key` into two complementary
/// sub-multisets exactly once.
///
/// Left sides run from size m/2 (rounded up) to m-1, so the left side is
/// never the smaller one and no ordered pair appears twice. The one boundary
/// case is an even half-and-half split, where both orderings fall in the same
/// size class; those are halved by skipping any pair whose complement was
/// already emitted as a left side.
fn partition_pairs(key: &[u64]) -> Vec<(Vec<u64>, Vec<u64>)> {
    let m = key.len();
    let mut pairs = Vec::new();

    for left_size in m.div_ceil(2)..m {
        let even_half = 2 * left_size == m;
        let mut emitted = HashSet::new();

        for left in distinct_combinations(key, left_size) {
            let right = multiset_difference(key, &left);
            if even_half {
                // The complement of an earlier left side is the same
                // unordered partition seen from the other end
                if emitted.contains(&right) {
                    continue;
                }
                emitted.insert(left.clone());
            }
            pairs.push((left, right));
        }
    }

    pairs
}

/// Emit every legal combination of two calculations, larger operand first:
/// addition always; subtraction only when strictly positive; multiplication
/// only when neither operand is 1; division only when exact and the divisor
/// exceeds 1.
fn combine(a: &Calculation, b: &Calculation, out: &mut Vec<Calculation>) {
    let (a, b) = if a.value < b.value { (b, a) } else { (a, b) };
    let (x, y) = (a.value, b.value);

    if let Some(sum) = x.checked_add(y) {
        out.push(Calculation::combine(a, '+', b, sum));
    }
    if x > y {
        out.push(Calculation::combine(a, '-', b, x - y));
    }
    if x > 1
        && y > 1
        && let Some(product) = x.checked_mul(y)
    {
        out.push(Calculation::combine(a, '*', b, product));
    }
    if y > 1 && x % y == 0 {
        out.push(Calculation::combine(a, '/', b, x / y));
    }
}
