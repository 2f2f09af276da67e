use std::collections::{HashMap, HashSet};

use log::debug;

/// Count the multiplicity of each value in a multiset.
pub fn counts(numbers: &[u64]) -> HashMap<u64, usize> {
    let mut map = HashMap::new();
    for &n in numbers {
        *map.entry(n).or_insert(0) += 1;
    }
    map
}

/// Enumerate every distinct size-`k` sub-multiset of `numbers`, in
/// combination order.
///
/// `numbers` must already be sorted; choosing by index then produces each
/// sub-multiset as a sorted tuple, and value-identical choices of different
/// physical elements collapse to the same tuple, which is emitted once.
///
/// This uses an iterative index walk to avoid recursion on larger selections.
pub fn distinct_combinations(numbers: &[u64], k: usize) -> Vec<Vec<u64>> {
    debug!(
        "Generating distinct {}-combinations of {:?}",
        k, numbers
    );

    let n = numbers.len();
    if k == 0 || k > n {
        return vec![];
    }

    let mut result = Vec::new();
    let mut seen = HashSet::new();
    let mut indices: Vec<usize> = (0..k).collect();

    loop {
        let combo: Vec<u64> = indices.iter().map(|&i| numbers[i]).collect();
        if seen.insert(combo.clone()) {
            result.push(combo);
        }

        // Advance the rightmost index that can still move
        let mut pos = k;
        while pos > 0 {
            pos -= 1;
            if indices[pos] < n - (k - pos) {
                indices[pos] += 1;
                for later in pos + 1..k {
                    indices[later] = indices[later - 1] + 1;
                }
                break;
            }
            if pos == 0 {
                debug!("Generated {} distinct combinations", result.len());
                return result;
            }
        }
    }
}

/// Remove one occurrence of each element of `part` from `whole`, preserving
/// order. Both slices must be sorted the same way and `part` must be a
/// sub-multiset of `whole`.
pub fn multiset_difference(whole: &[u64], part: &[u64]) -> Vec<u64> {
    let mut remaining = part.iter();
    let mut next = remaining.next();
    let mut result = Vec::with_capacity(whole.len() - part.len());

    for &n in whole {
        match next {
            Some(&k) if n == k => next = remaining.next(),
            _ => result.push(n),
        }
    }

    result
}
