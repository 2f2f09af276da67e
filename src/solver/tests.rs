use std::collections::HashSet;

use crate::guess::validate;
use crate::solver::solve;

/// Reference enumeration of every reachable value: repeatedly pick any two
/// remaining numbers, combine them under the game rules, and recurse on the
/// reduced pool. No partition deduplication, no memoization.
fn brute_reachable(numbers: &[u64]) -> HashSet<u64> {
    fn rec(pool: Vec<u64>, out: &mut HashSet<u64>) {
        for &n in &pool {
            out.insert(n);
        }
        for i in 0..pool.len() {
            for j in 0..pool.len() {
                if i == j {
                    continue;
                }
                let (x, y) = (pool[i], pool[j]);
                if x < y {
                    continue;
                }

                let rest: Vec<u64> = pool
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &v)| v)
                    .collect();

                let mut candidates = vec![x + y, x * y];
                if x > y {
                    candidates.push(x - y);
                }
                if y > 0 && x % y == 0 {
                    candidates.push(x / y);
                }

                for result in candidates {
                    let mut next = rest.clone();
                    next.push(result);
                    rec(next, out);
                }
            }
        }
    }

    let mut out = HashSet::new();
    rec(numbers.to_vec(), &mut out);
    out
}

#[test]
fn test_classic_round_is_solved_exactly() {
    let selection = [100, 75, 50, 25, 6, 3];
    let solutions = solve(952, &selection);

    assert_eq!(solutions.target, 952);
    assert_eq!(solutions.difference, 0);
    assert!(solutions.is_exact());
    assert!(!solutions.results.is_empty());
    assert!(solutions.results.iter().all(|s| s.value == 952));
}

#[test]
fn test_solver_expressions_round_trip_through_validator() {
    let selection = [100, 75, 50, 25, 6, 3];
    for target in [952, 813, 268, 999] {
        let solutions = solve(target, &selection);
        for solution in &solutions.results {
            assert_eq!(
                validate(&solution.expression, &selection),
                Ok(solution.value),
                "expression {:?} should validate to {}",
                solution.expression,
                solution.value
            );
        }
    }
}

#[test]
fn test_difference_matches_brute_force_on_small_selections() {
    let selections: [&[u64]; 4] = [
        &[4, 2, 2],
        &[3, 3, 2, 2],
        &[7, 7, 7],
        &[10, 5, 5, 2, 1],
    ];

    for selection in selections {
        let reachable = brute_reachable(selection);
        for target in 1..=100 {
            let expected = reachable
                .iter()
                .map(|&v| v.abs_diff(target))
                .min()
                .unwrap_or(target);
            let solutions = solve(target, selection);
            assert_eq!(
                solutions.difference, expected,
                "difference mismatch for target {} over {:?}",
                target, selection
            );
        }
    }
}

#[test]
fn test_even_split_dedup_drops_no_value() {
    // Size-4 selections with duplicate values stress the half-and-half
    // partition case; the exact-hit set must match the brute force
    for selection in [&[3, 3, 2, 2][..], &[4, 2, 2, 1][..]] {
        let reachable = brute_reachable(selection);
        for target in 1..=200 {
            let exact = solve(target, selection).difference == 0;
            assert_eq!(
                exact,
                reachable.contains(&target),
                "target {} over {:?}",
                target,
                selection
            );
        }
    }
}

#[test]
fn test_determinism() {
    let selection = [100, 75, 50, 25, 6, 3];
    let first = solve(813, &selection);
    let second = solve(813, &selection);

    assert_eq!(first.difference, second.difference);
    let first_values: HashSet<u64> = first.results.iter().map(|s| s.value).collect();
    let second_values: HashSet<u64> = second.results.iter().map(|s| s.value).collect();
    assert_eq!(first_values, second_values);
}

#[test]
fn test_results_deduplicate_values() {
    let solutions = solve(10, &[5, 5, 2]);
    let values: Vec<u64> = solutions.results.iter().map(|s| s.value).collect();
    let distinct: HashSet<u64> = values.iter().copied().collect();
    assert_eq!(values.len(), distinct.len());
}

#[test]
fn test_singleton_selection() {
    let solutions = solve(7, &[3]);
    assert_eq!(solutions.difference, 4);
    assert_eq!(solutions.results.len(), 1);
    assert_eq!(solutions.results[0].value, 3);
    assert_eq!(solutions.results[0].expression, "3");
}

#[test]
fn test_results_not_empty_even_when_far_off_target() {
    // Every reachable value differs from the target by more than the target
    // itself; the closest one must still be reported
    let solutions = solve(1, &[10]);
    assert_eq!(solutions.difference, 9);
    assert_eq!(solutions.results.len(), 1);
    assert_eq!(solutions.results[0].value, 10);
}

#[test]
fn test_duplicate_numbers_each_usable_once() {
    let solutions = solve(6, &[3, 3]);
    assert_eq!(solutions.difference, 0);
    assert!(solutions.results.iter().any(|s| s.expression == "3 + 3"));
}

#[test]
fn test_no_zero_or_negative_intermediates_needed() {
    // 5 - 5 and 5 / 5-style dead ends must not leak into results
    let solutions = solve(25, &[5, 5]);
    assert_eq!(solutions.difference, 0);
    assert_eq!(solutions.results[0].value, 25);
    assert_eq!(solutions.results[0].expression, "5 * 5");
}
