//! Position-subset enumeration.
//!
//! Subsets are produced in a fixed generator order: sizes ascending, and
//! lexicographic index order over the caller's position list within each
//! size. The order is part of the output contract, since mutant names and
//! the persisted name list follow it.

use super::error::EngineError;

/// Number of non-empty subsets of `n` positions with at most `max_size`
/// members: `sum_{r=1..min(max_size, n)} C(n, r)`. Saturates at `u128::MAX`
/// instead of overflowing.
pub fn count_subsets(n: usize, max_size: usize) -> u128 {
    let cap = max_size.min(n);
    let mut total: u128 = 0;
    let mut binom: u128 = 1;
    for r in 1..=cap {
        // C(n, r) = C(n, r - 1) * (n - r + 1) / r, exact at every step.
        binom = match binom.checked_mul((n - r + 1) as u128) {
            Some(product) => product / r as u128,
            None => return u128::MAX,
        };
        total = match total.checked_add(binom) {
            Some(sum) => sum,
            None => return u128::MAX,
        };
    }
    total
}

/// Refuses a screen whose subset count exceeds the configured ceiling,
/// before any subset is materialized. The count is taken prior to the
/// mandatory-position filter.
pub fn check_ceiling(
    n: usize,
    max_size: usize,
    ceiling: u64,
) -> Result<u128, EngineError> {
    let needed = count_subsets(n, max_size);
    if needed > u128::from(ceiling) {
        return Err(EngineError::TooManyCombinations { needed, ceiling });
    }
    Ok(needed)
}

/// Enumerates every qualifying position subset.
///
/// `max_mutations` caps the subset size (`None` means up to all positions);
/// subsets missing any mandatory position are dropped. The empty subset is
/// never produced.
pub fn enumerate(
    positions: &[usize],
    max_mutations: Option<usize>,
    mandatory: &[usize],
) -> Vec<Vec<usize>> {
    let cap = max_mutations.unwrap_or(positions.len()).min(positions.len());
    let mut subsets = Vec::new();
    for size in 1..=cap {
        push_combinations(positions, size, &mut subsets);
    }
    subsets.retain(|subset| mandatory.iter().all(|m| subset.contains(m)));
    subsets
}

/// Appends all `size`-element combinations of `positions`, preserving the
/// input order inside each combination.
fn push_combinations(positions: &[usize], size: usize, out: &mut Vec<Vec<usize>>) {
    let n = positions.len();
    let mut indices: Vec<usize> = (0..size).collect();
    loop {
        out.push(indices.iter().map(|&i| positions[i]).collect());

        // Advance to the next combination in lexicographic index order.
        let mut pivot = size;
        while pivot > 0 && indices[pivot - 1] == pivot - 1 + n - size {
            pivot -= 1;
        }
        if pivot == 0 {
            return;
        }
        indices[pivot - 1] += 1;
        for i in pivot..size {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod count_tests {
        use super::*;

        #[test]
        fn counts_follow_the_binomial_sum() {
            // C(3,1) + C(3,2) = 6
            assert_eq!(count_subsets(3, 2), 6);
            // All non-empty subsets of 3: 2^3 - 1
            assert_eq!(count_subsets(3, 3), 7);
            // max_size above n clamps to n.
            assert_eq!(count_subsets(3, 10), 7);
            assert_eq!(count_subsets(0, 5), 0);
        }

        #[test]
        fn large_inputs_saturate_instead_of_overflowing() {
            assert_eq!(count_subsets(200, 200), u128::MAX);
        }

        #[test]
        fn ceiling_check_passes_small_screens() {
            assert_eq!(check_ceiling(3, 2, 1_000_000).unwrap(), 6);
        }

        #[test]
        fn ceiling_check_refuses_oversized_screens() {
            let err = check_ceiling(30, 30, 1_000_000).unwrap_err();
            match err {
                EngineError::TooManyCombinations { needed, ceiling } => {
                    assert_eq!(needed, (1u128 << 30) - 1);
                    assert_eq!(ceiling, 1_000_000);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    mod enumerate_tests {
        use super::*;

        #[test]
        fn sizes_ascend_and_order_is_lexicographic_within_a_size() {
            let subsets = enumerate(&[0, 2, 4], Some(2), &[]);
            assert_eq!(
                subsets,
                vec![
                    vec![0],
                    vec![2],
                    vec![4],
                    vec![0, 2],
                    vec![0, 4],
                    vec![2, 4],
                ]
            );
        }

        #[test]
        fn follows_the_caller_position_order() {
            let subsets = enumerate(&[4, 0], None, &[]);
            assert_eq!(subsets, vec![vec![4], vec![0], vec![4, 0]]);
        }

        #[test]
        fn never_emits_the_empty_subset() {
            assert!(enumerate(&[0, 1], None, &[]).iter().all(|s| !s.is_empty()));
            assert!(enumerate(&[0, 1], Some(0), &[]).is_empty());
        }

        #[test]
        fn mandatory_positions_filter_subsets() {
            let subsets = enumerate(&[0, 2, 4], Some(2), &[2]);
            assert_eq!(subsets, vec![vec![2], vec![0, 2], vec![2, 4]]);
        }

        #[test]
        fn multiple_mandatory_positions_must_all_be_present() {
            let subsets = enumerate(&[0, 2, 4], None, &[0, 4]);
            assert_eq!(subsets, vec![vec![0, 4], vec![0, 2, 4]]);
        }
    }
}
