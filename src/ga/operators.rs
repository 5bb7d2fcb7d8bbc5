//! Permutation crossover and mutation.
//!
//! - [`pmx`]: Partially Mapped Crossover with a single cut point
//! - [`pmx_pair`]: Two mirrored PMX children from one parent pair
//! - [`swap_mutation`]: Exchange two distinct random positions
//! - [`mutate`]: Apply [`swap_mutation`] with a given probability
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use rand::Rng;

use super::types::{validate_tour, Tour};
use crate::error::{Result, TspError};

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX) with cut point `k`.
///
/// # Algorithm
///
/// 1. Copy `parent1[0..=k]` into the child
/// 2. For each `i` in `0..=k` whose `parent2[i]` is not yet in the child,
///    follow the mapping chain `pos ← index of parent1[pos] in parent2`
///    from `pos = i` until `pos > k`, and place `parent2[i]` there
/// 3. Fill every remaining position `i` with `parent2[i]`
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Errors
/// [`TspError::InvalidPermutation`](crate::TspError::InvalidPermutation)
/// if either parent is not a permutation of `0..parent1.len()`. Checked up
/// front: on malformed parents the mapping chain need not terminate.
///
/// [`TspError::CutPointOutOfRange`](crate::TspError::CutPointOutOfRange)
/// unless `k < parent1.len() - 1`.
///
/// # Examples
///
/// ```
/// use u_tspga::ga::operators::pmx;
///
/// let child = pmx(&[0, 1, 2, 3], &[0, 2, 1, 3], 1).unwrap();
/// assert_eq!(child, vec![0, 1, 2, 3]);
/// ```
pub fn pmx(parent1: &[usize], parent2: &[usize], k: usize) -> Result<Tour> {
    let n = parent1.len();
    validate_tour(parent1, n)?;
    validate_tour(parent2, n)?;
    check_cut_point(k, n)?;

    Ok(pmx_unchecked(parent1, parent2, k))
}

fn check_cut_point(k: usize, n: usize) -> Result<()> {
    if k + 1 < n {
        Ok(())
    } else {
        Err(TspError::CutPointOutOfRange { cut: k, size: n })
    }
}

/// PMX on parents already known to be permutations of the same size.
fn pmx_unchecked(parent1: &[usize], parent2: &[usize], k: usize) -> Tour {
    let n = parent1.len();
    let unset = usize::MAX;

    let mut pos_in_p2 = vec![0usize; n];
    for (pos, &city) in parent2.iter().enumerate() {
        pos_in_p2[city] = pos;
    }

    // Step 1: head segment from parent1
    let mut child = vec![unset; n];
    let mut placed = vec![false; n];
    for i in 0..=k {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    // Step 2: displaced parent2 head values go where the chain leaves the head
    for i in 0..=k {
        let city = parent2[i];
        if placed[city] {
            continue;
        }
        let mut pos = i;
        while pos <= k {
            pos = pos_in_p2[parent1[pos]];
        }
        child[pos] = city;
        placed[city] = true;
    }

    // Step 3: the rest comes straight from parent2
    for (slot, &city) in child.iter_mut().zip(parent2) {
        if *slot == unset {
            *slot = city;
        }
    }

    child
}

/// Two PMX children with mirrored parent roles: `(pmx(p1, p2), pmx(p2, p1))`.
///
/// # Errors
/// Same as [`pmx`].
pub fn pmx_pair(parent1: &[usize], parent2: &[usize], k: usize) -> Result<(Tour, Tour)> {
    let n = parent1.len();
    validate_tour(parent1, n)?;
    validate_tour(parent2, n)?;
    check_cut_point(k, n)?;

    Ok((
        pmx_unchecked(parent1, parent2, k),
        pmx_unchecked(parent2, parent1, k),
    ))
}

/// Uniform cut point in `0..n-1`, or `None` when `n < 2`.
pub fn random_cut_point<R: Rng>(n: usize, rng: &mut R) -> Option<usize> {
    (n >= 2).then(|| rng.random_range(0..n - 1))
}

// ============================================================================
// Mutation
// ============================================================================

/// Swaps the contents of two distinct random positions.
///
/// No-op for tours shorter than 2.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    tour.swap(i, j);
}

/// Draws one uniform value in `[0, 1)`; below `probability` the tour gets a
/// [`swap_mutation`]. Returns whether it was mutated.
pub fn mutate<R: Rng>(tour: &mut [usize], probability: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() < probability {
        swap_mutation(tour, rng);
        true
    } else {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        validate_tour(perm, n).is_ok()
    }

    // ---- PMX ----

    #[test]
    fn test_pmx_worked_example() {
        let child = pmx(&[0, 1, 2, 3], &[0, 2, 1, 3], 1).expect("valid parents");
        assert_eq!(child, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_pmx_mirrored_example() {
        let child = pmx(&[0, 2, 1, 3], &[0, 1, 2, 3], 1).expect("valid parents");
        assert_eq!(child, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_pmx_follows_long_chain() {
        // head of p1 = [0, 1, 2]; p2 head [2, 0, 4]:
        // 4 is displaced; chain from i = 2: p1[2] = 2 sits at p2[0],
        // p1[0] = 0 sits at p2[1], p1[1] = 1 sits at p2[3] > k
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [2, 0, 4, 1, 3];
        let child = pmx(&p1, &p2, 2).expect("valid parents");
        assert_eq!(child, vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_pmx_keeps_head_of_first_parent() {
        let p1 = [3, 0, 4, 1, 2];
        let p2 = [1, 2, 3, 4, 0];
        for k in 0..4 {
            let child = pmx(&p1, &p2, k).expect("valid parents");
            assert_eq!(&child[..=k], &p1[..=k]);
            assert!(is_valid_permutation(&child, 5));
        }
    }

    #[test]
    fn test_pmx_identical_parents() {
        let p = [4, 2, 0, 1, 3];
        for k in 0..4 {
            assert_eq!(pmx(&p, &p, k).expect("valid parents"), p.to_vec());
        }
    }

    #[test]
    fn test_pmx_rejects_duplicate() {
        let err = pmx(&[0, 1, 2, 3], &[0, 1, 1, 3], 1);
        assert!(matches!(err, Err(TspError::InvalidPermutation(_))));
    }

    #[test]
    fn test_pmx_rejects_length_mismatch() {
        assert!(pmx(&[0, 1, 2, 3], &[0, 1, 2], 1).is_err());
    }

    #[test]
    fn test_pmx_cut_point_out_of_range() {
        assert!(matches!(
            pmx(&[0, 1, 2], &[2, 1, 0], 2),
            Err(TspError::CutPointOutOfRange { cut: 2, size: 3 })
        ));
        assert!(matches!(
            pmx_pair(&[0, 1, 2], &[2, 1, 0], usize::MAX),
            Err(TspError::CutPointOutOfRange { .. })
        ));
    }

    #[test]
    fn test_pmx_single_city_has_no_cut_point() {
        assert!(pmx(&[0], &[0], 0).is_err());
        assert!(pmx_pair(&[], &[], 0).is_err());
    }

    #[test]
    fn test_pmx_pair_mirrors() {
        let p1 = [0, 1, 2, 3, 4, 5];
        let p2 = [5, 3, 1, 0, 4, 2];
        let (c1, c2) = pmx_pair(&p1, &p2, 2).expect("valid parents");
        assert_eq!(c1, pmx(&p1, &p2, 2).expect("valid"));
        assert_eq!(c2, pmx(&p2, &p1, 2).expect("valid"));
    }

    #[test]
    fn test_random_cut_point_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_cut_point(0, &mut rng), None);
        assert_eq!(random_cut_point(1, &mut rng), None);
        assert_eq!(random_cut_point(2, &mut rng), Some(0));
        for _ in 0..1000 {
            let k = random_cut_point(10, &mut rng).expect("n >= 2");
            assert!(k < 9);
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let original: Vec<usize> = (0..10).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            let changed = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_mutate_probability_zero_never_changes() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..8).collect();
        for _ in 0..500 {
            let mut perm = original.clone();
            assert!(!mutate(&mut perm, 0.0, &mut rng));
            assert_eq!(perm, original);
        }
    }

    #[test]
    fn test_mutate_probability_one_always_swaps() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..8).collect();
        for _ in 0..500 {
            let mut perm = original.clone();
            assert!(mutate(&mut perm, 1.0, &mut rng));
            let changed = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
        }
    }

    // ---- Properties ----

    fn permutation(n: usize, seed: u64) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut rng);
        perm
    }

    proptest! {
        #[test]
        fn prop_pmx_yields_permutation(
            n in 2usize..40,
            s1 in any::<u64>(),
            s2 in any::<u64>(),
            k_seed in any::<usize>(),
        ) {
            let p1 = permutation(n, s1);
            let p2 = permutation(n, s2);
            let k = k_seed % (n - 1);
            let (c1, c2) = pmx_pair(&p1, &p2, k).unwrap();
            prop_assert!(is_valid_permutation(&c1, n));
            prop_assert!(is_valid_permutation(&c2, n));
            prop_assert_eq!(&c1[..=k], &p1[..=k]);
        }

        #[test]
        fn prop_mutation_keeps_permutation(n in 2usize..40, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut perm = permutation(n, seed);
            mutate(&mut perm, 1.0, &mut rng);
            prop_assert!(is_valid_permutation(&perm, n));
        }
    }
}
