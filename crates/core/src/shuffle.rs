use rand::Rng;
use rand::seq::SliceRandom;

/// Presentation order of a session: a permutation of bank indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShuffledOrder(Vec<usize>);

impl ShuffledOrder {
    /// Draw a uniformly random permutation of `0..len`.
    ///
    /// Uses an in-place Fisher-Yates pass, so each of the `len!` orderings is
    /// equally likely.
    pub fn generate<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.as_mut_slice().shuffle(rng);
        Self(indices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bank index presented at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// True when every index in `0..len` appears exactly once.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &index in &self.0 {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_yields_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        for len in 0..20 {
            let order = ShuffledOrder::generate(len, &mut rng);
            assert_eq!(order.len(), len);
            assert!(order.is_permutation(), "{order:?}");
        }
    }

    #[test]
    fn is_permutation_rejects_duplicates_and_gaps() {
        assert!(ShuffledOrder(vec![2, 0, 3, 1]).is_permutation());
        assert!(!ShuffledOrder(vec![0, 0, 2]).is_permutation());
        assert!(!ShuffledOrder(vec![0, 3, 1]).is_permutation());
    }

    #[test]
    fn every_index_lands_in_every_position_evenly() {
        const LEN: usize = 4;
        const TRIALS: usize = 40_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [[0_usize; LEN]; LEN];

        for _ in 0..TRIALS {
            let order = ShuffledOrder::generate(LEN, &mut rng);
            for (position, &index) in order.as_slice().iter().enumerate() {
                counts[position][index] += 1;
            }
        }

        // Expected 10_000 per cell; binomial std dev is ~87.
        let expected = TRIALS / LEN;
        for (position, row) in counts.iter().enumerate() {
            for (index, &count) in row.iter().enumerate() {
                assert!(
                    count.abs_diff(expected) < 600,
                    "index {index} at position {position}: {count}"
                );
            }
        }
    }

    #[test]
    fn all_orderings_of_three_are_reachable_and_balanced() {
        const TRIALS: usize = 60_000;
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashMap::<Vec<usize>, usize>::new();

        for _ in 0..TRIALS {
            let order = ShuffledOrder::generate(3, &mut rng);
            *seen.entry(order.as_slice().to_vec()).or_default() += 1;
        }

        assert_eq!(seen.len(), 6);
        let expected = TRIALS / 6;
        for (ordering, count) in seen {
            assert!(count.abs_diff(expected) < 800, "{ordering:?}: {count}");
        }
    }
}
