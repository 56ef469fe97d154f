use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::santa_assert_simple;

/// Abstraction for randomness, in order to swap out different source of randomness.
///
/// This is especially useful when testing, to control which orders are generated when random
/// values are required.
///
/// # Testing
/// We have also created an implementation of this trait which takes as input a list of `usize`s
/// and returns them in that order. This allows the user to define deterministic test-cases while
/// the implementation makes use of an implementation of the [`Random`] trait.
pub trait Random: Debug {
    /// Generates a random usize in the provided range with equal probability; this can be seen as
    /// sampling from a uniform distribution in the range `[range.start, range.end)`
    ///
    /// # Example
    /// This example will show how to use a concrete implementation of [`SeedableRng`] to implement
    /// selecting a random element from a list.
    /// ```rust
    /// # use rand::SeedableRng;
    /// # use rand_chacha::ChaCha8Rng;
    /// # use santa_core::Random;
    /// // First we create our random object
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// // Then we create the elements to select from
    /// let elements = vec!["This", "is", "a", "test"];
    /// // Finally we generate a random number in the range [0, |elements|)
    /// let selected_index = rng.generate_usize_in_range(0..elements.len());
    /// assert!(selected_index < elements.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

// We provide a blanket implementation of the trait for any type which implements `SeedableRng`,
// `Rng` and `Debug` to ensure that we can use any "regular" random generator where we expect an
// implementation of Random.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        // Sampling a `usize` consumes a different amount of randomness depending on the pointer
        // width; a `u64` keeps seeded draws identical across targets
        self.gen_range(range.start as u64..range.end as u64) as usize
    }
}

/// Shuffles the provided slice in place (Fisher-Yates), drawing one index per position from
/// `random`, starting from the back of the slice.
///
/// A slice of length `n` consumes exactly `n - 1` values from `random`.
pub(crate) fn shuffle<T, R: Random + ?Sized>(elements: &mut [T], random: &mut R) {
    for index in (1..elements.len()).rev() {
        let other = random.generate_usize_in_range(0..index + 1);
        santa_assert_simple!(other <= index);
        elements.swap(index, other);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::shuffle;
    use super::Random;
    use crate::santa_assert_simple;

    /// A test "random" generator which takes as input a list of elements of [`usize`] and returns
    /// them in order. If more values are attempted to be generated than are provided then this
    /// will result in panicking.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
    }

    impl Random for TestRandom {
        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let selected = self.usizes.remove(0);
            santa_assert_simple!(
                range.contains(&selected),
                "The selected element by `TestRandom` ({selected}) is not in the provided range ({range:?}) and thus should not be returned, please ensure that your test cases are correctly defined"
            );
            selected
        }
    }

    #[test]
    fn shuffle_swaps_from_the_back() {
        let mut elements = vec![0, 1, 2, 3];
        // 3 <-> 0, 2 stays, 1 <-> 0
        let mut random = TestRandom {
            usizes: vec![0, 2, 0],
        };

        shuffle(&mut elements, &mut random);

        assert_eq!(elements, vec![1, 3, 2, 0]);
        assert!(random.usizes.is_empty());
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut random = TestRandom::default();

        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut random);
        let mut single = vec![7];
        shuffle(&mut single, &mut random);

        assert_eq!(single, vec![7]);
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let mut first = (0..20).collect::<Vec<_>>();
        let mut second = first.clone();

        shuffle(&mut first, &mut SmallRng::seed_from_u64(7));
        shuffle(&mut second, &mut SmallRng::seed_from_u64(7));

        assert_eq!(first, second);
    }

    #[test]
    fn usize_draws_follow_fixed_width_draws() {
        let mut random = ChaCha8Rng::seed_from_u64(99);
        let mut reference = ChaCha8Rng::seed_from_u64(99);

        for upper in 1..50 {
            let expected = reference.gen_range(3_u64..3 + upper);
            assert_eq!(
                random.generate_usize_in_range(3..3 + upper as usize),
                expected as usize
            );
        }
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(mut elements in proptest::collection::vec(any::<u16>(), 0..64), seed in any::<u64>()) {
            let mut sorted = elements.clone();
            sorted.sort_unstable();

            shuffle(&mut elements, &mut SmallRng::seed_from_u64(seed));
            elements.sort_unstable();

            prop_assert_eq!(elements, sorted);
        }
    }
}
