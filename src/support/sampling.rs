//! Uniform sampling of the unit hypercube.
//!
//! The sampler owns its random number generator, so reproducibility comes
//! from the seed passed at construction rather than from any global state.
//!
//! ```
//! use twine_test_functions::support::sampling::UnitCubeSampler;
//!
//! let mut a = UnitCubeSampler::seeded(97752);
//! let mut b = UnitCubeSampler::seeded(97752);
//! assert_eq!(a.sample::<8>(10), b.sample::<8>(10));
//! ```

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use super::{
    constraint::{Constrained, UnitInterval},
    matrix::ParameterMatrix,
};

/// Sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Number of samples to draw.
    pub n_samples: usize,

    /// Seed for the random number generator.
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            n_samples: 500,
            seed: 97752,
        }
    }
}

impl SamplingConfig {
    /// Creates a seeded sampler for this configuration.
    #[must_use]
    pub fn sampler(&self) -> UnitCubeSampler<StdRng> {
        UnitCubeSampler::seeded(self.seed)
    }
}

/// Draws normalized samples uniformly from `[0, 1)`.
#[derive(Debug, Clone)]
pub struct UnitCubeSampler<R = StdRng> {
    rng: R,
}

impl UnitCubeSampler<StdRng> {
    /// Creates a sampler backed by [`StdRng`] seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UnitCubeSampler<R> {
    /// Creates a sampler drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws `n_samples` rows of `K` independent uniform values.
    pub fn sample<const K: usize>(&mut self, n_samples: usize) -> ParameterMatrix<K> {
        self.sample_pinned(n_samples, [None; K])
    }

    /// Draws `n_samples` rows, holding pinned columns at a fixed value.
    ///
    /// Columns with `None` are drawn uniformly; columns with `Some(v)` are
    /// set to `v` in every row.
    /// Only unpinned columns consume random numbers.
    pub fn sample_pinned<const K: usize>(
        &mut self,
        n_samples: usize,
        pinned: [Option<Constrained<f64, UnitInterval>>; K],
    ) -> ParameterMatrix<K> {
        let rows = (0..n_samples)
            .map(|_| {
                std::array::from_fn(|j| match pinned[j] {
                    Some(value) => value.into_inner(),
                    None => self.rng.gen_range(0.0..1.0),
                })
            })
            .collect();

        debug!(
            n_samples,
            n_columns = K,
            n_pinned = pinned.iter().filter(|p| p.is_some()).count(),
            "drew unit-cube samples"
        );

        // Every entry is in [0, 1].
        ParameterMatrix::from_rows_unchecked(rows)
    }
}
