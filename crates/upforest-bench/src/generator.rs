//! Union workload generator.
//!
//! Produces in-range `(a, b)` pairs for a universe of a given size. A
//! locality bias pairs most elements with near neighbours, which grows many
//! small partitions early and a few large ones late, the shape that stresses
//! union-by-size.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use upforest_core::{UnionFind, UnionFindError};

/// Neighbourhood radius used for local pairs.
const LOCAL_WINDOW: usize = 16;

/// Configuration for the union workload generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of elements in the universe.
    pub universe: usize,
    /// Number of union pairs to emit.
    pub unions: usize,
    /// Fraction of pairs drawn from a small neighbourhood (0.0-1.0).
    pub locality: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1k elements, 800 unions
    Small,
    /// 10k elements, 8k unions
    Medium,
    /// 100k elements, 80k unions
    Large,
    /// 1M elements, 1.2M unions
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                universe: 1_000,
                unions: 800,
                locality: 0.8,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                universe: 10_000,
                unions: 8_000,
                locality: 0.7,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                universe: 100_000,
                unions: 80_000,
                locality: 0.6,
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                universe: 1_000_000,
                unions: 1_200_000,
                locality: 0.5,
            },
        }
    }
}

/// Generates union pairs from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Every index
/// is below `config.universe`; an empty universe yields no pairs.
pub fn generate_unions(config: &GeneratorConfig) -> Vec<(usize, usize)> {
    if config.universe == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(config.seed);
    let locality = if config.locality.is_nan() {
        0.0
    } else {
        config.locality.clamp(0.0, 1.0)
    };
    let n = config.universe;

    (0..config.unions)
        .map(|_| {
            let a = rng.gen_range(0..n);
            let b = if rng.gen_bool(locality) {
                let lo = a.saturating_sub(LOCAL_WINDOW);
                let hi = (a + LOCAL_WINDOW).min(n - 1);
                rng.gen_range(lo..=hi)
            } else {
                rng.gen_range(0..n)
            };
            (a, b)
        })
        .collect()
}

/// The union sequence producing the deepest trees union-by-size allows.
///
/// Partitions of equal size are merged pairwise, doubling the width each
/// round, so with `n` a power of two element 0 ends at depth `log2(n)`.
pub fn chain_unions(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start + width < n {
            pairs.push((start, start + width));
            start += width * 2;
        }
        width *= 2;
    }
    pairs
}

/// Builds a forest of `n` elements and applies `pairs` in order.
///
/// Returns the forest and the number of unions that merged two partitions.
/// Pairs that are already joined are skipped.
///
/// # Errors
///
/// Returns the first allocation or out-of-range error encountered.
pub fn build_forest(
    n: usize,
    pairs: &[(usize, usize)],
) -> Result<(UnionFind, usize), UnionFindError> {
    let mut uf = UnionFind::new(n)?;
    let mut successes = 0;
    for &(a, b) in pairs {
        match uf.union(a, b) {
            Ok(_) => successes += 1,
            Err(UnionFindError::AlreadySamePartition { .. }) => {}
            Err(err @ (UnionFindError::InvalidIndex { .. } | UnionFindError::Allocation { .. })) => {
                return Err(err);
            }
        }
    }
    Ok((uf, successes))
}
