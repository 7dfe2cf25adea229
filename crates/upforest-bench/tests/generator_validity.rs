//! Tests that generated workloads stay in range across tiers and seeds.
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use upforest_bench::{GeneratorConfig, SizeTier, generate_unions};

fn assert_in_range(config: &GeneratorConfig, label: &str) {
    let pairs = generate_unions(config);
    assert_eq!(pairs.len(), config.unions, "{label}: pair count");
    for (a, b) in pairs {
        assert!(
            a < config.universe && b < config.universe,
            "{label}: pair ({a}, {b}) outside universe {}",
            config.universe
        );
    }
}

#[test]
fn generated_small_in_range() {
    for seed in [42, 123, 999, 7777, 54321] {
        assert_in_range(&SizeTier::Small.config(seed), &format!("Small/seed={seed}"));
    }
}

#[test]
fn generated_medium_in_range() {
    for seed in [42, 123, 999] {
        assert_in_range(&SizeTier::Medium.config(seed), &format!("Medium/seed={seed}"));
    }
}

#[test]
fn generated_large_in_range() {
    assert_in_range(&SizeTier::Large.config(42), "Large/seed=42");
}

#[test]
fn full_locality_stays_in_window() {
    let config = GeneratorConfig {
        seed: 3,
        universe: 500,
        unions: 1000,
        locality: 1.0,
    };
    for (a, b) in generate_unions(&config) {
        assert!(a.abs_diff(b) <= 16, "({a}, {b}) is not local");
    }
}

proptest! {
    #[test]
    fn any_config_stays_in_range(
        seed in any::<u64>(),
        universe in 1usize..200,
        unions in 0usize..300,
        locality in 0.0f64..=1.0,
    ) {
        let config = GeneratorConfig { seed, universe, unions, locality };
        let pairs = generate_unions(&config);
        prop_assert_eq!(pairs.len(), unions);
        for (a, b) in pairs {
            prop_assert!(a < universe && b < universe);
        }
    }
}
