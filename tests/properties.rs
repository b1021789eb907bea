//! Property tests for both samplers.
//!
//! - Size: len == min(k, n)
//! - Membership: every sampled item comes from the input
//! - Degenerate path: k >= n returns the input unchanged
//! - Determinism: same seed, same sample

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

use reservoirs::{ChaoReservoir, SampleError, UniformReservoir, WeightedItem};

fn arb_weighted(max_len: usize) -> impl Strategy<Value = Vec<WeightedItem<usize>>> {
    prop::collection::vec(0u32..100, 0..max_len).prop_map(|ws| {
        ws.into_iter()
            .enumerate()
            .map(|(i, w)| WeightedItem::new(i, w as f64 / 10.0))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_uniform_size_and_membership(
        n in 0usize..500,
        k in 0usize..100,
        seed in any::<u64>(),
    ) {
        let items: Vec<usize> = (0..n).collect();
        let sample = UniformReservoir::new(k).sample(&items, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(sample.len(), k.min(n));

        let mut seen = HashSet::new();
        for item in sample {
            prop_assert!(item < n);
            prop_assert!(seen.insert(item), "item {} sampled twice", item);
        }
    }

    #[test]
    fn prop_uniform_deterministic(
        items in prop::collection::vec(any::<i32>(), 0..200),
        k in 0usize..50,
        seed in any::<u64>(),
    ) {
        let sampler = UniformReservoir::new(k);
        let a = sampler.sample(&items, &mut StdRng::seed_from_u64(seed));
        let b = sampler.sample(&items, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_uniform_degenerate_returns_input(
        items in prop::collection::vec(any::<i32>(), 0..50),
        extra in 0usize..5,
        seed in any::<u64>(),
    ) {
        let k = items.len() + extra;
        let sample = UniformReservoir::new(k).sample(&items, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(sample, items);
    }

    #[test]
    fn prop_chao_size_and_membership(
        items in arb_weighted(300),
        k in 0usize..60,
        seed in any::<u64>(),
    ) {
        let sample = ChaoReservoir::new(k)
            .sample(&items, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(sample.len(), k.min(items.len()));
        for rec in &sample {
            prop_assert_eq!(&items[rec.value], rec);
        }
    }

    #[test]
    fn prop_chao_deterministic(
        items in arb_weighted(200),
        k in 0usize..40,
        seed in any::<u64>(),
    ) {
        let sampler = ChaoReservoir::new(k);
        let a = sampler.sample(&items, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = sampler.sample(&items, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_chao_degenerate_returns_input(
        items in arb_weighted(50),
        extra in 0usize..5,
        seed in any::<u64>(),
    ) {
        let k = items.len() + extra;
        let sample = ChaoReservoir::new(k)
            .sample(&items, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(sample, items);
    }

    #[test]
    fn prop_chao_rejects_any_negative_weight(
        mut items in arb_weighted(50).prop_filter("non-empty", |v| !v.is_empty()),
        pick in any::<prop::sample::Index>(),
        k in 0usize..10,
    ) {
        let index = pick.index(items.len());
        items[index].weight = -1.0;
        let res = ChaoReservoir::new(k).sample(&items, &mut StdRng::seed_from_u64(0));
        prop_assert_eq!(res, Err(SampleError::NegativeWeight { index, value: -1.0 }));
    }
}
