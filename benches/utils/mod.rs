#![allow(dead_code)]
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

// Trait for generating distinct keys
pub trait TestData: Clone + Debug + Ord + Eq + Hash {
    fn generate(size: usize) -> Vec<Self>;
}

impl TestData for i64 {
    fn generate(size: usize) -> Vec<Self> {
        let mut gen = SmallRng::seed_from_u64(1);
        let mut set = BTreeSet::new();
        while set.len() < size {
            set.insert(gen.random::<i64>());
        }
        set.into_iter().collect()
    }
}

impl TestData for String {
    fn generate(size: usize) -> Vec<Self> {
        let mut gen = SmallRng::seed_from_u64(1);
        let mut set = BTreeSet::new();
        while set.len() < size {
            let len = gen.random_range(5..20);
            let s: String = (0..len)
                .map(|_| gen.random_range(b'a'..=b'z') as char)
                .collect();
            set.insert(s);
        }
        set.into_iter().collect()
    }
}

pub fn reorder<A: Clone>(vec: &[A]) -> Vec<A> {
    let mut gen = SmallRng::seed_from_u64(1);
    let mut out = vec.to_vec();
    out.shuffle(&mut gen);
    out
}

/// Split `keys` into `count` overlays that each overlap their neighbour by
/// about half, so merges exercise both inserts and overwrites.
pub fn layers<K: Clone>(keys: &[K], count: usize) -> Vec<Vec<K>> {
    let step = (keys.len() / count.max(1)).max(1);
    (0..count)
        .map(|i| {
            let start = (i * step).saturating_sub(step / 2);
            let end = ((i + 1) * step).min(keys.len());
            keys[start.min(end)..end].to_vec()
        })
        .collect()
}
