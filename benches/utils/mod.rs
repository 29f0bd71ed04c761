pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use prio_heap::Prioritized;

//// Utility functions

pub(crate) fn get_random_priorities(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(rng.gen_range(-1_000_000, 1_000_000));
    }
    results
}

pub(crate) fn get_random_tasks(n: usize, seed: u64) -> Vec<Prioritized<i64, usize>> {
    get_random_priorities(n, seed)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Prioritized::new(p, i))
        .collect()
}
