use expandable_min_heap::{ClassicMinHeap, HeapNode, SortedListMinHeap, UnsortedListMinHeap};
use rand::prelude::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Distance between neighbouring keys produced by `gen_distinct_keys`,
/// far above the comparison epsilon.
#[allow(dead_code)]
pub(crate) const KEY_STEP: f64 = 0.001;

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn gen_random_keys(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new(-1_000.0f64, 1_000.0f64);
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        res.push(rng.sample(dist))
    }
    res
}

/// Shuffled keys with pairwise difference of at least `KEY_STEP`.
#[allow(dead_code)]
pub(crate) fn gen_distinct_keys(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res: Vec<f64> = (0..n).map(|i| i as f64 * KEY_STEP - 50.0).collect();
    res.shuffle(&mut rng);
    res
}

#[allow(dead_code)]
pub(crate) fn choose_some<T>(vals: &[T], num: usize, seed: u64) -> Vec<T>
where
    T: Clone,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    vals.choose_multiple(&mut rng, num).cloned().collect()
}

/// Read access to storage of every strategy, for invariant checks.
#[allow(dead_code)]
pub(crate) trait Inspect<T> {
    fn nodes(&self) -> Vec<&HeapNode<T>>;

    /// Ordering invariant of the strategy.
    fn ordering_holds(&self) -> bool;

    fn indexes_match(&self) -> bool {
        self.nodes()
            .iter()
            .enumerate()
            .all(|(i, node)| node.index() == i)
    }
}

impl<T> Inspect<T> for ClassicMinHeap<T> {
    fn nodes(&self) -> Vec<&HeapNode<T>> {
        self.iter().collect()
    }

    fn ordering_holds(&self) -> bool {
        let nodes = self.nodes();
        nodes
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, node)| !node.cmp_key(nodes[(i - 1) / 2]).is_lt())
    }
}

impl<T> Inspect<T> for SortedListMinHeap<T> {
    fn nodes(&self) -> Vec<&HeapNode<T>> {
        self.iter().collect()
    }

    fn ordering_holds(&self) -> bool {
        self.nodes()
            .windows(2)
            .all(|w| !w[0].cmp_key(w[1]).is_lt())
    }
}

impl<T> Inspect<T> for UnsortedListMinHeap<T> {
    fn nodes(&self) -> Vec<&HeapNode<T>> {
        self.iter().collect()
    }

    fn ordering_holds(&self) -> bool {
        true
    }
}
