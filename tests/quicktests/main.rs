#[path = "../../src/test/quick.rs"]
mod quick;

mod tree;

pub(crate) use quick::Op;

use search_tree::BinarySearchTree;

/// Routes the crate's `tracing` events to the test output. Filter with `RUST_LOG`, e.g.
/// `RUST_LOG=search_tree=trace`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Distinct values in an order picked by `swaps`, so trees built from them aren't just a
/// chain of right children.
pub(crate) fn scramble(xs: std::collections::BTreeSet<i8>, swaps: &[i8]) -> Vec<i8> {
    let mut values: Vec<i8> = xs.into_iter().collect();
    let n = values.len();
    if n > 0 {
        for (i, k) in swaps.iter().enumerate() {
            let j = (*k as u8 as usize) % n;
            values.swap(i % n, j);
        }
    }
    values
}

/// Builds a tree by inserting `xs` in order.
pub(crate) fn build(xs: &[i8]) -> BinarySearchTree<i8> {
    xs.iter().copied().collect()
}

#[test]
fn scramble_keeps_every_value() {
    let xs: std::collections::BTreeSet<i8> = [1, 2, 3, 4, 5].into_iter().collect();
    let mut values = scramble(xs, &[-1, 7, 0, 3, 100, -128, 2]);
    assert_eq!(values.len(), 5);

    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
    assert!(scramble(Default::default(), &[1, 2]).is_empty());
}
