use std::collections::BTreeSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use search_tree::lca::{find, find_lca};
use search_tree::metrics::{balance_factor, depth};
use search_tree::rotate::{rotate_left, rotate_right};
use search_tree::traverse::inorder;
use search_tree::Node;

use crate::{build, scramble};

/// Checks every value sits in `[lower, upper)` and that this holds
/// recursively, with the node's own value as the new bound.
fn respects_order<T>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool
where
    T: Ord,
{
    match node {
        None => true,
        Some(n) => {
            let v = n.value();
            lower.is_none_or(|l| l <= v)
                && upper.is_none_or(|u| v < u)
                && respects_order(n.left(), lower, Some(v))
                && respects_order(n.right(), Some(v), upper)
        }
    }
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.inorder().into_iter().eq(sorted.iter())
}

#[quickcheck]
fn insertion_keeps_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    respects_order(tree.root(), None, None)
}

#[quickcheck]
fn contains_everything_inserted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn depth_is_zero_only_when_empty(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    (tree.depth() == 0) == xs.is_empty() && (xs.len() != 1 || tree.depth() == 1)
}

#[quickcheck]
fn balance_factor_matches_child_depths(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    match tree.root() {
        None => balance_factor(tree.root()).is_none(),
        Some(root) => {
            balance_factor(Some(root))
                == Some(depth(root.right()) as isize - depth(root.left()) as isize)
        }
    }
}

#[quickcheck]
fn preorders_agree(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before = tree.preorder() == tree.preorder_iterative();
    tree.balance();

    before && tree.preorder() == tree.preorder_iterative()
}

#[quickcheck]
fn rotations_are_inverses(xs: Vec<i8>) -> TestResult {
    let original = build(&xs);
    let mut tree = original.clone();
    let root = match tree.take_root() {
        Some(root) if root.right().is_some() => root,
        _ => return TestResult::discard(),
    };

    let restored = rotate_right(root).and_then(rotate_left);
    match restored {
        Ok(root) => {
            tree.set_root(Some(root));
            TestResult::from_bool(tree == original)
        }
        Err(_) => TestResult::failed(),
    }
}

#[quickcheck]
fn rotate_right_moves_old_root_into_left_subtree(xs: BTreeSet<i8>, swaps: Vec<i8>) -> TestResult {
    let mut tree = build(&scramble(xs, &swaps));
    let root = match tree.take_root() {
        Some(root) if root.right().is_some() => root,
        _ => return TestResult::discard(),
    };

    // Old left subtree, then the old root, then the lifted child's old left subtree.
    let mut expected: Vec<i8> = inorder(root.left()).into_iter().copied().collect();
    expected.push(*root.value());
    let lifted_left = root.right().and_then(Node::left);
    expected.extend(inorder(lifted_left).into_iter().copied());

    let new_root = match rotate_right(root) {
        Ok(new_root) => new_root,
        Err(_) => return TestResult::failed(),
    };
    let left: Vec<i8> = inorder(new_root.left()).into_iter().copied().collect();

    TestResult::from_bool(left == expected && respects_order(Some(&*new_root), None, None))
}

#[quickcheck]
fn rotate_left_keeps_order(xs: BTreeSet<i8>, swaps: Vec<i8>) -> TestResult {
    let mut tree = build(&scramble(xs, &swaps));
    let before: Vec<i8> = tree.iter().copied().collect();
    let root = match tree.take_root() {
        Some(root) if root.left().is_some() => root,
        _ => return TestResult::discard(),
    };

    match rotate_left(root) {
        Ok(root) => {
            tree.set_root(Some(root));
            TestResult::from_bool(
                respects_order(tree.root(), None, None) && tree.iter().copied().eq(before),
            )
        }
        Err(_) => TestResult::failed(),
    }
}

#[quickcheck]
fn balance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before: Vec<i8> = tree.iter().copied().collect();
    tree.balance();

    tree.iter().copied().eq(before)
}

#[quickcheck]
fn balance_keeps_order_for_distinct_values(xs: BTreeSet<i8>, swaps: Vec<i8>) -> bool {
    let values = scramble(xs, &swaps);
    let mut tree = build(&values);
    tree.balance();

    respects_order(tree.root(), None, None) && values.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn lca_is_a_common_ancestor(
    xs: BTreeSet<i8>,
    swaps: Vec<i8>,
    picks: (usize, usize),
) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let values = scramble(xs, &swaps);
    let a = values[picks.0 % values.len()];
    let b = values[picks.1 % values.len()];
    let tree = build(&values);

    let lca = match find_lca(tree.root(), &a, &b) {
        Some(lca) => lca,
        None => return TestResult::failed(),
    };
    let v = *lca.value();

    TestResult::from_bool(
        a.min(b) <= v
            && v <= a.max(b)
            && find(Some(lca), &a).is_some()
            && find(Some(lca), &b).is_some(),
    )
}

#[test]
fn sample_lca() {
    let tree = build(&[10, 2, 45, 12, 6, 4, 5, 1, 3, 25, 55]);

    assert_eq!(find_lca(tree.root(), &4, &6).map(Node::value), Some(&6));
    assert_eq!(find_lca(tree.root(), &1, &55).map(Node::value), Some(&10));
}

#[test]
fn empty_tree_answers_nothing() {
    let tree = build(&[]);

    assert_eq!(balance_factor(tree.root()), None);
    assert!(find_lca(tree.root(), &1, &2).is_none());
    assert!(tree.inorder().is_empty());
    assert!(tree.preorder().is_empty());
    assert!(tree.postorder().is_empty());
    assert!(tree.preorder_iterative().is_empty());
}
