use linked_bst::error::TreeError;
use linked_bst::linked::Tree;
use quickcheck::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec` holding the same items.
/// `Replace` swaps an item for itself, which keeps the ordering intact.
fn do_ops(ops: &[Op], tree: &mut Tree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                let at = model.partition_point(|y| *y <= x);
                model.insert(at, x);
            }
            Op::Remove(x) => {
                let expected = match model.binary_search(&x) {
                    Ok(at) => Ok(model.remove(at)),
                    Err(_) => Err(TreeError::NotFound),
                };
                assert_eq!(tree.remove(&x), expected);
            }
            Op::Replace(x) => {
                let expected = model.binary_search(&x).ok().map(|_| x);
                assert_eq!(tree.replace(&x, x), expected);
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

quickcheck! {
    fn inorder_matches_model(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        tree.len() == model.len()
            && tree.is_ordered()
            && tree.inorder().eq(model.iter())
            && tree.inorder().zip(tree.inorder().skip(1)).all(|(a, b)| a <= b)
    }

    fn traversals_visit_every_item(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut expected = xs.clone();
        expected.sort_unstable();

        let sorted = |mut items: Vec<i8>| {
            items.sort_unstable();
            items
        };
        sorted(tree.iter().copied().collect()) == expected
            && sorted(tree.postorder().copied().collect()) == expected
            && sorted(tree.levelorder().copied().collect()) == expected
    }

    fn inorder_is_idempotent(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.inorder().eq(tree.inorder())
    }

    fn find_on_empty_tree(x: i8) -> bool {
        let tree: Tree<i8> = Tree::new();

        tree.find(&x).is_none() && !tree.contains(&x)
    }

    fn contains_inserted_not_others(xs: Vec<i8>, others: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x) == Some(x))
            && others
                .iter()
                .filter(|x| !xs.contains(x))
                .all(|x| !tree.contains(x))
    }

    fn rebalance_round_trip(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        let before: Vec<i8> = tree.inorder().copied().collect();

        tree.rebalance();
        let after: Vec<i8> = tree.inorder().copied().collect();
        before == after && tree.len() == after.len()
    }

    fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut inside: Vec<&i8> = xs.iter().filter(|x| low <= **x && **x <= high).collect();
        inside.sort();

        let outside = xs.is_empty()
            || low > high
            || xs.iter().all(|x| *x < low)
            || xs.iter().all(|x| *x > high);
        match tree.range_find(&low, &high) {
            None => outside,
            Some(found) => !outside && found == inside,
        }
    }

    fn clone_is_equal_and_independent(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut cloned = tree.clone();
        let same_shape = cloned.iter().eq(tree.iter()) && cloned.height() == tree.height();

        cloned.clear();
        same_shape && tree.len() == xs.len()
    }
}

#[test]
fn scenario_from_five_items() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();

    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    assert_eq!(tree.height(), Some(2));
    assert_eq!(tree.successor(&4), Some(&5));
    assert_eq!(tree.predecessor(&4), Some(&3));
    assert_eq!(tree.successor(&8), None);
    assert_eq!(tree.predecessor(&1), None);
    assert_eq!(tree.range_find(&2, &6), Some(vec![&3, &4, &5]));

    assert_eq!(tree.remove(&5), Ok(5));
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 8]);
    assert_eq!(tree.len(), 4);
}

#[test]
fn scenario_rebalance_fifteen() {
    let mut tree: Tree<_> = (1..=15).collect();

    tree.rebalance();

    assert!(tree.height() <= Some(4));
    assert!(tree.is_balanced());
}

#[test]
fn strings_work_too() {
    let mut tree: Tree<String> = ["pear", "apple", "fig", "kiwi"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert!(tree.contains(&"fig".to_string()));
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.remove(&"pear".to_string()), Ok("pear".to_string()));
    assert_eq!(tree.last().map(String::as_str), Some("kiwi"));
}
