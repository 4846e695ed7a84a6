use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linked_bst::linked::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing balances on insert, so this
/// is a chain leaning right.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds the same items as [`get_unbalanced_tree`] and then rebalances them into `num_levels`
/// full levels.
fn get_rebalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = get_unbalanced_tree(num_levels);
    tree.rebalance();
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("rebalanced", get_rebalanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, &i| {
                b.iter(|| f(&tree, black_box(i)))
            });
        }
    }

    group.finish();
}

/// Times `rebalance` itself, starting from a fresh chain every iteration.
fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");

    for num_levels in [3, 7, 11] {
        let tree = get_unbalanced_tree(num_levels);
        let id = BenchmarkId::from_parameter(num_nodes_in_full_tree(num_levels));

        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    tree.rebalance();
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

/// Tests BSTs. All lookups are run against chains and rebalanced trees of various sizes,
/// for items that are present and items that are not.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _item = black_box(tree.find(&i));
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _item = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "successor", |tree, i| {
        let _item = black_box(tree.successor(&(i - 1)));
    });
    bench_helper(c, "range-find", |tree, i| {
        let _items = black_box(tree.range_find(&(i / 4), &(i / 2)));
    });
    bench_rebalance(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
