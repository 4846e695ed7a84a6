//! A linked Binary Search Tree (BST) plus a small harness comparing linear search against tree
//! search before and after rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and remove
//! stored items. Each `Node` stores one item and owns up to two child `Node`s. The invariants
//! this crate maintains are:
//!
//! 1. For every `Node`, all the items in its left subtree compare strictly less than its own
//!    item.
//! 2. For every `Node`, all the items in its right subtree compare greater than or equal to its
//!    own item. Equal items always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a leaf.
//! [`linked::Tree`] never balances itself while inserting, so inserting sorted input produces a
//! chain. Balancing is an explicit operation: [`linked::Tree::rebalance`] rebuilds the tree with
//! a height close to `lg N`.
//!
//! The [`demo`] module loads a word list and times lookups against a plain `Vec`, a tree built in
//! file order, a tree built in random order, and that same tree after rebalancing.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod demo;
pub mod error;
pub mod linked;
