//! This crate exposes a plain Binary Search Tree (BST) and a suite of
//! instrumented comparison sorts, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! [`Tree`] keeps a set of unique, ordered values in nodes that each own up to two children.
//! Anything smaller than a node sits somewhere under its left child and anything larger under
//! its right child, so a lookup only ever follows one path from the root. How long that path
//! gets depends entirely on the order values arrive in: nothing here rotates or rebalances, and
//! feeding the tree already-sorted input leaves a single spine as deep as the tree is large.
//! [`Tree::height`] and [`Tree::is_balanced`] report how far a tree has drifted from the bushy
//! shape.
//!
//! Removing a value with two children moves its in-order successor into its place. Reading the
//! values back in order (via [`Tree::iter`] or [`Tree::inorder`]) yields them sorted.
//!
//! ## Sorting
//!
//! [`sort`] holds six classic sorts (bubble, selection, insertion, merge,
//! quick and heap). Each one sorts a slice in place and reports how many
//! comparisons and swaps it made in a [`SortingStats`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod generate;
pub mod sort;
pub mod stats;
pub mod tree;

pub use error::{Error, Result};
pub use generate::{ArrayGenerator, GeneratorConfig};
pub use sort::Algorithm;
pub use stats::SortingStats;
pub use tree::Tree;
