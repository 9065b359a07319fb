//! # Algorithms Crate
//!
//! Textbook algorithm library organized by category. Every routine is
//! independent: callers own the data, nothing is shared between modules.
//!
//! ## Modules
//!
//! - `sorting` – Comparison and distribution sorts (bubble … bucket)
//! - `searching` – Lookup over sequences (linear, binary, jump, interpolation, …)
//! - `graph` – Representations, traversal, shortest paths, MST, components
//! - `dynamic_programming` – Classic recurrences (LCS, LIS, knapsack, edit distance, …)
//! - `data_structures` – Linked lists, BST, stack, queue, heap, disjoint set
//! - `modeling` – Validated shapes and employee records
//! - `invariant` – Reusable checks for results (sortedness, non-negativity)
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::sorting::merge_sort::merge_sort;
//!
//! let mut v = vec![3, 1, 2];
//! merge_sort(&mut v);
//! assert_eq!(v, vec![1, 2, 3]);
//! ```

pub mod data_structures;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod invariant;
pub mod modeling;
pub mod searching;
pub mod sorting;

pub use error::{AlgoError, Result};
