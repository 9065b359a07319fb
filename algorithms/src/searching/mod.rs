pub mod binary_search;
pub mod bst_search;
pub mod exponential_search;
pub mod fibonacci_search;
pub mod hash_lookup;
pub mod interpolation_search;
pub mod jump_search;
pub mod linear_search;
pub mod ternary_search;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

/// Every search that can run over a slice of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    BinaryRecursive,
    Jump,
    Interpolation,
    Exponential,
    Fibonacci,
    Ternary,
    Hash,
    Bst,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 10] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::BinaryRecursive,
        SearchAlgorithm::Jump,
        SearchAlgorithm::Interpolation,
        SearchAlgorithm::Exponential,
        SearchAlgorithm::Fibonacci,
        SearchAlgorithm::Ternary,
        SearchAlgorithm::Hash,
        SearchAlgorithm::Bst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::BinaryRecursive => "binary-recursive",
            SearchAlgorithm::Jump => "jump",
            SearchAlgorithm::Interpolation => "interpolation",
            SearchAlgorithm::Exponential => "exponential",
            SearchAlgorithm::Fibonacci => "fibonacci",
            SearchAlgorithm::Ternary => "ternary",
            SearchAlgorithm::Hash => "hash",
            SearchAlgorithm::Bst => "bst",
        }
    }

    /// Linear, hash and BST search accept any order; the rest need sorted input.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear | SearchAlgorithm::Hash | SearchAlgorithm::Bst)
    }

    /// Index of `target` in `arr`. Linear, hash and BST searches report the
    /// first occurrence; the others report any match.
    pub fn search(self, arr: &[i64], target: i64) -> Option<usize> {
        match self {
            SearchAlgorithm::Linear => linear_search::linear_search(arr, &target),
            SearchAlgorithm::Binary => binary_search::binary_search(arr, &target),
            SearchAlgorithm::BinaryRecursive => binary_search::binary_search_recursive(arr, &target),
            SearchAlgorithm::Jump => jump_search::jump_search(arr, &target),
            SearchAlgorithm::Interpolation => interpolation_search::interpolation_search(arr, target),
            SearchAlgorithm::Exponential => exponential_search::exponential_search(arr, &target),
            SearchAlgorithm::Fibonacci => fibonacci_search::fibonacci_search(arr, &target),
            SearchAlgorithm::Ternary => ternary_search::ternary_search(arr, &target),
            SearchAlgorithm::Hash => hash_lookup::hash_index_search(arr, &target),
            SearchAlgorithm::Bst => bst_search::bst_search(arr, &target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("-search").unwrap_or(&wanted);
        SearchAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| AlgoError::InvalidArgument(format!("unknown search algorithm `{s}`")))
    }
}
