pub mod bubble_sort;
pub mod bucket_sort;
pub mod counting_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;
pub mod shell_sort;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};

/// True when `arr` is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// Every sort that can run over a slice of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
    Counting,
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 9] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Shell,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
        }
    }

    /// Whether equal elements keep their relative input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Insertion
                | SortAlgorithm::Merge
                | SortAlgorithm::Counting
                | SortAlgorithm::Radix
        )
    }

    pub fn sort(self, arr: &mut [i64]) -> Result<()> {
        tracing::trace!(algorithm = self.name(), len = arr.len(), "sorting");
        match self {
            SortAlgorithm::Bubble => bubble_sort::bubble_sort(arr),
            SortAlgorithm::Selection => selection_sort::selection_sort(arr),
            SortAlgorithm::Insertion => insertion_sort::insertion_sort(arr),
            SortAlgorithm::Merge => merge_sort::merge_sort(arr),
            SortAlgorithm::Quick => quick_sort::quick_sort(arr),
            SortAlgorithm::Heap => heap_sort::heap_sort(arr),
            SortAlgorithm::Shell => shell_sort::shell_sort(arr),
            SortAlgorithm::Counting => counting_sort::counting_sort(arr)?,
            SortAlgorithm::Radix => radix_sort_signed(arr),
        }
        Ok(())
    }
}

// Flipping the sign bit maps i64 order onto u64 order.
fn radix_sort_signed(arr: &mut [i64]) {
    const SIGN: u64 = 1 << 63;
    let mut keys: Vec<u64> = arr.iter().map(|&v| (v as u64) ^ SIGN).collect();
    radix_sort::radix_sort(&mut keys);
    for (slot, key) in arr.iter_mut().zip(keys) {
        *slot = (key ^ SIGN) as i64;
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("-sort").unwrap_or(&wanted);
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| AlgoError::InvalidArgument(format!("unknown sort algorithm `{s}`")))
    }
}
