pub mod climbing_stairs;
pub mod coin_change;
pub mod edit_distance;
pub mod fibonacci;
pub mod knapsack;
pub mod lcs;
pub mod lis;
pub mod matrix_chain;
pub mod max_subarray;
pub mod palindrome;
