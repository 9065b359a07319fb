use std::collections::HashMap;
use std::hash::Hash;

pub fn hash_lookup<'a, K: Hash + Eq, V>(map: &'a HashMap<K, V>, key: &K) -> Option<&'a V> {
    map.get(key)
}

/// Value -> index of its first occurrence.
pub fn build_index<T: Hash + Eq + Clone>(arr: &[T]) -> HashMap<T, usize> {
    let mut index = HashMap::with_capacity(arr.len());
    for (i, v) in arr.iter().enumerate() {
        index.entry(v.clone()).or_insert(i);
    }
    index
}

/// Builds the value index in O(N) and answers with one lookup.
pub fn hash_index_search<T: Hash + Eq + Clone>(arr: &[T], target: &T) -> Option<usize> {
    hash_lookup(&build_index(arr), target).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let v = ["b", "a", "b", "c"];
        assert_eq!(hash_index_search(&v, &"b"), Some(0));
        assert_eq!(hash_index_search(&v, &"c"), Some(3));
        assert_eq!(hash_index_search(&v, &"z"), None);
    }

    #[test]
    fn lookup_borrows_from_map() {
        let mut m = HashMap::new();
        m.insert(1u8, String::from("one"));
        assert_eq!(hash_lookup(&m, &1).map(String::as_str), Some("one"));
        assert!(hash_lookup(&m, &2).is_none());
    }
}
