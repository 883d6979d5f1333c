use std::collections::HashMap;

/// Build a HashMap from literal pairs
#[allow(dead_code)]
pub fn hash_map<K, V>(pairs: &[(K, V)]) -> HashMap<K, V>
where
    K: Clone + Eq + std::hash::Hash,
    V: Clone,
{
    pairs.iter().cloned().collect()
}

/// The four-entry string map most ordering scenarios start from
#[allow(dead_code)]
pub fn letters_to_digits() -> HashMap<&'static str, &'static str> {
    hash_map(&[("a", "1"), ("aa", "2"), ("abc", "3"), ("aaa", "4")])
}

/// Keys whose values tie in pairs under text length
#[allow(dead_code)]
pub fn length_ties() -> HashMap<&'static str, &'static str> {
    hash_map(&[("a", "1"), ("ab", "22"), ("abcd", "22"), ("abc", "333")])
}
