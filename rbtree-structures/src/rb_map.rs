//! An ordered key-value map layered over [`RBTree`].
//!
//! Entries are stored in the tree ordered by key alone, so the value stored
//! alongside a key never affects placement or rebalancing.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use crate::rb_tree::{self, RBTree};

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K: Ord, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, V> Eq for Entry<K, V> {}

impl<K: Ord, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Clone)]
pub struct RBMap<K, V> {
    tree: RBTree<Entry<K, V>>,
}

impl<K: Ord, V> RBMap<K, V> {
    pub fn new() -> RBMap<K, V> {
        RBMap { tree: RBTree::new() }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Insert a key-value pair. Returns `false` without touching the map if
    /// `key` is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(Entry { key, value })
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .get_by(|e| key.cmp(e.key.borrow()))
            .map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .get_by_mut(|e| key.cmp(e.key.borrow()))
            .map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove `key`, returning the value that was stored under it.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .remove_by(|e| key.cmp(e.key.borrow()))
            .map(|e| e.value)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|e| (&e.key, &e.value))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|e| (&e.key, &e.value))
    }

    /// Iterate over entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Panic if the backing tree is no longer a valid red-black tree.
    pub fn check_invariants(&self) {
        self.tree.check_invariants();
    }
}

impl<K: Ord, V> Default for RBMap<K, V> {
    fn default() -> Self {
        RBMap::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for RBMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for RBMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RBMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RBMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a RBMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, K, V> {
    inner: rb_tree::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (&e.key, &e.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

#[cfg(test)]
mod tests {
    use super::RBMap;
    use crate::rng::MersenneTwister64;
    use quickcheck::TestResult;
    use std::collections::BTreeMap;
    use std::prelude::v1::*;

    #[test]
    fn insert_get_remove() {
        let mut map = RBMap::new();
        assert!(map.insert(3, "three"));
        assert!(map.insert(1, "one"));
        assert!(map.insert(2, "two"));

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&2), Some(&"two"));
        assert_eq!(map.get(&4), None);
        assert!(map.contains_key(&1));

        assert_eq!(map.remove(&2), Some("two"));
        assert_eq!(map.remove(&2), None);
        assert!(!map.contains_key(&2));
        assert_eq!(map.len(), 2);
        map.check_invariants();
    }

    #[test]
    fn duplicate_key_keeps_first_value() {
        let mut map = RBMap::new();
        assert!(map.insert("k", 1));
        assert!(!map.insert("k", 2));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some(&1));
    }

    #[test]
    fn get_mut_updates_value() {
        let mut map: RBMap<u32, Vec<u32>> = (0..10).map(|k| (k, Vec::new())).collect();

        for k in 0..10 {
            map.get_mut(&k).unwrap().push(k * 2);
        }

        assert!(map.get_mut(&10).is_none());
        for (k, v) in map.iter() {
            assert_eq!(v, &vec![k * 2]);
        }
    }

    #[test]
    fn iterates_in_key_order() {
        let mut rng = MersenneTwister64::new(0x4B616E6174614368);
        let mut keys: Vec<u64> = (0..200).collect();
        rng.shuffle(&mut keys);

        let map: RBMap<u64, String> = keys.iter().map(|k| (*k, format!("v{}", k))).collect();
        map.check_invariants();

        let got: Vec<u64> = map.keys().copied().collect();
        assert_eq!(got, (0..200).collect::<Vec<u64>>());
        assert_eq!(map.first(), Some((&0, &String::from("v0"))));
        assert_eq!(map.last(), Some((&199, &String::from("v199"))));
        assert_eq!(map.values().next_back().map(String::as_str), Some("v199"));
    }

    #[test]
    fn borrowed_string_keys() {
        let mut map = RBMap::new();
        map.insert(String::from("apple"), 1);
        map.insert(String::from("pear"), 2);

        assert_eq!(map.get("pear"), Some(&2));
        assert_eq!(map.remove("apple"), Some(1));
        assert_eq!(format!("{:?}", map), r#"{"pear": 2}"#);
    }

    #[cfg_attr(miri, ignore)]
    #[quickcheck]
    fn quickcheck_against_btreemap(vals: Vec<(u8, u32)>, del: Vec<u8>) -> TestResult {
        let mut map = RBMap::new();
        let mut model = BTreeMap::new();

        for (k, v) in vals.iter().copied() {
            let fresh = !model.contains_key(&k);
            if fresh {
                model.insert(k, v);
            }

            if map.insert(k, v) != fresh {
                return TestResult::failed();
            }
        }

        for k in del.iter() {
            if map.remove(k) != model.remove(k) {
                return TestResult::failed();
            }
        }

        map.check_invariants();

        let t1: Vec<(u8, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        let t2: Vec<(u8, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        TestResult::from_bool(t1 == t2 && map.len() == model.len())
    }
}
