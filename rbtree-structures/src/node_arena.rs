//! Index-addressed node storage.
//!
//! Linked structures in this crate refer to their nodes by `usize` index into
//! a `NodeArena` instead of by pointer. Parent/child and prev/next links are
//! then plain integers, and the arena is the single owner of every node.
//! Freed slots are threaded onto a free list and handed out again by later
//! insertions.

use core::mem;
use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    /// Link to the next free slot, if any.
    Vacant(Option<usize>),
}

#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> NodeArena<T> {
        NodeArena {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena<T> {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots (occupied or free) currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Store `value` and return the index it was placed at.
    pub fn insert(&mut self, value: T) -> usize {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let next_free = match self.slots[idx] {
                Slot::Vacant(next) => next,
                Slot::Occupied(_) => panic!("free list corrupted at slot {}", idx),
            };

            self.free_head = next_free;
            self.slots[idx] = Slot::Occupied(value);
            idx
        } else {
            self.slots.push(Slot::Occupied(value));
            self.slots.len() - 1
        }
    }

    /// Take the value out of slot `index`, freeing the slot for reuse.
    pub fn remove(&mut self, index: usize) -> T {
        if !self.contains(index) {
            panic!(
                "attempted to remove invalid node {} (capacity is {})",
                index,
                self.slots.len()
            );
        }

        let old = mem::replace(&mut self.slots[index], Slot::Vacant(self.free_head));
        self.free_head = Some(index);
        self.len -= 1;

        match old {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => unreachable!("slot {} checked as occupied", index),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Occupied(_)))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Iterate over occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(value) => Some((idx, value)),
                Slot::Vacant(_) => None,
            })
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        NodeArena::new()
    }
}

impl<T> Index<usize> for NodeArena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "attempted to access invalid node {} (capacity is {})",
                index,
                self.slots.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for NodeArena<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let capacity = self.slots.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "attempted to access invalid node {} (capacity is {})",
                index, capacity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NodeArena;
    use std::prelude::v1::*;

    #[test]
    fn insert_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.len(), 2, "incorrect node count");
        assert_eq!(arena[a], "a");
        assert_eq!(arena[b], "b");
        assert_eq!(arena.get(2), None);
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);

        assert_eq!(arena.remove(b), 2);
        assert_eq!(arena.remove(a), 1);
        assert!(!arena.contains(a));
        assert_eq!(arena.len(), 1);

        // Most recently freed slot comes back first.
        assert_eq!(arena.insert(4), a);
        assert_eq!(arena.insert(5), b);
        assert_eq!(arena.insert(6), 3);
        assert_eq!(arena.capacity(), 4);
        assert_eq!(arena[c], 3);
    }

    #[test]
    fn iter_skips_vacant_slots() {
        let mut arena = NodeArena::new();
        for i in 0..5 {
            arena.insert(i * 10);
        }

        arena.remove(1);
        arena.remove(3);

        let v: Vec<(usize, i32)> = arena.iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(v, vec![(0, 0), (2, 20), (4, 40)]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut arena = NodeArena::new();
        arena.insert(1);
        arena.insert(2);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), 0);
        assert_eq!(arena.insert(3), 0);
    }

    #[test]
    #[should_panic(expected = "attempted to remove invalid node")]
    fn double_remove_panics() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        arena.remove(a);
        arena.remove(a);
    }

    #[test]
    #[should_panic(expected = "attempted to access invalid node")]
    fn index_vacant_panics() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        arena.remove(a);
        let _ = arena[a];
    }
}
