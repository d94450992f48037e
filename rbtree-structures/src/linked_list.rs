use core::fmt;
use core::iter::FusedIterator;

use crate::node_arena::NodeArena;

#[derive(Debug, Clone)]
struct ListNode<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked list whose nodes are stored in a [`NodeArena`].
///
/// No synchronization is implemented for this type; it assumes a single
/// owner, like every other container in this crate.
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: NodeArena<ListNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn push_front(&mut self, data: T) {
        let node = self.nodes.insert(ListNode {
            data,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.nodes[head].prev = Some(node),
            None => self.tail = Some(node),
        }

        self.head = Some(node);
    }

    pub fn push_back(&mut self, data: T) {
        let node = self.nodes.insert(ListNode {
            data,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.map(|idx| &self.nodes[idx].data)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.nodes[idx].data)
    }

    /// Element at position `index`, counting from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    fn find(&self, data: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.nodes[idx].data == *data {
                return Some(idx);
            }

            cur = self.nodes[idx].next;
        }

        None
    }

    pub fn contains(&self, data: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(data).is_some()
    }

    /// Remove the first element equal to `data`.
    pub fn remove(&mut self, data: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let idx = self.find(data)?;
        Some(self.unlink(idx))
    }

    fn unlink(&mut self, idx: usize) -> T {
        let ListNode { data, prev, next } = self.nodes.remove(idx);

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }

        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{}", data)?;
        }

        f.write_str("]")
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push_back(data);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::LinkedList;
    use crate::rng::MersenneTwister64;
    use quickcheck::{Arbitrary, Gen, TestResult};
    use std::collections::VecDeque;
    use std::prelude::v1::*;

    #[test]
    fn push_and_pop_both_ends() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.peek_front(), Some(&1));
        assert_eq!(list.peek_back(), Some(&3));

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.peek_front(), None);
        assert_eq!(list.peek_back(), None);
    }

    #[test]
    fn remove_by_value() {
        let mut list: LinkedList<i32> = (1..=5).collect();

        assert_eq!(list.remove(&3), Some(3));
        assert_eq!(list.remove(&3), None);
        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.remove(&5), Some(5));

        let v: Vec<i32> = list.iter().copied().collect();
        assert_eq!(v, vec![2, 4]);
        assert_eq!(list.peek_front(), Some(&2));
        assert_eq!(list.peek_back(), Some(&4));
    }

    #[test]
    fn get_by_index() {
        let list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();

        assert_eq!(list.get(0), Some(&"a"));
        assert_eq!(list.get(2), Some(&"c"));
        assert_eq!(list.get(3), None);
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"d"));
    }

    #[test]
    fn display_format() {
        let mut list = LinkedList::new();
        assert_eq!(format!("{}", list), "[]");

        list.extend([1, 2, 3]);
        assert_eq!(format!("{}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn random_removal_until_empty() {
        let mut rng = MersenneTwister64::new(0x4B616E6174614368);
        let mut list = LinkedList::new();

        for i in 1..=500u64 {
            list.push_front(i);
            assert!(list.contains(&i));
        }

        while !list.is_empty() {
            let idx = rng.below(list.len() as u64) as usize;
            let v = *list.get(idx).unwrap();
            assert_eq!(list.remove(&v), Some(v));
            assert!(!list.contains(&v));
        }

        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn iter_both_ends() {
        let list: LinkedList<i32> = (0..4).collect();
        let mut it = list.iter();

        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        PushFront(u8),
        PushBack(u8),
        PopFront,
        PopBack,
        Remove(u8),
    }

    impl Arbitrary for Op {
        fn arbitrary(g: &mut Gen) -> Self {
            let v = u8::arbitrary(g);
            match u8::arbitrary(g) % 5 {
                0 => Op::PushFront(v),
                1 => Op::PushBack(v),
                2 => Op::PopFront,
                3 => Op::PopBack,
                _ => Op::Remove(v % 8),
            }
        }
    }

    #[cfg_attr(miri, ignore)]
    #[quickcheck]
    fn quickcheck_against_vecdeque(ops: Vec<Op>) -> TestResult {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();

        for op in ops {
            let ok = match op {
                Op::PushFront(v) => {
                    list.push_front(v);
                    model.push_front(v);
                    true
                }
                Op::PushBack(v) => {
                    list.push_back(v);
                    model.push_back(v);
                    true
                }
                Op::PopFront => list.pop_front() == model.pop_front(),
                Op::PopBack => list.pop_back() == model.pop_back(),
                Op::Remove(v) => {
                    let expected = model
                        .iter()
                        .position(|x| *x == v)
                        .and_then(|i| model.remove(i));
                    list.remove(&v) == expected
                }
            };

            if !ok || list.len() != model.len() {
                return TestResult::failed();
            }
        }

        let t1: Vec<u8> = model.iter().copied().collect();
        let t2: Vec<u8> = list.iter().copied().collect();
        let t3: Vec<u8> = list.iter().rev().copied().collect();
        let t4: Vec<u8> = model.iter().rev().copied().collect();

        TestResult::from_bool(t1 == t2 && t3 == t4)
    }
}
