use core::fmt;

use crate::linked_list::LinkedList;

/// A first-in, first-out queue. Items enter at the back of the underlying
/// list and leave from the front.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, data: T) {
        self.list.push_back(data);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// The item that the next `dequeue` will return.
    pub fn peek(&self) -> Option<&T> {
        self.list.peek_front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;
    use std::collections::VecDeque;
    use std::prelude::v1::*;

    #[test]
    fn first_in_first_out() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(format!("{}", queue), "[a, b, c]");

        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        queue.enqueue("d");
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), Some("d"));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[cfg_attr(miri, ignore)]
    #[quickcheck]
    fn quickcheck_against_vecdeque(ops: Vec<Option<u32>>) -> bool {
        let mut queue = Queue::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Some(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                }
                None => {
                    if queue.dequeue() != model.pop_front() {
                        return false;
                    }
                }
            }

            if queue.len() != model.len() || queue.peek() != model.front() {
                return false;
            }
        }

        true
    }
}
