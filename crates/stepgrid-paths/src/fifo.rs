use std::collections::VecDeque;

/// Insertion-order queue used as the breadth-first frontier.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append `item` at the back.
    #[inline]
    pub fn insert(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut q = FifoQueue::new();
        let input = [7, 3, 9, 3, 1];
        for v in input {
            q.insert(v);
        }
        assert_eq!(q.len(), 5);
        assert_eq!(q.peek(), Some(&7));
        let out: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(out, input);
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn interleaved_insert_and_pop() {
        let mut q = FifoQueue::new();
        q.insert('a');
        q.insert('b');
        assert_eq!(q.pop(), Some('a'));
        q.insert('c');
        assert_eq!(q.iter().copied().collect::<String>(), "bc");
        assert_eq!(q.pop(), Some('b'));
        assert_eq!(q.pop(), Some('c'));
        assert!(q.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut q: FifoQueue<u8> = FifoQueue::default();
        q.insert(1);
        q.clear();
        assert_eq!(q.peek(), None);
        assert_eq!(q.pop(), None);
    }
}
