use std::cmp::Ordering;
use std::collections::VecDeque;

use super::{Comparator, OrderingQueue};

/// Queue kept sorted greatest-first by an insertion scan.
///
/// A new item goes immediately before the first queued item it does not
/// compare less than, which places it ahead of every equal item already
/// queued.
pub struct LinearQueue<T> {
    items: VecDeque<T>,
    compare: Comparator<T>,
}

impl<T> LinearQueue<T> {
    pub fn new(compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self {
            items: VecDeque::new(),
            compare: Box::new(compare),
        }
    }
}

impl<T> OrderingQueue<T> for LinearQueue<T> {
    fn push(&mut self, item: T) {
        let position = self
            .items
            .iter()
            .position(|queued| (self.compare)(&item, queued) != Ordering::Less)
            .unwrap_or(self.items.len());
        self.items.insert(position, item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinearQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_stay_sorted_after_each_push() {
        let mut queue = LinearQueue::new(|a: &i32, b: &i32| a.cmp(b));
        for n in [4, 9, 1, 9, 6, 0] {
            queue.push(n);
            let snapshot: Vec<i32> = queue.items.iter().copied().collect();
            let mut sorted = snapshot.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(snapshot, sorted);
        }
        assert_eq!(queue.peek(), Some(&9));
        assert_eq!(queue.len(), 6);
    }
}
