use std::cmp::Ordering;

use super::{Comparator, OrderingQueue};

/// Item plus its push sequence number
#[derive(Debug)]
struct Stamped<T> {
    seq: u64,
    item: T,
}

/// Binary max-heap under a caller comparator.
///
/// Each push is stamped with a rising sequence number; comparator ties go to
/// the higher stamp, matching [`LinearQueue`](super::LinearQueue) pop order.
pub struct HeapQueue<T> {
    data: Vec<Stamped<T>>,
    next_seq: u64,
    compare: Comparator<T>,
}

impl<T> HeapQueue<T> {
    pub fn new(compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self {
            data: Vec::new(),
            next_seq: 0,
            compare: Box::new(compare),
        }
    }

    /// True if the item at `a` must pop before the item at `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.data[a], &self.data[b]);
        match (self.compare)(&a.item, &b.item) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => a.seq > b.seq,
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.precedes(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut first = left;
            if right < len && self.precedes(right, left) {
                first = right;
            }

            if self.precedes(first, node) {
                self.data.swap(node, first);
                node = first;
            } else {
                break;
            }
        }
    }
}

impl<T> OrderingQueue<T> for HeapQueue<T> {
    fn push(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.data.push(Stamped { seq, item });
        self.sift_up(self.data.len() - 1);
    }

    fn pop(&mut self) -> Option<T> {
        let len = self.data.len();
        if len == 0 {
            return None;
        }
        self.data.swap(0, len - 1);
        let out = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        out.map(|stamped| stamped.item)
    }

    fn peek(&self) -> Option<&T> {
        self.data.first().map(|stamped| &stamped.item)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for HeapQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeapQueue")
            .field("len", &self.data.len())
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}
