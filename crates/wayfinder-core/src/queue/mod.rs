//! Comparator-ordered frontier queues
//!
//! Items are ordered by a caller-supplied three-way comparison; `pop` yields
//! the greatest item. Items that compare equal pop newest-first. Both
//! implementations honor that tie-break, so swapping one for the other never
//! changes a search result.
//!
//! - [`LinearQueue`]: ordered insertion scan, O(n) push, O(1) pop
//! - [`HeapQueue`]: binary heap with insertion stamps, O(log n) push and pop
//!
//! Dropping a queue drops every item still in it.

pub mod heap;
pub mod linear;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::WayfinderError;

pub use heap::HeapQueue;
pub use linear::LinearQueue;

/// Three-way comparison deciding pop order
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Priority queue over caller-defined items
pub trait OrderingQueue<T> {
    fn push(&mut self, item: T);

    /// Remove the greatest item; among equals, the most recently pushed.
    fn pop(&mut self) -> Option<T>;

    /// The item `pop` would return next
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every queued item
    fn clear(&mut self);
}

/// Which queue implementation backs a search frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueKind {
    #[default]
    Linear,
    Heap,
}

impl QueueKind {
    /// Build an empty queue of this kind
    pub fn build<T: 'static>(
        self,
        compare: impl Fn(&T, &T) -> Ordering + 'static,
    ) -> Box<dyn OrderingQueue<T>> {
        match self {
            QueueKind::Linear => Box::new(LinearQueue::new(compare)),
            QueueKind::Heap => Box::new(HeapQueue::new(compare)),
        }
    }
}

impl FromStr for QueueKind {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(QueueKind::Linear),
            "heap" => Ok(QueueKind::Heap),
            other => crate::bail_invalid!("queue kind", other),
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueKind::Linear => write!(f, "linear"),
            QueueKind::Heap => write!(f, "heap"),
        }
    }
}
