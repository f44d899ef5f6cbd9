use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Single-use FIFO buffer materializing the result of one range query.
///
/// A collector is created fresh per query, filled front-to-back in key order,
/// and then consumed exactly once — either by explicit [`dequeue`] calls or
/// through the [`Iterator`] impl, which drains the same underlying sequence.
/// Once exhausted it stays empty; a second traversal needs a new query.
///
/// [`dequeue`]: RangeCollector::dequeue
#[derive(Debug, Clone)]
pub struct RangeCollector<T> {
    items: VecDeque<T>,
}

impl<T> RangeCollector<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item, `None` once exhausted.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for RangeCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for RangeCollector<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for RangeCollector<T> {}
impl<T> FusedIterator for RangeCollector<T> {}
