#![deny(unused_imports)]
#![deny(missing_docs)]

//! A binary max-heap priority queue for Rust.
//!
//! A `PriorityQueue` associates arbitrary data with a priority and always hands out
//! the data of the entry with the greatest priority first. Entries are stored densely
//! within a `Vec` that is laid out as an implicit binary tree, so `enqueue` and
//! `dequeue` run in logarithmic time while `peek`, `len` and `is_empty` are constant.
//!
//! It is possible to use custom types as the underlying priority type since the
//! `Priority` trait is implemented for everything that is `PartialOrd`.
//!
//! The queue performs no I/O and no logging, which keeps it suitable for timing
//! measurements such as the ones in the `measure` module.

use unreachable::UncheckedOptionExt;

pub mod measure;

/// Represents a trait for priorities within a `PriorityQueue`.
///
/// Only the strict "less than" relation is ever consulted, so a partial order is enough.
/// Values that are incomparable with each other (for example `NaN`) never compare as
/// greater and thus never cause entries to move.
///
/// This trait is implicitely implemented already for all types that are `PartialOrd`.
pub trait Priority: PartialOrd {}
impl<T> Priority for T where T: PartialOrd {}

/// An entry within a `PriorityQueue`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<P, D> {
    priority: P,
    data: D,
}

impl<P, D> Entry<P, D> {
    #[inline]
    fn new(priority: P, data: D) -> Self {
        Entry { priority, data }
    }

    #[inline]
    fn into_pair(self) -> (P, D) {
        (self.priority, self.data)
    }
}

/// Errors that can be caused while using `PriorityQueue`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caused when using `peek` or `dequeue` on a queue without any entries.
    EmptyQueue,
}

impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match *self {
            Error::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

impl ::std::error::Error for Error {}

/// Generic `Result` type for `PriorityQueue` methods.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Type alias for `PriorityQueue` that has `i64` as default `Priority` type.
pub type DefaultPriorityQueue<D> = PriorityQueue<i64, D>;

/// A priority queue implemented as an array-backed binary max-heap.
///
/// Stores data with an associated priority.
/// The entry with the greatest priority is the one that `peek` looks at and
/// `dequeue` takes out of this storage.
///
/// For every entry at index `i` the entries at `2 * i + 1` and `2 * i + 2`
/// (if they exist) have a priority that is not greater than its own.
///
/// Entries with equal priorities are dequeued in an unspecified order.
///
/// A `PriorityQueue` is not synchronized: mutation requires `&mut self` and sharing
/// it between threads requires external locking.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, D>
where
    P: Priority,
{
    /// The implicit binary tree, the root at index 0 always holds a maximum priority.
    heap: Vec<Entry<P, D>>,
}

impl<P, D> PriorityQueue<P, D>
where
    P: Priority,
{
    /// Creates a new, empty instance of a `PriorityQueue`.
    #[inline]
    pub fn new() -> Self {
        PriorityQueue { heap: Vec::new() }
    }

    /// Creates a new, empty `PriorityQueue` with room for at least `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries stored in this `PriorityQueue`.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if this `PriorityQueue` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries this `PriorityQueue` can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Removes all entries, leaving this `PriorityQueue` empty.
    ///
    /// Calling this on an already empty queue does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Inserts the given data into the `PriorityQueue` with its associated priority.
    pub fn enqueue(&mut self, priority: P, data: D) {
        self.heap.push(Entry::new(priority, data));
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    /// Moves the entry at `idx` towards the root while it outranks its parent.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].priority < self.heap[idx].priority {
                self.heap.swap(parent, idx);
                idx = parent;
            } else {
                return;
            }
        }
    }

    /// Moves the entry at `idx` towards the leaves while one of its children outranks it.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut max = idx;
            if left < len && self.heap[left].priority > self.heap[max].priority {
                max = left;
            }
            if right < len && self.heap[right].priority > self.heap[max].priority {
                max = right;
            }
            if max == idx {
                return;
            }
            self.heap.swap(idx, max);
            idx = max;
        }
    }

    /// Returns a reference to the entry with the maximum priority.
    #[inline]
    fn root(&self) -> Result<&Entry<P, D>> {
        self.heap.first().ok_or(Error::EmptyQueue)
    }

    /// Returns a reference to the data with the maximum priority.
    ///
    /// Fails with `Error::EmptyQueue` if this `PriorityQueue` is empty.
    #[inline]
    pub fn peek(&self) -> Result<&D> {
        self.root().map(|entry| &entry.data)
    }

    /// Returns a reference to the current maximum priority.
    #[inline]
    pub fn peek_priority(&self) -> Result<&P> {
        self.root().map(|entry| &entry.priority)
    }

    /// Returns references to both the maximum priority and its associated data.
    #[inline]
    pub fn peek_entry(&self) -> Result<(&P, &D)> {
        self.root().map(|entry| (&entry.priority, &entry.data))
    }

    /// Returns a reference to the data with the maximum priority.
    ///
    /// Does not check for emptiness so use it carefully!
    #[inline]
    pub unsafe fn peek_unchecked(&self) -> &D {
        &self.heap.first().unchecked_unwrap().data
    }

    /// Removes the data associated with the maximum priority within this `PriorityQueue`
    /// and returns it.
    ///
    /// Fails with `Error::EmptyQueue` if this `PriorityQueue` is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<D> {
        self.dequeue_entry().map(|(_, data)| data)
    }

    /// Removes the entry with the maximum priority and returns its priority and data.
    pub fn dequeue_entry(&mut self) -> Result<(P, D)> {
        match self.is_empty() {
            true => Err(Error::EmptyQueue),
            _ => unsafe { Ok(self.dequeue_entry_unchecked()) },
        }
    }

    /// Removes the data associated with the maximum priority without
    /// checking for emptiness and returns it.
    ///
    /// So use this method carefully!
    #[inline]
    pub unsafe fn dequeue_unchecked(&mut self) -> D {
        self.dequeue_entry_unchecked().1
    }

    /// Takes the last entry out, puts it into the root slot and sifts it down.
    /// The caller has to make sure that the queue is not empty.
    unsafe fn dequeue_entry_unchecked(&mut self) -> (P, D) {
        let mut entry = self.heap.pop().unchecked_unwrap();
        if let Some(root) = self.heap.first_mut() {
            ::std::mem::swap(root, &mut entry);
            self.sift_down(0);
        }
        entry.into_pair()
    }

    /// Iterate over the values in this `PriorityQueue` by reference in unspecified order.
    #[inline]
    pub fn values<'a>(&'a self) -> Values<'a, P, D> {
        Values {
            iter: self.heap.iter(),
        }
    }

    /// Iterate over priorities and values in this `PriorityQueue` in unspecified order.
    #[inline]
    pub fn iter<'a>(&'a self) -> Iter<'a, P, D> {
        Iter {
            iter: self.heap.iter(),
        }
    }

    /// Iterate over values stored within a `PriorityQueue` in a sorted-by-max order.
    /// Drains the queue.
    #[inline]
    pub fn drain_max(self) -> DrainMax<P, D> {
        DrainMax { queue: self }
    }
}

impl<P, D> Default for PriorityQueue<P, D>
where
    P: Priority,
{
    #[inline]
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<P, D> Extend<(P, D)> for PriorityQueue<P, D>
where
    P: Priority,
{
    fn extend<I: IntoIterator<Item = (P, D)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);
        for (priority, data) in iter {
            self.enqueue(priority, data);
        }
    }
}

impl<P, D> ::std::iter::FromIterator<(P, D)> for PriorityQueue<P, D>
where
    P: Priority,
{
    fn from_iter<I: IntoIterator<Item = (P, D)>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

/// Iterator over references to values stored within a `PriorityQueue`.
pub struct Values<'a, P: 'a, D: 'a> {
    iter: ::std::slice::Iter<'a, Entry<P, D>>,
}

/// Iterator over references to priorities and values stored within a `PriorityQueue`.
pub struct Iter<'a, P: 'a, D: 'a> {
    iter: ::std::slice::Iter<'a, Entry<P, D>>,
}

impl<'a, P, D> Iterator for Values<'a, P, D> {
    type Item = &'a D;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|entry| &entry.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, P, D> Iterator for Iter<'a, P, D> {
    type Item = (&'a P, &'a D);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|entry| (&entry.priority, &entry.data))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, P, D> ExactSizeIterator for Values<'a, P, D> {}
impl<'a, P, D> ExactSizeIterator for Iter<'a, P, D> {}

/// Iterator over values stored within a `PriorityQueue` in a sorted-by-max order.
/// Drains the queue.
pub struct DrainMax<P: Priority, D> {
    queue: PriorityQueue<P, D>,
}

impl<P: Priority, D> Iterator for DrainMax<P, D> {
    type Item = D;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<P: Priority, D> ExactSizeIterator for DrainMax<P, D> {}
