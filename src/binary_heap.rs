use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::error::HeapError;
use crate::order::{MaxFirst, MinFirst, Order};

/// Array-backed binary heap whose root is the element `O` places first.
///
/// Indices `[0, len)` of the backing storage are always live elements in heap
/// order: no child is ever strictly before its parent under `O`.
pub struct BinaryHeap<T, O = MinFirst> {
    data: Vec<T>,
    order: PhantomData<O>,
}

pub type MinHeap<T> = BinaryHeap<T, MinFirst>;
pub type MaxHeap<T> = BinaryHeap<T, MaxFirst>;

impl<T: Ord, O: Order> BinaryHeap<T, O> {
    pub fn new() -> Self {
        BinaryHeap {
            data: Vec::new(),
            order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        let mut heap = Self::new();
        heap.heapify(vec);
        heap
    }

    /// Replaces the contents with `items` and restores heap order bottom-up
    /// in O(n).
    pub fn heapify(&mut self, items: Vec<T>) -> &mut Self {
        self.data = items;
        debug!("heapifying {} elements", self.data.len());
        self.build();
        self
    }

    /// Builds a new heap from the concatenation of two sources.
    ///
    /// Sources may be owned vectors, slices or arrays, or other heaps. A
    /// borrowed heap is cloned and left untouched. The cost is O(m + n)
    /// regardless of how the inputs are ordered.
    pub fn merge<A, B>(a: A, b: B) -> Self
    where
        A: Into<Vec<T>>,
        B: Into<Vec<T>>,
    {
        let mut heap = Self::new();
        heap.merge_into(a, b);
        heap
    }

    /// Like [`BinaryHeap::merge`], but replaces the contents of `self`.
    pub fn merge_into<A, B>(&mut self, a: A, b: B) -> &mut Self
    where
        A: Into<Vec<T>>,
        B: Into<Vec<T>>,
    {
        let mut items = a.into();
        let mut rest = b.into();
        debug!("merging {} and {} elements", items.len(), rest.len());
        items.append(&mut rest);
        self.heapify(items)
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn extract(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            trace!("extract on empty heap");
            return Err(HeapError::Empty);
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let extreme = self.data.pop().ok_or(HeapError::Empty)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(extreme)
    }

    /// Returns the root without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Drops every element and releases the backing storage.
    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.data.len());
        self.data = Vec::new();
    }

    /// Backing storage in heap order, not sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract() {
            sorted.push(value);
        }
        sorted
    }

    fn build(&mut self) {
        if self.data.len() <= 1 {
            return;
        }
        let last_parent = (self.data.len() - 2) / 2;
        for i in (0..=last_parent).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if O::before(&self.data[idx], &self.data[parent]) {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut best = idx;

            if left < len && O::before(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < len && O::before(&self.data[right], &self.data[best]) {
                best = right;
            }

            if best == idx {
                break;
            }
            self.data.swap(idx, best);
            idx = best;
        }
    }
}

impl<T: Ord, O: Order> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        BinaryHeap {
            data: self.data.clone(),
            order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord, O: Order> From<Vec<T>> for BinaryHeap<T, O> {
    fn from(vec: Vec<T>) -> Self {
        BinaryHeap::from_vec(vec)
    }
}

impl<T, O> From<BinaryHeap<T, O>> for Vec<T> {
    fn from(heap: BinaryHeap<T, O>) -> Self {
        heap.data
    }
}

impl<T: Clone, O> From<&BinaryHeap<T, O>> for Vec<T> {
    fn from(heap: &BinaryHeap<T, O>) -> Self {
        heap.data.clone()
    }
}

impl<T: Ord, O: Order> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let vec: Vec<T> = iter.into_iter().collect();
        BinaryHeap::from_vec(vec)
    }
}

impl<T: Ord, O: Order> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
