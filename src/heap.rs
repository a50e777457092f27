use crate::error::{Error, Result};

/// Anything that can be ordered in a [`MinHeap`] by a weight.
pub trait Weighted {
    fn weight(&self) -> usize;
}

/// A binary min-heap keyed by [`Weighted::weight`].
///
/// Elements live in a flat vector: the element at index `i` has its children
/// at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`. No element
/// weighs less than its parent.
///
/// Elements of equal weight come out in no particular order.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn with_capacity(n: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements in their heap layout.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    fn parent(i: usize) -> Option<usize> {
        if i == 0 {
            None
        } else {
            Some((i - 1) / 2)
        }
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Weighted> MinHeap<T> {
    /// Returns the lightest element, or `None` if the heap is empty.
    pub fn peek_min(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Adds an element and restores the heap order in `O(log n)`.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the lightest element in `O(log n)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the heap holds no elements.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop().ok_or(Error::EmptyContainer)?;
        self.sift_down(0);
        Ok(min)
    }

    /// Consumes a heap holding a single element and returns that element.
    pub fn into_single(mut self) -> Option<T> {
        if self.elements.len() == 1 {
            self.elements.pop()
        } else {
            None
        }
    }

    /// Checks that no element weighs less than its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| match Self::parent(i) {
            Some(p) => self.elements[p].weight() <= self.elements[i].weight(),
            None => true,
        })
    }

    // Moves the element up while it is strictly lighter than its parent.
    fn sift_up(&mut self, mut i: usize) {
        while let Some(p) = Self::parent(i) {
            if self.elements[i].weight() < self.elements[p].weight() {
                self.elements.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    // Moves the element down towards its lighter child; the left child wins ties.
    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            if l >= n {
                break;
            }
            let mut child = l;
            if r < n && self.elements[r].weight() < self.elements[l].weight() {
                child = r;
            }
            if self.elements[child].weight() < self.elements[i].weight() {
                self.elements.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Weighted> std::iter::FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        for value in iter {
            heap.insert(value);
        }
        heap
    }
}
