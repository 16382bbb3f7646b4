//! FIFO facade over [`LinkedList`].

use std::fmt;

use crate::compat::Compatible;
use crate::error::Error;
use crate::list::LinkedList;

/// Queue backed by a linked list; the list head is the front of the queue.
pub struct Queue<T> {
    data: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            data: LinkedList::new(),
        }
    }

    /// Add a value at the rear of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Remove and return the front value.
    ///
    /// Fails with [`Error::EmptyStructure`] when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, Error> {
        self.data.pop_front()
    }

    /// Front value without removing it.
    pub fn front(&self) -> Result<&T, Error> {
        self.data.front()
    }

    /// Rear (most recently enqueued) value without removing it.
    pub fn rear(&self) -> Result<&T, Error> {
        self.data.back()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contents from front to rear, or `"Empty List"`.
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        self.data.dump()
    }
}

impl<T: Compatible> Queue<T> {
    /// First occurrence of `target` counting from the front of the queue.
    pub fn find_first(&self, target: &T) -> Option<(usize, &T)> {
        self.data.find_first(target)
    }

    /// Every occurrence of `target`, positions counted from the front.
    pub fn find_all(&self, target: &T) -> Vec<(usize, &T)> {
        self.data.find_all(target)
    }

    /// Replace the frontmost occurrence of `current` with `new`.
    pub fn update_one(&mut self, current: &T, new: T) -> Result<(), Error> {
        self.data.update_one(current, new)
    }

    /// Replace every occurrence of `current`, returning the count changed.
    pub fn update_all(&mut self, current: &T, new: &T) -> Result<usize, Error>
    where
        T: Clone,
    {
        self.data.update_all(current, new)
    }
}
