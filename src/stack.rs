//! LIFO facade over [`LinkedList`].

use std::fmt;

use crate::compat::Compatible;
use crate::error::Error;
use crate::list::LinkedList;

/// Stack backed by a linked list; the list head is the top of the stack.
pub struct Stack<T> {
    data: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            data: LinkedList::new(),
        }
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.data.push_front(value);
    }

    /// Remove and return the top value.
    ///
    /// Fails with [`Error::EmptyStructure`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.data.pop_front()
    }

    /// Top value without removing it.
    pub fn peek(&self) -> Result<&T, Error> {
        self.data.front()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contents from top to bottom, or `"Empty List"`.
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        self.data.dump()
    }
}

impl<T: Compatible> Stack<T> {
    /// First occurrence of `target` counting from the top of the stack.
    pub fn find_first(&self, target: &T) -> Option<(usize, &T)> {
        self.data.find_first(target)
    }

    /// Every occurrence of `target`, positions counted from the top.
    pub fn find_all(&self, target: &T) -> Vec<(usize, &T)> {
        self.data.find_all(target)
    }

    /// Replace the topmost occurrence of `current` with `new`.
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
