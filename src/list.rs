//! Singly linked list over an arena of nodes.
//!
//! Nodes live in a [`SlotMap`]; links are arena keys rather than owned boxes,
//! so the head and tail handles are plain non-owning references into the
//! arena and removal never recurses through a chain of owners. Iteration and
//! scans follow the `next` links, not arena order.

use slotmap::{DefaultKey, SlotMap};
use std::fmt;

use crate::compat::Compatible;
use crate::error::Error;
use crate::serial::SerialCheck;

struct Node<T> {
    value: T,
    next: Option<DefaultKey>,
}

/// Singly linked list with head and tail handles.
///
/// The reported size always equals the number of live nodes in the arena.
pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
    serial: SerialCheck,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            serial: SerialCheck::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a value at the end of the list.
    pub fn push_back(&mut self, value: T) {
        let _g = self.serial.enter();
        let key = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.nodes.get_mut(tail) {
                    node.next = Some(key);
                }
                self.tail = Some(key);
            }
            None => {
                self.head = Some(key);
                self.tail = Some(key);
            }
        }
    }

    /// Insert a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let _g = self.serial.enter();
        let key = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(key);
        if self.tail.is_none() {
            self.tail = Some(key);
        }
    }

    /// Remove and return the front value.
    ///
    /// Fails with [`Error::EmptyStructure`] when the list is empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let _g = self.serial.enter();
        let head = self.head.ok_or(Error::EmptyStructure)?;
        let node = self.nodes.remove(head).ok_or(Error::EmptyStructure)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.value)
    }

    /// Front value without removing it.
    pub fn front(&self) -> Result<&T, Error> {
        let _g = self.serial.enter();
        self.head
            .and_then(|k| self.nodes.get(k))
            .map(|n| &n.value)
            .ok_or(Error::EmptyStructure)
    }

    /// Last (tail) value without removing it.
    pub fn back(&self) -> Result<&T, Error> {
        let _g = self.serial.enter();
        self.tail
            .and_then(|k| self.nodes.get(k))
            .map(|n| &n.value)
            .ok_or(Error::EmptyStructure)
    }

    /// Values in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// String rendering of the list contents in order, or `"Empty List"`.
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        let _g = self.serial.enter();
        if self.is_empty() {
            return "Empty List".to_string();
        }
        let values: Vec<&T> = self.iter().collect();
        format!("{values:?}")
    }
}

impl<T: Compatible> LinkedList<T> {
    /// First occurrence of `target`, as `(position, value)`.
    pub fn find_first(&self, target: &T) -> Option<(usize, &T)> {
        let _g = self.serial.enter();
        self.iter().enumerate().find(|(_, v)| *v == target)
    }

    /// Every occurrence of `target`, as `(position, value)` pairs in list
    /// order.
    pub fn find_all(&self, target: &T) -> Vec<(usize, &T)> {
        let _g = self.serial.enter();
        self.iter()
            .enumerate()
            .filter(|(_, v)| *v == target)
            .collect()
    }

    /// Unlink the first occurrence of `target`.
    ///
    /// Fails with [`Error::EmptyStructure`] when the list is empty; a list
    /// that simply does not contain `target` is left unchanged and the call
    /// succeeds.
    pub fn remove_first(&mut self, target: &T) -> Result<(), Error> {
        let _g = self.serial.enter();
        let head = self.head.ok_or(Error::EmptyStructure)?;

        let mut previous: Option<DefaultKey> = None;
        let mut cursor = Some(head);
        while let Some(key) = cursor {
            let next = self.nodes.get(key).and_then(|n| n.next);
            if self.nodes.get(key).is_some_and(|n| n.value == *target) {
                match previous {
                    Some(prev) => {
                        if let Some(prev_node) = self.nodes.get_mut(prev) {
                            prev_node.next = next;
                        }
                    }
                    None => self.head = next,
                }
                if self.tail == Some(key) {
                    self.tail = previous;
                }
                self.nodes.remove(key);
                return Ok(());
            }
            previous = cursor;
            cursor = next;
        }
        Ok(())
    }

    /// Replace the first occurrence of `current` with `new`.
    ///
    /// Fails with [`Error::EmptyStructure`] when the list is empty; when
    /// `current` is absent the list is left unchanged and the call succeeds.
    pub fn update_one(&mut self, current: &T, new: T) -> Result<(), Error> {
        let _g = self.serial.enter();
        if self.head.is_none() {
            return Err(Error::EmptyStructure);
        }
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = match self.nodes.get_mut(key) {
                Some(node) => node,
                None => break,
            };
            if node.value == *current {
                node.value = new;
                return Ok(());
            }
            cursor = node.next;
        }
        Ok(())
    }

    /// Replace every occurrence of `current` with a clone of `new`,
    /// returning how many nodes changed.
    ///
    /// Fails with [`Error::EmptyStructure`] when the list is empty.
    pub fn update_all(&mut self, current: &T, new: &T) -> Result<usize, Error>
    where
        T: Clone,
    {
        let _g = self.serial.enter();
        if self.head.is_none() {
            return Err(Error::EmptyStructure);
        }
        let mut updated = 0;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = match self.nodes.get_mut(key) {
                Some(node) => node,
                None => break,
            };
            if node.value == *current {
                node.value = new.clone();
                updated += 1;
            }
            cursor = node.next;
        }
        Ok(updated)
    }
}

/// Iterator over list values in chain order.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cursor: Option<DefaultKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.cursor?;
        let node = self.nodes.get(key)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}
