//! Fixed-capacity open-addressing hash table with double hashing.
//!
//! Collisions are resolved by probing
//! `home(key) + i * (step - key % step) mod slot_count` for
//! `i = 1 .. slot_count - 1`. Insertion walks that full sequence; lookup
//! deliberately stops after the first probe step, so an element that landed
//! at probe depth two or deeper is present in the slot array (and in
//! [`DoubleHashTable::stored_keys`]) but not reachable through
//! [`DoubleHashTable::search`]. That asymmetry is kept for placement
//! compatibility and is pinned down by the test suite.

use crate::compat::Keyed;
use crate::error::Error;
use crate::geometry::TableGeometry;
use crate::serial::SerialCheck;

/// Fixed-capacity hash table keyed by `u64`, with double hashing for
/// collision resolution.
///
/// The backing array length and probe step are primes derived from the
/// requested capacity at construction time; the table never grows. Mutating
/// and reading operations on one instance are serialized by exclusive
/// ownership (`&mut self` for writes, `!Sync` overall).
pub struct DoubleHashTable<V> {
    geometry: TableGeometry,
    slots: Vec<Option<V>>,
    occupancy: usize,
    serial: SerialCheck,
}

impl<V: Keyed> DoubleHashTable<V> {
    /// Build a table for `capacity` elements. This is the only constructor;
    /// the slot count and probe step cannot be chosen directly.
    ///
    /// Fails with [`Error::InvalidCapacity`] when `capacity` is outside
    /// `[2, 126]`.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let geometry = TableGeometry::for_capacity(capacity)?;
        let mut slots = Vec::with_capacity(geometry.slot_count);
        slots.resize_with(geometry.slot_count, || None);
        Ok(Self {
            geometry,
            slots,
            occupancy: 0,
            serial: SerialCheck::new(),
        })
    }

    /// Soft capacity the caller requested.
    pub fn capacity(&self) -> usize {
        self.geometry.max_elements
    }

    /// Length of the prime-sized backing array.
    pub fn slot_count(&self) -> usize {
        self.geometry.slot_count
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupancy
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    fn home_slot(&self, key: u64) -> usize {
        (key % self.geometry.slot_count as u64) as usize
    }

    fn probe_slot(&self, key: u64, i: usize) -> usize {
        let step = self.geometry.step;
        let offset = i as u64 * (step - key % step);
        ((self.home_slot(key) as u64 + offset) % self.geometry.slot_count as u64) as usize
    }

    /// Resolve `key` to a slot index using the lookup probe policy: the home
    /// slot, then exactly one probe step.
    fn locate(&self, key: u64) -> Option<usize> {
        let home = self.home_slot(key);
        let element = self.slots[home].as_ref()?;
        if element.key() == key {
            return Some(home);
        }
        let idx = self.probe_slot(key, 1);
        match self.slots[idx].as_ref() {
            Some(e) if e.key() == key => Some(idx),
            _ => None,
        }
    }

    /// Insert `element`, resolving collisions along the full probe sequence.
    ///
    /// Fails with [`Error::CapacityExceeded`] when the current occupancy
    /// already exceeds [`capacity`](Self::capacity) before any probing. The
    /// bound intentionally admits one element more than the requested
    /// capacity; the extra slot always exists because the backing array is
    /// strictly larger than the capacity.
    ///
    /// If every probed slot is occupied the element is dropped without
    /// effect. With a prime slot count the probe sequence visits every slot,
    /// so that branch only triggers on a table already beyond its occupancy
    /// bound, which the capacity check rejects first.
    pub fn add(&mut self, element: V) -> Result<(), Error> {
        let _g = self.serial.enter();
        if self.occupancy > self.geometry.max_elements {
            return Err(Error::CapacityExceeded);
        }
        let key = element.key();
        let home = self.home_slot(key);
        if self.slots[home].is_none() {
            self.slots[home] = Some(element);
            self.occupancy += 1;
            return Ok(());
        }
        for i in 1..self.slot_count() {
            let idx = self.probe_slot(key, i);
            if self.slots[idx].is_none() {
                self.slots[idx] = Some(element);
                self.occupancy += 1;
                return Ok(());
            }
        }
        Ok(())
    }

    /// Look up `key`, returning the slot index and a reference to the
    /// element, or `None` when the key is absent or sits beyond the first
    /// probe step (see module docs).
    pub fn search(&self, key: u64) -> Option<(usize, &V)> {
        let _g = self.serial.enter();
        let idx = self.locate(key)?;
        self.slots[idx].as_ref().map(|e| (idx, e))
    }

    /// Overwrite the element stored under `key` in place. Occupancy is
    /// unchanged. Fails with [`Error::ElementNotFound`] when `key` does not
    /// resolve through the lookup probe policy.
    pub fn update(&mut self, key: u64, element: V) -> Result<(), Error> {
        let _g = self.serial.enter();
        let idx = self.locate(key).ok_or(Error::ElementNotFound)?;
        self.slots[idx] = Some(element);
        Ok(())
    }

    /// Clear the slot holding `key` and return the removed element,
    /// decrementing occupancy. Fails with [`Error::ElementNotFound`] when
    /// `key` does not resolve.
    pub fn remove(&mut self, key: u64) -> Result<V, Error> {
        let _g = self.serial.enter();
        let idx = self.locate(key).ok_or(Error::ElementNotFound)?;
        match self.slots[idx].take() {
            Some(element) => {
                self.occupancy -= 1;
                Ok(element)
            }
            None => Err(Error::ElementNotFound),
        }
    }

    /// Keys of all occupied slots, in slot-index order (not insertion
    /// order).
    pub fn stored_keys(&self) -> Vec<u64> {
        let _g = self.serial.enter();
        self.slots.iter().flatten().map(Keyed::key).collect()
    }

    /// Occupied slots in slot-index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (i, e)))
    }
}
