//! dh-table: fixed-capacity containers around a double-hashing hash table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: small generic containers with one algorithmically interesting
//!   core, built in layers so each piece can be reasoned about on its own.
//! - Layers:
//!   - geometry: pure sizing factory; turns a requested capacity into a
//!     prime slot count and a prime probe step via a load-factor walk and
//!     trial-division primality. No mutable state.
//!   - DoubleHashTable<V>: fixed slot array with add/search/update/remove
//!     keyed by `u64`, double hashing for collisions. Consumes a geometry;
//!     never grows.
//!   - LinkedList<T>: singly linked chain over a slotmap arena; head/tail
//!     are arena keys, so there is no owned pointer chain to recurse
//!     through on drop.
//!   - Stack<T> / Queue<T>: thin facades over the list.
//!
//! Constraints
//! - One in-flight operation per instance: mutators take `&mut self`, the
//!   types are `!Sync`, and a debug-only serialization check panics on
//!   re-entry through user code. Distinct instances need no coordination.
//! - No I/O anywhere; every operation completes synchronously and is
//!   O(slot_count) worst case.
//! - Errors are surfaced to the caller through one [`Error`] enum; nothing
//!   is retried or logged, and a failed operation leaves the structure
//!   unchanged.
//!
//! Placement compatibility
//! - The table's probe arithmetic, sizing tie-breaks, and occupancy bound
//!   are kept bit-for-bit stable, including two deliberate quirks: lookup
//!   stops after one probe step while insertion walks the full sequence,
//!   and the capacity check admits one element more than requested. Both
//!   are pinned by tests rather than silently corrected.
//!
//! Notes and non-goals
//! - No rehashing or growth of an existing table; rebuild at a larger
//!   capacity instead.
//! - No persistence and no wire format.
//! - Public surface: [`DoubleHashTable`], [`LinkedList`], [`Stack`],
//!   [`Queue`], the [`Compatible`]/[`Keyed`] contracts and [`Error`].

mod compat;
mod error;
mod geometry;
mod list;
mod queue;
mod serial;
mod stack;
mod table;
mod table_proptest;

// Public surface
pub use compat::{Compatible, Keyed};
pub use error::Error;
pub use list::{Iter, LinkedList};
pub use queue::Queue;
pub use stack::Stack;
pub use table::DoubleHashTable;
