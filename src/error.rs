//! Shared error enum for all container operations.

use thiserror::Error;

/// Errors surfaced by the containers in this crate.
///
/// Every fallible operation either fully applies its effect or leaves the
/// structure unchanged; there is no partial-failure state. Errors are
/// returned synchronously to the caller and never retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested table capacity is outside the supported range.
    #[error("requested table capacity is outside the supported range")]
    InvalidCapacity,
    /// The table's occupancy bound was hit before probing for a slot.
    #[error("hash table capacity exceeded")]
    CapacityExceeded,
    /// No stored element matched the given key.
    #[error("no element found for the given key")]
    ElementNotFound,
    /// Pop/peek/dequeue/remove on an empty linked structure.
    #[error("operation on an empty structure")]
    EmptyStructure,
}
