//! Debug-only check that operations on one instance are serialized.
//!
//! Each container admits at most one in-flight operation at a time. The only
//! way to violate that from safe code is to re-enter the same instance from
//! user code invoked during an operation (a `PartialEq` impl observed during
//! a scan, for example). In debug builds entering twice without dropping the
//! guard panics; in release builds this compiles to a zero-cost no-op.
//!
//! The `Cell` makes any embedding container `!Sync`, which is exactly the
//! contract: an instance may move between threads, but two threads never
//! operate on it at once without external locking.

use core::cell::Cell;
#[cfg(not(debug_assertions))]
use core::marker::PhantomData;

/// Per-instance operation tracker. Embed in a container and open every
/// public entry-point with `let _g = self.serial.enter();`.
#[derive(Debug, Default)]
pub(crate) struct SerialCheck {
    #[cfg(debug_assertions)]
    depth: Cell<u32>,
    // Field exists in release builds only to keep the type !Sync there too.
    #[cfg(not(debug_assertions))]
    _nosync: Cell<()>,
}

impl SerialCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            depth: Cell::new(0),
            #[cfg(not(debug_assertions))]
            _nosync: Cell::new(()),
        }
    }

    /// Enter an operation. In debug builds, panics if one is already running.
    #[inline]
    pub(crate) fn enter(&self) -> SerialGuard<'_> {
        #[cfg(debug_assertions)]
        {
            let d = self.depth.get();
            assert!(d == 0, "overlapping operations on one container instance");
            self.depth.set(d + 1);
            SerialGuard { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            SerialGuard { _z: PhantomData }
        }
    }
}

/// RAII guard returned by [`SerialCheck::enter`].
pub(crate) struct SerialGuard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a SerialCheck,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl Drop for SerialGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            let d = self.owner.depth.get();
            debug_assert!(d > 0);
            self.owner.depth.set(d - 1);
        }
    }
}
