//! Exclusively owned, fixed-width heap byte regions.
//!
//! A [`HeapRegion`] is the heap half of the round-trip: a boxed byte
//! slice with a fixed width chosen at acquisition. Acquisition is
//! fallible and returns `Err` rather than aborting, so allocation
//! failure can be handled locally by the caller.

use crate::error::BufferError;

/// An exclusively owned heap-allocated byte region of fixed width.
///
/// The region is zero-filled on acquisition, so reads past any payload
/// written into it are deterministic. It is released by consuming move
/// ([`HeapRegion::release`]) — once released, the owning binding is
/// gone and no use-after-release path exists.
#[derive(Debug)]
pub struct HeapRegion {
    /// Backing storage. Length is fixed for the region's lifetime.
    data: Box<[u8]>,
}

impl HeapRegion {
    /// Acquire a zero-filled region of exactly `len` bytes.
    ///
    /// Returns `Err(BufferError::AllocationFailed)` if the backing
    /// allocation cannot be made. The failure is detected immediately
    /// via `try_reserve_exact` — no abort, no partial region.
    pub fn acquire(len: usize) -> Result<Self, BufferError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { requested: len })?;
        data.resize(len, 0);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Zero-fill the entire region.
    ///
    /// Establishes the deterministic baseline for fixed-width copies:
    /// every byte past a later payload write is guaranteed zero.
    pub fn zero(&mut self) {
        self.data.fill(0);
    }

    /// Copy `payload` into the start of the region.
    ///
    /// Bytes past `payload.len()` are left untouched (zero, if the
    /// region was zeroed beforehand).
    ///
    /// # Panics
    ///
    /// Panics if `payload` is longer than the region.
    pub fn write_payload(&mut self, payload: &[u8]) {
        self.data[..payload.len()].copy_from_slice(payload);
    }

    /// The region's contents as a shared byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Width of the region in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this is a zero-width region.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Release the region, returning its backing storage to the heap.
    ///
    /// Consumes the region by move: the owning binding is invalidated
    /// by the compiler, so neither reuse nor a second release can be
    /// expressed after this call.
    pub fn release(self) {
        drop(self.data);
    }
}
