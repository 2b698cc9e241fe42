//! The heap-to-stack buffer round-trip routine.
//!
//! Flow: acquire a [`REGION_LEN`]-byte heap region → zero-fill it →
//! write [`PAYLOAD`] into its start → copy all [`REGION_LEN`] bytes
//! one at a time through a [`ByteCursor`] into a stack-resident array
//! → release the heap region.

use crate::cursor::ByteCursor;
use crate::error::BufferError;
use crate::region::HeapRegion;

/// Width of the heap and stack regions in bytes.
///
/// Deliberately independent of [`PAYLOAD`]'s length: the copy always
/// moves the full fixed width, and the zero-fill baseline makes the
/// tail bytes past the payload deterministic.
pub const REGION_LEN: usize = 24;

/// The fixed payload, terminator byte included.
///
/// 21 bytes: a 20-character literal plus an explicit terminator. The
/// length is carried by the constant itself rather than inferred from
/// a terminator scan.
pub const PAYLOAD: &[u8] = b"HelloT1mzhouCSDNTEST\0";

/// Copy the region's full fixed width into a stack-resident array,
/// one byte at a time through a cursor.
///
/// Both source and destination are exactly [`REGION_LEN`] bytes, so
/// the copy has no bounds failure by construction.
///
/// # Panics
///
/// Panics if `region` is not exactly [`REGION_LEN`] bytes wide.
pub fn copy_to_stack(region: &HeapRegion) -> [u8; REGION_LEN] {
    assert_eq!(region.len(), REGION_LEN, "region width mismatch");
    let mut stack = [0u8; REGION_LEN];
    let cursor = ByteCursor::new(region.as_bytes());
    for (slot, byte) in stack.iter_mut().zip(cursor) {
        *slot = byte;
    }
    stack
}

/// Run the full round-trip: acquire, zero, write, copy, release.
///
/// Returns the stack-resident copy of the region's contents. The only
/// failure is allocation failure, reported as `Err` without running
/// any of the later steps; the heap region is released exactly once
/// on the success path, before this function returns.
pub fn round_trip() -> Result<[u8; REGION_LEN], BufferError> {
    let mut region = HeapRegion::acquire(REGION_LEN)?;
    region.zero();
    region.write_payload(PAYLOAD);
    let stack = copy_to_stack(&region);
    region.release();
    Ok(stack)
}
