//! Fixed-width heap-to-stack byte buffer round-trip.
//!
//! A teaching-scale memory-manipulation exercise: acquire a 24-byte
//! heap region, zero-fill it, write a fixed payload into it, copy the
//! full width one byte at a time through a cursor into a stack array,
//! then release the region.
//!
//! # Design
//!
//! - The heap region is an owned, scope-bound value ([`HeapRegion`]);
//!   release is a consuming move, so use-after-release and double
//!   release do not compile.
//! - Traversal is iterator-based ([`ByteCursor`]) rather than raw
//!   pointer arithmetic.
//! - Allocation failure is the only modeled error ([`BufferError`]);
//!   it is recoverable and reported, never fatal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod region;
pub mod roundtrip;

// Public re-exports for the primary API surface.
pub use cursor::ByteCursor;
pub use error::BufferError;
pub use region::HeapRegion;
pub use roundtrip::{copy_to_stack, round_trip, PAYLOAD, REGION_LEN};
