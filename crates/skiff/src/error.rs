//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
///
/// Allocation failure is the only modeled failure. It is recoverable:
/// callers report it and carry on, they never abort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The heap region could not be acquired.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "buffer allocation failed: requested {requested} bytes")
            }
        }
    }
}

impl Error for BufferError {}
