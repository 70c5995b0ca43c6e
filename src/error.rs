use alloc::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur when constructing a [`BitArray`].
///
/// Out-of-bounds indices are not errors: they panic.
///
/// [`BitArray`]: crate::BitArray
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The byte buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for bit array: {source}")]
    Allocation {
        /// Requested buffer size in bytes.
        bytes: usize,
        /// Underlying allocator error.
        source: TryReserveError,
    },
}

/// Result alias used by fallible constructors.
pub type Result<T> = core::result::Result<T, Error>;
