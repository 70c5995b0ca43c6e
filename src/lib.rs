//! A packed, runtime-sized bit array written in pure Rust.
//! `no_std` (needs `alloc`), no `unsafe`.
//!
//! [`BitArray`] stores `bit_sz` bits in exactly [`byte_count`]`(bit_sz)`
//! bytes and supports single-bit access plus in-place rotation of any
//! contiguous sub-range in O(range length) time and O(1) extra space.
//!
//! # Examples
//! ```
//! use light_bitarray::BitArray;
//!
//! // bits 1101001011, index 0 first
//! let mut bits = BitArray::from_bits(&[
//!     true, true, false, true, false, false, true, false, true, true,
//! ])?;
//! bits.rotate(0, 10, 3);
//! assert_eq!(format!("{bits:?}"), "LSB -> 0: 01111010 8: 01 <- MSB");
//! # Ok::<(), light_bitarray::Error>(())
//! ```
//!
//! # Rotation
//!
//! Rotating a range by `k` is done with three reversals: reverse the first
//! `k` bits, reverse the rest, reverse the whole range. The reversal engine
//! works a byte at a time wherever the range allows it and falls back to
//! bit-exact field swaps at the edges, so the result is always identical to
//! a naive per-bit reversal.
//!
//! # Features
//!
//! - `#![no_std]` compatible (uses `alloc` for the buffer)
//! - Fallible construction: allocation failure is an [`Error`], not an abort
//! - Out-of-bounds indices panic instead of being clamped
//! - `rotate`, `rotate_left`, `rotate_right` and `reverse` on sub-ranges
//! - `random_fill` from a caller-supplied, seedable generator (`rand` feature)

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitarray;
mod error;
mod reverse;
mod rotate;

pub use bitarray::{BitArray, BitArrayIter};
pub use error::{Error, Result};

/// Computes the number of bytes needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use light_bitarray::byte_count;
///
/// assert_eq!(byte_count(0), 0);
/// assert_eq!(byte_count(9), 2);
/// assert_eq!(byte_count(16), 2);
/// assert_eq!(byte_count(17), 3);
/// ```
pub const fn byte_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Mathematical modulo: returns the unique `r` in `0..m` with
/// `r ≡ n (mod m)`.
///
/// Unlike `%`, the result is never negative for a negative dividend.
///
/// # Panics
/// Panics if `m == 0`.
///
/// # Examples
/// ```
/// use light_bitarray::modulo;
///
/// assert_eq!(modulo(-1, 10), 9);
/// assert_eq!(modulo(23, 10), 3);
/// assert_eq!(modulo(-20, 10), 0);
/// ```
pub fn modulo(n: isize, m: usize) -> usize {
    assert_ne!(m, 0, "modulo by zero");
    // i128 holds every isize and usize, so neither the negation of
    // isize::MIN nor m > isize::MAX can overflow here.
    (n as i128).rem_euclid(m as i128) as usize
}

/// Single-bit selector for position `bit_idx % 8` within a byte.
///
/// Example: `bitmask(5) == 0b0010_0000`.
#[inline]
pub(crate) const fn bitmask(bit_idx: usize) -> u8 {
    1 << (bit_idx % 8)
}

pub(crate) const fn ones_mask(start_bit: usize, width: usize) -> u8 {
    if width >= 8 {
        // shift would overflow on u8
        !0u8
    } else {
        (1u8 << width).wrapping_sub(1) << start_bit
    }
}
