//! In-place reversal of an inclusive bit range.
//!
//! The range is consumed from both ends at once. Each step swaps two
//! mirrored fields of up to 8 bits, bit-reversing each one, so the bulk of
//! the range moves a byte per step instead of a bit per step. Two cases
//! finish early:
//!
//! - whatever is left lies inside one byte (`reverse_short`)
//! - whatever is left is a run of whole bytes (`reverse_bytes`)
//!
//! The first step is sized to bring the left cursor onto a byte boundary,
//! which makes every later left-hand read a whole byte.

use crate::{BitArray, ones_mask};
use log::trace;

/// Reverses the low `width` bits of `field`; higher bits must be zero.
#[inline]
pub(crate) const fn reverse_field(field: u8, width: usize) -> u8 {
    field.reverse_bits() >> (8 - width)
}

impl BitArray {
    /// Reverses the bits in the inclusive range `[left, right]` in place.
    ///
    /// Bits outside the range are left untouched. Applying the same reversal
    /// twice restores the original contents.
    ///
    /// # Panics
    /// Panics if `left > right` or `right >= size()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bits(&[true, true, false, true, false, false, true, false])?;
    /// bits.reverse(2, 5);
    /// assert!(bits.iter().eq([true, true, false, false, true, false, true, false]));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    pub fn reverse(&mut self, left: usize, right: usize) {
        assert!(left <= right, "Range start {left} past range end {right}");
        assert!(right < self.bit_sz, "Range end {right} out of bounds");
        self.reverse_range(left, right);
    }

    /// Reverses `[left, right]` without bounds checks beyond slice indexing.
    /// An empty or single-bit range is a no-op.
    pub(crate) fn reverse_range(&mut self, mut left: usize, mut right: usize) {
        while left < right {
            if left / 8 == right / 8 {
                trace!("reverse [{left}, {right}]: single byte");
                self.reverse_short(left, right);
                return;
            }
            if left % 8 == 0 && right % 8 == 7 {
                trace!("reverse [{left}, {right}]: whole bytes");
                self.reverse_bytes(left / 8, right / 8);
                return;
            }
            let remaining = right - left + 1;
            let width = (8 - left % 8).min(remaining / 2);
            self.swap_mirrored(left, right + 1 - width, width);
            left += width;
            right -= width;
        }
    }

    /// Reverses `[left, right]` where both ends share one byte. The byte is
    /// read once and written once.
    pub(crate) fn reverse_short(&mut self, left: usize, right: usize) {
        debug_assert_eq!(left / 8, right / 8);
        let width = right - left + 1;
        let field = self.read_field(left, width);
        self.write_field(left, width, reverse_field(field, width));
    }

    /// Reverses the whole bytes `first..=last`: bytes are swapped pairwise
    /// from the outside in and each one has its own bits reversed.
    pub(crate) fn reverse_bytes(&mut self, first: usize, last: usize) {
        let (mut i, mut j) = (first, last);
        while i < j {
            let tmp = self.buf[i];
            self.buf[i] = self.buf[j].reverse_bits();
            self.buf[j] = tmp.reverse_bits();
            i += 1;
            j -= 1;
        }
        // odd byte count leaves a middle byte that only needs its bits flipped
        if i == j {
            self.buf[i] = self.buf[i].reverse_bits();
        }
    }

    /// Exchanges the `width`-bit fields at `lo` and `hi`, reversing each.
    /// The fields must not overlap.
    fn swap_mirrored(&mut self, lo: usize, hi: usize, width: usize) {
        debug_assert!(lo + width <= hi);
        let low = self.read_field(lo, width);
        let high = self.read_field(hi, width);
        self.write_field(lo, width, reverse_field(high, width));
        self.write_field(hi, width, reverse_field(low, width));
    }

    /// Reads `width` (1..=8) bits starting at bit `pos`, bit `pos` ending up
    /// in the least significant position. May straddle two bytes.
    #[inline]
    pub(crate) fn read_field(&self, pos: usize, width: usize) -> u8 {
        debug_assert!((1..=8).contains(&width));
        let (byte, offset) = (pos / 8, pos % 8);
        let mut raw = self.buf[byte] as u16;
        if offset + width > 8 {
            raw |= (self.buf[byte + 1] as u16) << 8;
        }
        (raw >> offset) as u8 & ones_mask(0, width)
    }

    /// Writes the low `width` (1..=8) bits of `value` starting at bit `pos`.
    /// All other bits of the touched bytes are preserved.
    #[inline]
    pub(crate) fn write_field(&mut self, pos: usize, width: usize, value: u8) {
        debug_assert!((1..=8).contains(&width));
        let (byte, offset) = (pos / 8, pos % 8);
        let mask = (ones_mask(0, width) as u16) << offset;
        let bits = ((value as u16) << offset) & mask;
        self.buf[byte] = (self.buf[byte] & !(mask as u8)) | bits as u8;
        if offset + width > 8 {
            let high_mask = (mask >> 8) as u8;
            self.buf[byte + 1] = (self.buf[byte + 1] & !high_mask) | (bits >> 8) as u8;
        }
    }
}
