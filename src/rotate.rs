use crate::{BitArray, modulo};
use log::trace;

impl BitArray {
    /// Rotates the bits in `offset..offset + length` by `right_amount`
    /// positions. Positive amounts rotate right, towards higher bit indices;
    /// negative amounts rotate left. Bits pushed off one end of the range
    /// re-enter at the other; bits outside the range are untouched.
    ///
    /// Any multiple of `length` is a no-op. Runs in O(`length`) with no
    /// extra allocation.
    ///
    /// # Panics
    /// Panics if `offset + length > size()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bits(&[true, false, false, true, true])?;
    /// bits.rotate(1, 4, 1);
    /// assert!(bits.iter().eq([true, true, false, false, true]));
    /// bits.rotate(1, 4, -1);
    /// assert!(bits.iter().eq([true, false, false, true, true]));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    pub fn rotate(&mut self, offset: usize, length: usize, right_amount: isize) {
        self.assert_range(offset, length);
        if length == 0 {
            return;
        }
        // left rotation equivalent of -right_amount, reduced into 0..length
        let left_amount = (length - modulo(right_amount, length)) % length;
        self.rotate_by_reversal(offset, length, left_amount);
    }

    /// Rotates the bits in `offset..offset + length` left by `amount`
    /// positions, towards lower bit indices.
    ///
    /// # Panics
    /// Panics if `offset + length > size()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bits(&[true, false, false, false])?;
    /// bits.rotate_left(0, 4, 1);
    /// assert!(bits.iter().eq([false, false, false, true]));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    pub fn rotate_left(&mut self, offset: usize, length: usize, amount: usize) {
        self.assert_range(offset, length);
        if length == 0 {
            return;
        }
        self.rotate_by_reversal(offset, length, amount % length);
    }

    /// Rotates the bits in `offset..offset + length` right by `amount`
    /// positions, towards higher bit indices.
    ///
    /// # Panics
    /// Panics if `offset + length > size()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bits(&[true, false, false, false])?;
    /// bits.rotate_right(0, 4, 1);
    /// assert!(bits.iter().eq([false, true, false, false]));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    pub fn rotate_right(&mut self, offset: usize, length: usize, amount: usize) {
        self.assert_range(offset, length);
        if length == 0 {
            return;
        }
        self.rotate_by_reversal(offset, length, (length - amount % length) % length);
    }

    /// Left-rotates `offset..offset + length` by `left_amount < length`:
    /// reverse the first `left_amount` bits, reverse the rest, then reverse
    /// the whole range.
    fn rotate_by_reversal(&mut self, offset: usize, length: usize, left_amount: usize) {
        debug_assert!(left_amount < length);
        if left_amount == 0 {
            return;
        }
        let l = offset;
        let m = offset + left_amount;
        let r = offset + length - 1;
        trace!("rotate [{l}, {r}] left by {left_amount}");
        self.reverse_range(l, m - 1);
        self.reverse_range(m, r);
        self.reverse_range(l, r);
    }
}
