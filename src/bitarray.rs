use crate::{Error, Result, bitmask, byte_count};
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::iter::{ExactSizeIterator, FusedIterator, Iterator};
use log::{debug, warn};

/// A fixed-size sequence of bits packed eight to a byte.
///
/// Bit `i` lives in byte `i / 8` at position `i % 8`, counted from the least
/// significant bit. The size is chosen at runtime and never changes.
///
/// Bits past `size()` in the last byte are never observed: iteration,
/// [`Debug`] and equality only look at the logical bits.
#[derive(Clone)]
pub struct BitArray {
    pub(crate) bit_sz: usize,
    pub(crate) buf: Vec<u8>,
}

impl BitArray {
    /// Creates a new bit array of `bit_sz` bits, all unset.
    ///
    /// Allocates exactly [`byte_count`]`(bit_sz)` bytes.
    ///
    /// # Errors
    /// Returns [`Error::Allocation`] if the buffer cannot be allocated. No
    /// partially built array is ever returned.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits = BitArray::new(10)?;
    /// assert_eq!(bits.size(), 10);
    /// assert_eq!(bits.as_bytes(), &[0, 0]);
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    pub fn new(bit_sz: usize) -> Result<Self> {
        let bytes = byte_count(bit_sz);
        let mut buf = Vec::new();
        if let Err(source) = buf.try_reserve_exact(bytes) {
            warn!("bit array allocation of {bytes} bytes failed: {source}");
            return Err(Error::Allocation { bytes, source });
        }
        buf.resize(bytes, 0);
        debug!("new bit array: {bit_sz} bits in {bytes} bytes");
        Ok(Self { bit_sz, buf })
    }

    /// Constructs a bit array from a boolean slice, where `true` means set
    /// and index 0 comes first.
    ///
    /// # Errors
    /// Returns [`Error::Allocation`] if the buffer cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bits(&[true, false, true])?;
    /// assert!(bits.get(0));
    /// assert!(!bits.get(1));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    pub fn from_bits(bits: &[bool]) -> Result<Self> {
        let mut array = Self::new(bits.len())?;
        for (idx, bit) in bits.iter().enumerate() {
            if *bit {
                array.set(idx, true);
            }
        }
        Ok(array)
    }

    /// Releases the array and its buffer.
    ///
    /// Equivalent to dropping it; an absent array (`None`) needs no release
    /// at all.
    #[inline]
    pub fn destroy(self) {
        debug!("releasing bit array of {} bits", self.bit_sz);
    }

    /// Returns the number of logical bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.bit_sz
    }

    /// Same as [`size`].
    ///
    /// [`size`]: BitArray::size
    #[inline]
    pub fn len(&self) -> usize {
        self.bit_sz
    }

    /// Returns `true` if the array holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_sz == 0
    }

    /// Returns the packed buffer, including the unused high bits of the
    /// last byte.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `idx >= size()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(8)?;
    /// bits.set(1, true);
    /// assert!(bits.get(1));
    /// assert!(!bits.get(0));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < self.bit_sz, "Bit index {idx} out of bounds");
        self.buf[idx / 8] & bitmask(idx) != 0
    }

    /// Sets the bit at the given index to `value`, leaving every other bit
    /// untouched.
    ///
    /// # Panics
    /// Panics if `idx >= size()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(8)?;
    /// bits.set(3, true);
    /// assert!(bits.get(3));
    /// bits.set(3, false);
    /// assert!(!bits.get(3));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize, value: bool) {
        assert!(idx < self.bit_sz, "Bit index {idx} out of bounds");
        let mask = bitmask(idx);
        let byte = &mut self.buf[idx / 8];
        *byte = (*byte & !mask) | if value { mask } else { 0 };
    }

    /// Overwrites the whole buffer, including the unused bits of the last
    /// byte, with pseudo-random data drawn one 64-bit word at a time.
    ///
    /// Meant for generating test and fuzz inputs. Pass a seeded generator to
    /// get reproducible contents.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let mut a = BitArray::new(100)?;
    /// let mut b = BitArray::new(100)?;
    /// a.random_fill(&mut fastrand::Rng::with_seed(7));
    /// b.random_fill(&mut fastrand::Rng::with_seed(7));
    /// assert_eq!(a, b);
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    #[cfg(feature = "rand")]
    pub fn random_fill(&mut self, rng: &mut fastrand::Rng) {
        for chunk in self.buf.chunks_mut(8) {
            let word = rng.u64(..).to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    /// Returns an iterator over all logical bits as `bool`, from index 0
    /// upwards.
    ///
    /// # Examples
    /// ```
    /// use light_bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bits(&[true, false, true, false])?;
    /// assert!(bits.iter().eq([true, false, true, false]));
    /// # Ok::<(), light_bitarray::Error>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> BitArrayIter<'_> {
        BitArrayIter {
            bytes: &self.buf,
            bit_sz: self.bit_sz,
            idx: 0,
        }
    }

    #[inline]
    pub(crate) fn assert_range(&self, start: usize, len: usize) {
        assert!(start <= self.bit_sz, "Range start {start} out of bounds");
        match start.checked_add(len) {
            Some(end) => assert!(end <= self.bit_sz, "Range end {end} out of bounds"),
            None => panic!("Range end {start} + {len} out of bounds"),
        }
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        if self.bit_sz != other.bit_sz {
            return false;
        }
        let full = self.bit_sz / 8;
        if self.buf[..full] != other.buf[..full] {
            return false;
        }
        let rest = self.bit_sz % 8;
        rest == 0 || {
            let mask = crate::ones_mask(0, rest);
            self.buf[full] & mask == other.buf[full] & mask
        }
    }
}

impl Eq for BitArray {}

impl<'array> IntoIterator for &'array BitArray {
    type Item = bool;
    type IntoIter = BitArrayIter<'array>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % 8 == 7 && i + 1 < self.bit_sz {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Iterator over the logical bits of a [`BitArray`] as `bool` values.
///
/// Returned by [`BitArray::iter()`].
#[derive(Clone, Copy)]
pub struct BitArrayIter<'array> {
    bytes: &'array [u8],
    bit_sz: usize,
    idx: usize,
}

impl Iterator for BitArrayIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.bit_sz {
            return None;
        }
        let bit = self.bytes[self.idx / 8] & bitmask(self.idx) != 0;
        self.idx += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bit_sz - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BitArrayIter<'_> {}

impl FusedIterator for BitArrayIter<'_> {}
