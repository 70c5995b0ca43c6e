use light_bitarray::BitArray;
use proptest::prelude::*;

/// Bits plus an in-bounds `(offset, length)` sub-range.
fn bits_and_range() -> impl Strategy<Value = (Vec<bool>, usize, usize)> {
    prop::collection::vec(any::<bool>(), 1..200).prop_flat_map(|bits| {
        let size = bits.len();
        (Just(bits), 0..=size).prop_flat_map(move |(bits, offset)| {
            (Just(bits), Just(offset), 0..=size - offset)
        })
    })
}

/// Bits plus an inclusive `[left, right]` range.
fn bits_and_inclusive_range() -> impl Strategy<Value = (Vec<bool>, usize, usize)> {
    prop::collection::vec(any::<bool>(), 1..200).prop_flat_map(|bits| {
        let size = bits.len();
        (Just(bits), 0..size).prop_flat_map(move |(bits, left)| {
            (Just(bits), Just(left), left..size)
        })
    })
}

fn naive_rotate(bits: &mut [bool], right_amount: isize) {
    if bits.is_empty() {
        return;
    }
    let right = right_amount.rem_euclid(bits.len() as isize) as usize;
    bits.rotate_right(right);
}

proptest! {
    #[test]
    fn set_then_get_returns_value(
        bits in prop::collection::vec(any::<bool>(), 1..100),
        idx_seed in any::<usize>(),
        value in any::<bool>(),
    ) {
        let idx = idx_seed % bits.len();
        let mut array = BitArray::from_bits(&bits).unwrap();
        array.set(idx, value);

        let mut expected = bits.clone();
        expected[idx] = value;
        prop_assert!(array.iter().eq(expected));
    }

    #[test]
    fn rotate_matches_naive((bits, offset, length) in bits_and_range(), amount in -500isize..500) {
        let mut array = BitArray::from_bits(&bits).unwrap();
        array.rotate(offset, length, amount);

        let mut expected = bits.clone();
        naive_rotate(&mut expected[offset..offset + length], amount);
        prop_assert!(array.iter().eq(expected));
    }

    #[test]
    fn rotate_then_inverse_restores((bits, offset, length) in bits_and_range(), amount in any::<isize>()) {
        prop_assume!(amount != isize::MIN);
        let original = BitArray::from_bits(&bits).unwrap();
        let mut array = original.clone();
        array.rotate(offset, length, amount);
        array.rotate(offset, length, -amount);
        prop_assert_eq!(array, original);
    }

    #[test]
    fn rotations_compose((bits, offset, length) in bits_and_range(), a in -300isize..300, b in -300isize..300) {
        prop_assume!(length > 0);
        let mut twice = BitArray::from_bits(&bits).unwrap();
        twice.rotate(offset, length, a);
        twice.rotate(offset, length, b);

        let mut once = BitArray::from_bits(&bits).unwrap();
        once.rotate(offset, length, (a + b).rem_euclid(length as isize));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn rotate_by_multiple_of_length_is_noop((bits, offset, length) in bits_and_range(), k in -4isize..4) {
        let original = BitArray::from_bits(&bits).unwrap();
        let mut array = original.clone();
        array.rotate(offset, length, k * length as isize);
        prop_assert_eq!(array, original);
    }

    #[test]
    fn rotate_by_length_minus_one((bits, offset, length) in bits_and_range()) {
        prop_assume!(length > 1);
        let amount = length as isize - 1;
        let mut array = BitArray::from_bits(&bits).unwrap();
        array.rotate(offset, length, amount);

        let mut expected = bits.clone();
        naive_rotate(&mut expected[offset..offset + length], amount);
        prop_assert!(array.iter().eq(expected));
    }

    #[test]
    fn reverse_matches_naive((bits, left, right) in bits_and_inclusive_range()) {
        let mut array = BitArray::from_bits(&bits).unwrap();
        array.reverse(left, right);

        let mut expected = bits.clone();
        expected[left..=right].reverse();
        prop_assert!(array.iter().eq(expected));
    }

    #[test]
    fn reverse_is_involution((bits, left, right) in bits_and_inclusive_range()) {
        let original = BitArray::from_bits(&bits).unwrap();
        let mut array = original.clone();
        array.reverse(left, right);
        array.reverse(left, right);
        prop_assert_eq!(array, original);
    }

    #[test]
    fn reverse_within_one_byte(byte in any::<u8>(), left in 0usize..8, span in 0usize..8) {
        let right = (left + span).min(7);
        let bits: Vec<bool> = (0..8).map(|i| byte & (1 << i) != 0).collect();
        let mut array = BitArray::from_bits(&bits).unwrap();
        array.reverse(left, right);

        let mut expected = bits.clone();
        expected[left..=right].reverse();
        prop_assert!(array.iter().eq(expected));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn reverse_leaves_random_fill_outside_range(seed in any::<u64>(), size in 1usize..150, a in any::<usize>(), b in any::<usize>()) {
        let (left, right) = {
            let (x, y) = (a % size, b % size);
            (x.min(y), x.max(y))
        };
        let mut array = BitArray::new(size).unwrap();
        array.random_fill(&mut fastrand::Rng::with_seed(seed));
        let before: Vec<bool> = array.iter().collect();
        let tail_byte = *array.as_bytes().last().unwrap();

        array.reverse(left, right);
        let after: Vec<bool> = array.iter().collect();
        prop_assert_eq!(&after[..left], &before[..left]);
        prop_assert_eq!(&after[right + 1..], &before[right + 1..]);

        // the don't-care bits past the end are never written
        let unused = !(((1u16 << (size % 8)) - 1) as u8);
        if size % 8 != 0 {
            prop_assert_eq!(array.as_bytes().last().unwrap() & unused, tail_byte & unused);
        }
    }
}
