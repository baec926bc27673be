//! Property coverage for checksums and reconstruction.

use proptest::prelude::*;

use relay_transfer::{checksum, reconstruct, Fragment, SequencedFragment, CHECKSUM_LENGTH};

proptest! {
    /// Every non-empty input renders at the fixed checksum width.
    #[test]
    fn checksum_width_is_fixed(input in ".{1,64}") {
        prop_assert_eq!(checksum(&input).len(), CHECKSUM_LENGTH);
    }

    /// Checksums are a pure function of the input.
    #[test]
    fn checksum_is_deterministic(input in ".{0,64}") {
        prop_assert_eq!(checksum(&input), checksum(&input));
    }

    /// Sealed fragments always verify: reconstruction of intact,
    /// sequenced fragments is clean and concatenates in order.
    #[test]
    fn intact_fragments_reconstruct_cleanly(parts in prop::collection::vec("[a-z]{0,8}", 0..12)) {
        let fragments: Vec<SequencedFragment> = parts
            .iter()
            .enumerate()
            .map(|(i, part)| SequencedFragment::new(i as u64, Fragment::sealed(part.clone())))
            .collect();

        let result = reconstruct(&fragments).unwrap();
        prop_assert!(result.is_clean());
        prop_assert_eq!(result.data, parts.concat());
    }

    /// Reconstruction is order-insensitive for sequenced fragments with
    /// distinct sequence numbers.
    #[test]
    fn arrival_order_does_not_matter(parts in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let forward: Vec<SequencedFragment> = parts
            .iter()
            .enumerate()
            .map(|(i, part)| SequencedFragment::new(i as u64, Fragment::sealed(part.clone())))
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = reconstruct(&forward).unwrap();
        let b = reconstruct(&reversed).unwrap();
        prop_assert_eq!(a.data, b.data);
    }
}
