//! Property tests for the digest dispatch

use hashcalc_hashing::{compute_digest, compute_digest_with_flag, HashAlgorithm, HashError};
use proptest::prelude::*;

fn any_algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn digest_is_deterministic(input in any::<String>(), algorithm in any_algorithm()) {
        prop_assert_eq!(
            compute_digest(&input, algorithm),
            compute_digest(&input, algorithm)
        );
    }

    #[test]
    fn digest_is_64_lowercase_hex_chars(input in any::<String>(), algorithm in any_algorithm()) {
        let digest = compute_digest(&input, algorithm);
        prop_assert_eq!(digest.len(), 64);
        prop_assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn flag_and_enum_agree(input in any::<String>(), algorithm in any_algorithm()) {
        prop_assert_eq!(
            compute_digest_with_flag(&input, algorithm.flag()),
            Ok(compute_digest(&input, algorithm))
        );
    }

    #[test]
    fn unknown_flags_fail(
        input in any::<String>(),
        flag in any::<i64>().prop_filter("supported flag", |f| *f != 1 && *f != 2),
    ) {
        let rejected = matches!(
            compute_digest_with_flag(&input, flag),
            Err(HashError::InvalidAlgorithm { .. })
        );
        prop_assert!(rejected, "flag {} was accepted", flag);
    }

    #[test]
    fn single_character_change_changes_digest(
        prefix in "[a-z]{0,16}",
        suffix in "[a-z]{0,16}",
        algorithm in any_algorithm(),
    ) {
        let original = format!("{prefix}a{suffix}");
        let changed = format!("{prefix}b{suffix}");
        prop_assert_ne!(
            compute_digest(&original, algorithm),
            compute_digest(&changed, algorithm)
        );
    }

    #[test]
    fn algorithms_disagree(input in any::<String>()) {
        prop_assert_ne!(
            compute_digest(&input, HashAlgorithm::Sha256),
            compute_digest(&input, HashAlgorithm::Sha3_256)
        );
    }
}
