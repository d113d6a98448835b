use proptest::prelude::*;

use slr_primitives::base58;
use slr_primitives::hash::{checksum, sha256d, CHECKSUM_LEN};

const BASE58_STRING: &str = "[1-9A-HJ-NP-Za-km-z]{0,64}";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn decode_never_emits_spurious_leading_zero(s in BASE58_STRING) {
        let decoded = base58::decode(&s).unwrap();
        let zero_symbols = s.chars().take_while(|&c| c == '1').count();
        let zero_bytes = decoded.iter().take_while(|&&b| b == 0).count();
        prop_assert_eq!(zero_symbols, zero_bytes);
    }

    #[test]
    fn check_encode_decode_roundtrip(
        zeros in 0usize..4,
        body in prop::collection::vec(any::<u8>(), 0..40)
    ) {
        let mut payload = vec![0u8; zeros];
        payload.extend_from_slice(&body);

        let encoded = base58::check_encode(&payload);
        let raw = base58::decode(&encoded).unwrap();
        prop_assert_eq!(raw.len(), payload.len() + CHECKSUM_LEN);
        prop_assert_eq!(&raw[..payload.len()], &payload[..]);
        prop_assert_eq!(&raw[payload.len()..], &checksum(&payload)[..]);
        prop_assert_eq!(base58::check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn foreign_character_is_rejected(
        prefix in BASE58_STRING,
        bad in "[0OIl!@ +/]",
        suffix in BASE58_STRING
    ) {
        let s = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(base58::decode(&s).is_err());
    }

    #[test]
    fn checksum_is_sha256d_prefix(data in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(&checksum(&data)[..], &sha256d(&data)[..CHECKSUM_LEN]);
    }
}
