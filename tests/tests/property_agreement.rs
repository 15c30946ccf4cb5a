//! Property-based tests for X25519 / X448 key agreement

use montdh::algorithms::{codec, CURVE25519, CURVE448};
use montdh::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn x25519_agreement(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let engine = X25519Engine::x25519();
        let pa = engine.derive_public_key(&a).unwrap();
        let pb = engine.derive_public_key(&b).unwrap();
        let ab = engine.compute_shared_secret(&a, pb.as_bytes()).unwrap();
        let ba = engine.compute_shared_secret(&b, pa.as_bytes()).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn x448_agreement(a in prop::collection::vec(any::<u8>(), 56), b in prop::collection::vec(any::<u8>(), 56)) {
        let engine = X448Engine::x448();
        let pa = engine.derive_public_key(&a).unwrap();
        let pb = engine.derive_public_key(&b).unwrap();
        let ab = engine.compute_shared_secret(&a, pb.as_bytes()).unwrap();
        let ba = engine.compute_shared_secret(&b, pa.as_bytes()).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn shared_secret_is_deterministic(k in any::<[u8; 32]>(), u in any::<[u8; 32]>()) {
        let engine = X25519Engine::x25519();
        let first = engine.compute_shared_secret(&k, &u).unwrap();
        let second = engine.compute_shared_secret(&k, &u).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clamp_is_idempotent(k in any::<[u8; 32]>(), k448 in prop::collection::vec(any::<u8>(), 56)) {
        let mut once = k;
        codec::clamp(&CURVE25519, &mut once);
        let mut twice = once;
        codec::clamp(&CURVE25519, &mut twice);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once[0] & 0x07, 0);
        prop_assert_eq!(once[31] & 0xC0, 0x40);

        let mut once = [0u8; 56];
        once.copy_from_slice(&k448);
        codec::clamp(&CURVE448, &mut once);
        let mut twice = once;
        codec::clamp(&CURVE448, &mut twice);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once[0] & 0x03, 0);
        prop_assert_eq!(once[55] & 0x80, 0x80);
    }

    #[test]
    fn little_endian_round_trip(v in any::<[u8; 32]>(), w in prop::collection::vec(any::<u8>(), 56)) {
        let limbs = codec::decode_little_endian(&CURVE25519, &v).unwrap();
        prop_assert_eq!(codec::encode_little_endian(&CURVE25519, &limbs), v);

        let limbs = codec::decode_little_endian(&CURVE448, &w).unwrap();
        prop_assert_eq!(&codec::encode_little_endian(&CURVE448, &limbs)[..], &w[..]);
    }

    #[test]
    fn zero_u_is_absorbing(k in any::<[u8; 32]>()) {
        let secret = montdh::x25519(k, [0u8; 32]);
        prop_assert_eq!(secret, [0u8; 32]);
    }

    #[test]
    fn top_bit_of_x25519_peer_is_ignored(k in any::<[u8; 32]>(), u in any::<[u8; 32]>()) {
        let mut high = u;
        high[31] |= 0x80;
        let mut low = u;
        low[31] &= 0x7F;
        prop_assert_eq!(montdh::x25519(k, high), montdh::x25519(k, low));
    }

    #[test]
    fn wrong_lengths_fail(len in 0usize..100) {
        prop_assume!(len != 32);
        let buf = vec![1u8; len];
        let engine = X25519Engine::x25519();
        let is_length_error = matches!(
            engine.derive_public_key(&buf),
            Err(Error::InvalidEncodingLength { expected: 32, .. })
        );
        prop_assert!(is_length_error);
        let is_length_error = matches!(
            engine.compute_shared_secret(&[1u8; 32], &buf),
            Err(Error::InvalidEncodingLength { expected: 32, .. })
        );
        prop_assert!(is_length_error);
    }
}
