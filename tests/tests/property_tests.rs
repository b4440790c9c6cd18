//! Property-based tests across the public-key operations

use pkcrypt_api::EcdsaSignature;
use pkcrypt_algorithms::digest;
use pkcrypt_hybrid::kem::multi_key_combine;
use pkcrypt_kem::ecdh_x;
use pkcrypt_params::{Curve, EcdhXAlgorithm, HashAlgorithm};
use pkcrypt_sign::ecdsa;
use pkcrypt_tests::seeded_rng;
use proptest::prelude::*;

/// Session keys the key wrap accepts: a multiple of 8 bytes, at least 16
fn session_key() -> impl Strategy<Value = Vec<u8>> {
    (2usize..=8).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 8))
}

fn ecdh_x_algorithm() -> impl Strategy<Value = EcdhXAlgorithm> {
    prop_oneof![Just(EcdhXAlgorithm::X25519), Just(EcdhXAlgorithm::X448)]
}

fn curve() -> impl Strategy<Value = Curve> {
    prop_oneof![
        Just(Curve::NistP256),
        Just(Curve::NistP384),
        Just(Curve::NistP521),
        Just(Curve::Secp256k1),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ecdh_x_roundtrip(algo in ecdh_x_algorithm(), key in session_key(), seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let kp = ecdh_x::generate(algo, &mut rng).unwrap();

        let ct = ecdh_x::encrypt(algo, &key, &kp.public_key, &mut rng).unwrap();
        prop_assert_eq!(ct.wrapped_key.len(), key.len() + 8);

        let recovered = ecdh_x::decrypt(
            algo,
            &ct.ephemeral_public_key,
            &ct.wrapped_key,
            &kp.public_key,
            &kp.secret_key,
        )
        .unwrap();
        prop_assert_eq!(recovered.as_slice(), key.as_slice());
    }

    #[test]
    fn ecdsa_bit_flip_rejected(
        curve in curve(),
        message in prop::collection::vec(any::<u8>(), 0..64),
        bit in 0usize..256,
        seed in any::<u64>(),
    ) {
        let mut rng = seeded_rng(seed);
        let kp = ecdsa::generate(curve, &mut rng);
        let hash = HashAlgorithm::Sha256;
        let hashed = digest(hash, &message);

        let signature =
            ecdsa::sign(curve, hash, Some(message.as_slice()), &kp.public_key, &kp.secret_key, &hashed)
                .unwrap();
        prop_assert!(
            ecdsa::verify(curve, hash, &signature, Some(message.as_slice()), &kp.public_key, &hashed)
                .unwrap()
        );

        let mut r = signature.r.clone();
        let byte = (bit / 8) % r.len();
        r[byte] ^= 1 << (bit % 8);
        let flipped = EcdsaSignature { r, s: signature.s.clone() };
        prop_assert!(
            !ecdsa::verify(curve, hash, &flipped, Some(message.as_slice()), &kp.public_key, &hashed)
                .unwrap()
        );
    }

    #[test]
    fn combiner_binds_every_byte(
        ecc_share in prop::collection::vec(any::<u8>(), 32),
        ecc_ct in prop::collection::vec(any::<u8>(), 32),
        mlkem_share in prop::collection::vec(any::<u8>(), 32),
        mlkem_ct in prop::collection::vec(any::<u8>(), 1088),
        part in 0usize..4,
        position in any::<prop::sample::Index>(),
    ) {
        let base = multi_key_combine(&ecc_share, &ecc_ct, &mlkem_share, &mlkem_ct, &[35], 256)
            .unwrap();

        let mut parts = [ecc_share, ecc_ct, mlkem_share, mlkem_ct];
        let i = position.index(parts[part].len());
        parts[part][i] ^= 0x80;
        let changed =
            multi_key_combine(&parts[0], &parts[1], &parts[2], &parts[3], &[35], 256).unwrap();

        prop_assert_ne!(base.as_slice(), changed.as_slice());
    }
}
