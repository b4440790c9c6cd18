//! Cross-crate flows: identifiers parsed from OpenPGP octets driving the
//! component operations

use pkcrypt_algorithms::digest;
use pkcrypt_api::Error;
use pkcrypt_hybrid::kem as composite;
use pkcrypt_kem::ecdh_x;
use pkcrypt_params::{CompositeKemAlgorithm, Curve, EcdhXAlgorithm, HashAlgorithm, MlDsaAlgorithm};
use pkcrypt_sign::{ecdsa, ml_dsa};
use pkcrypt_tests::seeded_rng;

#[test]
fn test_identifiers_from_octets() {
    assert_eq!(EcdhXAlgorithm::try_from(25).unwrap(), EcdhXAlgorithm::X25519);
    assert_eq!(EcdhXAlgorithm::try_from(26).unwrap(), EcdhXAlgorithm::X448);
    assert_eq!(
        CompositeKemAlgorithm::try_from(35).unwrap(),
        CompositeKemAlgorithm::MlKem768X25519
    );
    assert_eq!(MlDsaAlgorithm::try_from(31).unwrap(), MlDsaAlgorithm::MlDsa87);
    assert_eq!(HashAlgorithm::try_from(10).unwrap(), HashAlgorithm::Sha512);

    assert!(matches!(
        EcdhXAlgorithm::try_from(18),
        Err(Error::UnsupportedAlgorithm { .. })
    ));
    assert!(matches!(
        HashAlgorithm::try_from(2),
        Err(Error::UnsupportedAlgorithm { .. })
    ));
}

#[test]
fn test_ecdh_x_session_key_for_each_octet() {
    let mut rng = seeded_rng(1);
    let session_key = [0xA5u8; 32];

    for id in [25u8, 26] {
        let algo = EcdhXAlgorithm::try_from(id).unwrap();
        let kp = ecdh_x::generate(algo, &mut rng).unwrap();
        let ct = ecdh_x::encrypt(algo, &session_key, &kp.public_key, &mut rng).unwrap();
        let recovered = ecdh_x::decrypt(
            algo,
            &ct.ephemeral_public_key,
            &ct.wrapped_key,
            &kp.public_key,
            &kp.secret_key,
        )
        .unwrap();
        assert_eq!(recovered.as_slice(), &session_key);
    }
}

#[test]
fn test_composite_session_key_for_each_octet() {
    let mut rng = seeded_rng(2);
    let session_key = [0x3Cu8; 16];

    for id in [35u8, 36] {
        let algo = CompositeKemAlgorithm::try_from(id).unwrap();
        let kp = composite::generate(algo, &mut rng).unwrap();
        assert!(composite::validate_params(
            algo,
            &kp.ecc.public_key,
            &kp.ecc.secret_key,
            &kp.mlkem.public_key,
            &kp.mlkem.secret_key,
        ));

        let ct = composite::encrypt(
            algo,
            &kp.ecc.public_key,
            &kp.mlkem.public_key,
            &session_key,
            &mut rng,
        )
        .unwrap();
        let recovered = composite::decrypt(
            algo,
            &ct.ecc_ciphertext,
            &ct.mlkem_ciphertext,
            &kp.ecc.secret_key,
            &kp.ecc.public_key,
            &kp.mlkem.secret_key,
            &ct.wrapped_key,
        )
        .unwrap();
        assert_eq!(recovered.as_slice(), &session_key);
    }
}

#[test]
fn test_composite_ecc_key_is_an_ecdh_x_key() {
    let mut rng = seeded_rng(3);
    let kp = composite::generate(CompositeKemAlgorithm::MlKem768X25519, &mut rng).unwrap();
    assert!(ecdh_x::validate_params(
        EcdhXAlgorithm::X25519,
        &kp.ecc.public_key,
        &kp.ecc.secret_key
    ));
}

#[test]
fn test_signatures_over_one_digest() {
    let mut rng = seeded_rng(4);
    let message = b"signed by both engines";

    let hash = HashAlgorithm::Sha384;
    let hashed = digest(hash, message);

    let ec = ecdsa::generate(Curve::NistP384, &mut rng);
    let signature = ecdsa::sign(
        Curve::NistP384,
        hash,
        Some(&message[..]),
        &ec.public_key,
        &ec.secret_key,
        &hashed,
    )
    .unwrap();
    assert!(ecdsa::verify(Curve::NistP384, hash, &signature, None, &ec.public_key, &hashed)
        .unwrap());
    assert!(ecdsa::validate_params(Curve::NistP384, &ec.public_key, &ec.secret_key, &mut rng));

    let pq = ml_dsa::generate(MlDsaAlgorithm::MlDsa65, &mut rng).unwrap();
    let pq_signature = ml_dsa::sign(MlDsaAlgorithm::MlDsa65, &pq.secret_key, &hashed).unwrap();
    assert!(ml_dsa::verify(MlDsaAlgorithm::MlDsa65, &pq.public_key, &hashed, &pq_signature)
        .unwrap());
    assert!(ml_dsa::validate_params(
        MlDsaAlgorithm::MlDsa65,
        &pq.public_key,
        &pq.secret_key,
        &mut rng
    ));
}

#[test]
fn test_validation_answers_false_for_mismatched_keys() {
    let mut rng = seeded_rng(5);

    let a = ecdsa::generate(Curve::Secp256k1, &mut rng);
    let b = ecdsa::generate(Curve::Secp256k1, &mut rng);
    assert!(!ecdsa::validate_params(Curve::Secp256k1, &b.public_key, &a.secret_key, &mut rng));

    let a = ecdh_x::generate(EcdhXAlgorithm::X448, &mut rng).unwrap();
    let b = ecdh_x::generate(EcdhXAlgorithm::X448, &mut rng).unwrap();
    assert!(!ecdh_x::validate_params(EcdhXAlgorithm::X448, &b.public_key, &a.secret_key));

    let a = ml_dsa::generate(MlDsaAlgorithm::MlDsa87, &mut rng).unwrap();
    let b = ml_dsa::generate(MlDsaAlgorithm::MlDsa87, &mut rng).unwrap();
    assert!(!ml_dsa::validate_params(
        MlDsaAlgorithm::MlDsa87,
        &b.public_key,
        &a.secret_key,
        &mut rng
    ));
}
