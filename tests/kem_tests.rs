//! Integration tests for key agreement and Key Encapsulation Mechanisms

#![cfg(feature = "traditional")]

use pkcrypt::prelude::*;
use rand::rngs::OsRng;

#[test]
fn test_ecdh_x_session_key() {
    let mut rng = OsRng;

    for algo in EcdhXAlgorithm::ALL {
        // Generate the recipient's keypair
        let kp = ecdh_x::generate(algo, &mut rng).unwrap();

        // Wrap a session key to the recipient
        let session_key = [0x0Fu8; 24];
        let ct = ecdh_x::encrypt(algo, &session_key, &kp.public_key, &mut rng).unwrap();
        assert_eq!(ct.ephemeral_public_key.len(), ecdh_x::payload_size(algo));

        // Unwrap it again
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
fn test_ecdh_x_rejects_tampered_wrap() {
    let mut rng = OsRng;
    let algo = EcdhXAlgorithm::X25519;
    let kp = ecdh_x::generate(algo, &mut rng).unwrap();

    let mut ct = ecdh_x::encrypt(algo, &[1u8; 16], &kp.public_key, &mut rng).unwrap();
    ct.wrapped_key[5] ^= 0x40;

    let result = ecdh_x::decrypt(
        algo,
        &ct.ephemeral_public_key,
        &ct.wrapped_key,
        &kp.public_key,
        &kp.secret_key,
    );
    assert!(matches!(result, Err(Error::UnwrapIntegrity { .. })));
}

#[test]
fn test_ecdh_x_shared_secret_is_symmetric() {
    let mut rng = OsRng;
    let algo = EcdhXAlgorithm::X448;
    let alice = ecdh_x::generate(algo, &mut rng).unwrap();
    let bob = ecdh_x::generate(algo, &mut rng).unwrap();

    let ab = ecdh_x::get_shared_secret(algo, &alice.secret_key, &bob.public_key).unwrap();
    let ba = ecdh_x::get_shared_secret(algo, &bob.secret_key, &alice.public_key).unwrap();
    assert_eq!(ab.as_slice(), ba.as_slice());
}

#[cfg(feature = "post-quantum")]
#[test]
fn test_mlkem_kem() {
    fn round_trip<K: Kem>() {
        let mut rng = OsRng;

        // Generate keypair
        let kp = K::keypair(&mut rng).unwrap();

        // Encapsulate
        let (ciphertext, shared_secret_sender) = K::encapsulate(&mut rng, &kp.public_key).unwrap();

        // Decapsulate
        let shared_secret_recipient =
            K::decapsulate(&ciphertext, &kp.secret_key, &kp.public_key).unwrap();

        // Verify shared secrets match
        assert_eq!(
            shared_secret_sender.as_slice(),
            shared_secret_recipient.as_slice()
        );
    }

    round_trip::<MlKem768>();
    round_trip::<MlKem1024>();
}

#[test]
fn test_facade_reexports_rng_and_zeroize() {
    use pkcrypt::rand::rngs::OsRng as FacadeRng;
    use pkcrypt::zeroize::Zeroizing;

    let algo = EcdhXAlgorithm::X25519;
    let kp = ecdh_x::generate(algo, &mut FacadeRng).unwrap();
    let ct = ecdh_x::encrypt(algo, &[7u8; 16], &kp.public_key, &mut FacadeRng).unwrap();

    let recovered: Zeroizing<Vec<u8>> = ecdh_x::decrypt(
        algo,
        &ct.ephemeral_public_key,
        &ct.wrapped_key,
        &kp.public_key,
        &kp.secret_key,
    )
    .unwrap();
    assert_eq!(recovered.as_slice(), &[7u8; 16]);
}
