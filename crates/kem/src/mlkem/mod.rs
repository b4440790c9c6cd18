// File: crates/kem/src/mlkem/mod.rs
//! ML-KEM (FIPS 203) behind a lazily verified handle
//!
//! Keys and ciphertexts use the FIPS 203 byte encodings; the secret key is
//! the expanded decapsulation key. Every parameter set is guarded by a
//! [`LazyPrimitive`]: the first operation runs a generate / encapsulate /
//! decapsulate consistency check, and a failed check disables the parameter
//! set for the rest of the process.

use ml_kem::kem::{Decapsulate, Encapsulate};
use ml_kem::{Ciphertext, Encoded, EncodedSizeUser, KemCore};
use pkcrypt_algorithms::{digest, LazyPrimitive};
use pkcrypt_api::{Error, Kem, KeyPair, Result};
use pkcrypt_params::{HashAlgorithm, MlKemDescriptor, MLKEM1024, MLKEM768};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

pub static ML_KEM_768: LazyPrimitive =
    LazyPrimitive::new("ML-KEM-768", self_test::<ml_kem::MlKem768>);
pub static ML_KEM_1024: LazyPrimitive =
    LazyPrimitive::new("ML-KEM-1024", self_test::<ml_kem::MlKem1024>);

fn self_test<K: KemCore>() -> bool {
    let mut rng = OsRng;
    let (dk, ek) = K::generate(&mut rng);
    let Ok((ct, sent)) = ek.encapsulate(&mut rng) else {
        return false;
    };
    match dk.decapsulate(&ct) {
        Ok(received) => bool::from(sent.as_slice().ct_eq(received.as_slice())),
        Err(_) => false,
    }
}

/// The decapsulation key is `dk_pke || ek || H(ek) || z`
fn embeds_public_key(descriptor: &MlKemDescriptor, public_key: &[u8], secret_key: &[u8]) -> bool {
    if public_key.len() != descriptor.public_key_size
        || secret_key.len() != descriptor.secret_key_size
    {
        tracing::debug!(
            parameter_set = descriptor.name,
            "ML-KEM parameter validation failed: wrong key length"
        );
        return false;
    }

    let offset = descriptor.secret_key_size - descriptor.public_key_size - 64;
    let embedded = &secret_key[offset..offset + descriptor.public_key_size];
    let embedded_hash = &secret_key[offset + descriptor.public_key_size..][..32];

    let key_matches = embedded.ct_eq(public_key);
    let hash_matches = digest(HashAlgorithm::Sha3_256, public_key)
        .as_slice()
        .ct_eq(embedded_hash);
    (key_matches & hash_matches).into()
}

fn malformed(descriptor: &MlKemDescriptor, what: &str) -> Error {
    Error::InvalidKey {
        context: descriptor.name,
        message: format!("malformed {what}"),
    }
}

fn keypair<K: KemCore, R: CryptoRng + RngCore>(rng: &mut R) -> KeyPair {
    let (dk, ek) = K::generate(rng);
    let mut encoded = dk.as_bytes();
    let secret_key = encoded.to_vec();
    encoded.as_mut_slice().zeroize();
    KeyPair::new(ek.as_bytes().to_vec(), secret_key)
}

fn encapsulation_key<K: KemCore>(
    descriptor: &MlKemDescriptor,
    public_key: &[u8],
) -> Result<K::EncapsulationKey> {
    Error::check_length(descriptor.name, descriptor.public_key_size, public_key.len())?;
    let encoded = Encoded::<K::EncapsulationKey>::try_from(public_key)
        .map_err(|_| malformed(descriptor, "public key"))?;
    Ok(K::EncapsulationKey::from_bytes(&encoded))
}

fn decapsulation_key<K: KemCore>(
    descriptor: &MlKemDescriptor,
    secret_key: &[u8],
) -> Result<K::DecapsulationKey> {
    Error::check_length(descriptor.name, descriptor.secret_key_size, secret_key.len())?;
    let mut encoded = Encoded::<K::DecapsulationKey>::try_from(secret_key)
        .map_err(|_| malformed(descriptor, "secret key"))?;
    let dk = K::DecapsulationKey::from_bytes(&encoded);
    encoded.as_mut_slice().zeroize();
    Ok(dk)
}

fn encapsulate<K: KemCore, R: CryptoRng + RngCore>(
    descriptor: &MlKemDescriptor,
    rng: &mut R,
    public_key: &[u8],
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let ek = encapsulation_key::<K>(descriptor, public_key)?;
    let (ct, shared) = ek.encapsulate(rng).map_err(|_| Error::InvalidKey {
        context: descriptor.name,
        message: "encapsulation failed".into(),
    })?;
    Ok((ct.to_vec(), Zeroizing::new(shared.to_vec())))
}

fn decapsulate<K: KemCore>(
    descriptor: &MlKemDescriptor,
    ciphertext: &[u8],
    secret_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    Error::check_length(descriptor.name, descriptor.ciphertext_size, ciphertext.len())?;
    let ct =
        Ciphertext::<K>::try_from(ciphertext).map_err(|_| malformed(descriptor, "ciphertext"))?;
    let dk = decapsulation_key::<K>(descriptor, secret_key)?;
    // Implicit rejection: a forged ciphertext yields an unrelated key
    let shared = dk.decapsulate(&ct).map_err(|_| Error::InvalidKey {
        context: descriptor.name,
        message: "decapsulation failed".into(),
    })?;
    Ok(Zeroizing::new(shared.to_vec()))
}

macro_rules! ml_kem_provider {
    ($name:ident, $inner:ty, $handle:ident, $descriptor:ident) => {
        #[doc = concat!("The ", stringify!($descriptor), " parameter set")]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $name {
            /// Check that `public_key` is the encapsulation key embedded in
            /// `secret_key`
            pub fn validate_params(public_key: &[u8], secret_key: &[u8]) -> bool {
                embeds_public_key(&$descriptor, public_key, secret_key)
            }
        }

        impl Kem for $name {
            const PUBLIC_KEY_LEN: usize = $descriptor.public_key_size;
            const SECRET_KEY_LEN: usize = $descriptor.secret_key_size;
            const CIPHERTEXT_LEN: usize = $descriptor.ciphertext_size;

            fn name() -> &'static str {
                $descriptor.name
            }

            fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<KeyPair> {
                $handle.acquire()?;
                Ok(keypair::<$inner, R>(rng))
            }

            fn encapsulate<R: CryptoRng + RngCore>(
                rng: &mut R,
                public_key: &[u8],
            ) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
                $handle.acquire()?;
                encapsulate::<$inner, R>(&$descriptor, rng, public_key)
            }

            fn decapsulate(
                ciphertext: &[u8],
                secret_key: &[u8],
                _public_key: &[u8],
            ) -> Result<Zeroizing<Vec<u8>>> {
                $handle.acquire()?;
                decapsulate::<$inner>(&$descriptor, ciphertext, secret_key)
            }
        }
    };
}

ml_kem_provider!(MlKem768, ml_kem::MlKem768, ML_KEM_768, MLKEM768);
ml_kem_provider!(MlKem1024, ml_kem::MlKem1024, ML_KEM_1024, MLKEM1024);
