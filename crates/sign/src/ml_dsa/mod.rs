// File: crates/sign/src/ml_dsa/mod.rs
//! ML-DSA (FIPS 204) signatures
//!
//! The message handed to these functions is the caller's digest; choosing
//! the hash stays outside. Signing uses the empty context string and the
//! hedged (randomised) variant.
//!
//! Each parameter set sits behind a [`LazyPrimitive`] that runs a
//! sign / verify consistency check on first use.

use crate::error::rejected;
use fips204::traits::{KeyGen, SerDes, Signer, Verifier};
use fips204::{ml_dsa_65, ml_dsa_87};
use pkcrypt_algorithms::{random_bytes, LazyPrimitive};
use pkcrypt_api::{Error, KeyPair, Result, Signature};
use pkcrypt_params::pqc::mldsa::{MLDSA65, MLDSA87};
use pkcrypt_params::MlDsaAlgorithm;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

const SELF_TEST_MESSAGE: &[u8] = b"ML-DSA pairwise consistency";

macro_rules! ml_dsa_scheme {
    ($name:ident, $module:ident, $handle:ident, $descriptor:ident) => {
        #[doc = concat!("The ", stringify!($descriptor), " parameter set")]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        pub static $handle: LazyPrimitive = LazyPrimitive::new($descriptor.name, $name::self_test);

        impl $name {
            fn self_test() -> bool {
                let Ok((pk, sk)) = $module::KG::try_keygen() else {
                    return false;
                };
                match sk.try_sign(SELF_TEST_MESSAGE, &[]) {
                    Ok(signature) => pk.verify(SELF_TEST_MESSAGE, &signature, &[]),
                    Err(_) => false,
                }
            }

            fn public_key(public_key: &[u8]) -> Result<$module::PublicKey> {
                let bytes: [u8; $module::PK_LEN] =
                    public_key.try_into().map_err(|_| Error::InvalidLength {
                        context: $descriptor.name,
                        expected: $module::PK_LEN,
                        actual: public_key.len(),
                    })?;
                $module::PublicKey::try_from_bytes(bytes).map_err(rejected($descriptor.name))
            }

            fn private_key(secret_key: &[u8]) -> Result<$module::PrivateKey> {
                let bytes: Zeroizing<[u8; $module::SK_LEN]> =
                    Zeroizing::new(secret_key.try_into().map_err(|_| Error::InvalidLength {
                        context: $descriptor.name,
                        expected: $module::SK_LEN,
                        actual: secret_key.len(),
                    })?);
                $module::PrivateKey::try_from_bytes(*bytes).map_err(rejected($descriptor.name))
            }
        }

        impl Signature for $name {
            const PUBLIC_KEY_LEN: usize = $module::PK_LEN;
            const SECRET_KEY_LEN: usize = $module::SK_LEN;
            const SIGNATURE_LEN: usize = $module::SIG_LEN;

            fn name() -> &'static str {
                $descriptor.name
            }

            fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<KeyPair> {
                $handle.acquire()?;
                let (pk, sk) =
                    $module::KG::try_keygen_with_rng(rng).map_err(rejected($descriptor.name))?;
                let secret_key = Zeroizing::new(sk.into_bytes());
                Ok(KeyPair::new(pk.into_bytes().to_vec(), secret_key.to_vec()))
            }

            fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
                $handle.acquire()?;
                let sk = Self::private_key(secret_key)?;
                let signature = sk
                    .try_sign(message, &[])
                    .map_err(rejected($descriptor.name))?;
                Ok(signature.to_vec())
            }

            fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
                $handle.acquire()?;
                let pk = Self::public_key(public_key)?;
                let Ok(signature) = <[u8; $module::SIG_LEN]>::try_from(signature) else {
                    return Ok(false);
                };
                Ok(pk.verify(message, &signature, &[]))
            }
        }
    };
}

ml_dsa_scheme!(MlDsa65, ml_dsa_65, ML_DSA_65, MLDSA65);
ml_dsa_scheme!(MlDsa87, ml_dsa_87, ML_DSA_87, MLDSA87);

/// Generate a key pair
pub fn generate<R: CryptoRng + RngCore>(algo: MlDsaAlgorithm, rng: &mut R) -> Result<KeyPair> {
    match algo {
        MlDsaAlgorithm::MlDsa65 => MlDsa65::keypair(rng),
        MlDsaAlgorithm::MlDsa87 => MlDsa87::keypair(rng),
    }
}

/// Sign a message digest
pub fn sign(algo: MlDsaAlgorithm, secret_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
    match algo {
        MlDsaAlgorithm::MlDsa65 => MlDsa65::sign(digest, secret_key),
        MlDsaAlgorithm::MlDsa87 => MlDsa87::sign(digest, secret_key),
    }
}

/// Verify a signature over a message digest
///
/// A signature of the wrong length is `Ok(false)`; a public key of the
/// wrong length is an error.
pub fn verify(
    algo: MlDsaAlgorithm,
    public_key: &[u8],
    digest: &[u8],
    signature: &[u8],
) -> Result<bool> {
    match algo {
        MlDsaAlgorithm::MlDsa65 => MlDsa65::verify(digest, signature, public_key),
        MlDsaAlgorithm::MlDsa87 => MlDsa87::verify(digest, signature, public_key),
    }
}

/// Check that `public_key` belongs to `secret_key` by signing and verifying
/// a random 8-byte message
pub fn validate_params<R: CryptoRng + RngCore>(
    algo: MlDsaAlgorithm,
    public_key: &[u8],
    secret_key: &[u8],
    rng: &mut R,
) -> bool {
    let round_trip = random_bytes(rng, 8).and_then(|message| {
        let signature = sign(algo, secret_key, &message)?;
        verify(algo, public_key, &message, &signature)
    });

    match round_trip {
        Ok(valid) => valid,
        Err(err) => {
            tracing::debug!(?algo, %err, "ML-DSA parameter validation failed");
            false
        }
    }
}
