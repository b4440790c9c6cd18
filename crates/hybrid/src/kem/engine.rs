// File: crates/hybrid/src/kem/engine.rs

//! A generic engine for composite KEMs.
//!
//! `C` is the classical ECC-KEM and `P` the lattice KEM. The engine runs
//! both and feeds their outputs through the combiner; it knows nothing
//! about the session key that the resulting KEK protects.

use super::combiner::multi_key_combine;
use pkcrypt_api::{CompositeKeyPair, Error, Kem, Result};
use pkcrypt_params::pqc::composite::COMBINER_OUTPUT_BITS;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;
use core::marker::PhantomData;

/// Output of a composite encapsulation
pub struct Encapsulation {
    pub ecc_ciphertext: Vec<u8>,
    pub mlkem_ciphertext: Vec<u8>,
    /// Key-encryption key derived from both shares
    pub kek: Zeroizing<Vec<u8>>,
}

pub struct HybridKemEngine<C: Kem, P: Kem> {
    _classical: PhantomData<C>,
    _post_quantum: PhantomData<P>,
}

impl<C, P> HybridKemEngine<C, P>
where
    C: Kem,
    P: Kem,
{
    pub fn name() -> String {
        format!("{}+{}", P::name(), C::name())
    }

    /// Two independent key pairs, one per component
    pub fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<CompositeKeyPair> {
        let ecc = C::keypair(rng)?;
        let mlkem = P::keypair(rng)?;
        Ok(CompositeKeyPair { ecc, mlkem })
    }

    pub fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        ecc_public_key: &[u8],
        mlkem_public_key: &[u8],
        fixed_info: u8,
    ) -> Result<Encapsulation> {
        Error::check_length(C::name(), C::PUBLIC_KEY_LEN, ecc_public_key.len())?;
        Error::check_length(P::name(), P::PUBLIC_KEY_LEN, mlkem_public_key.len())?;

        let (ecc_ciphertext, ecc_key_share) = C::encapsulate(rng, ecc_public_key)?;
        let (mlkem_ciphertext, mlkem_key_share) = P::encapsulate(rng, mlkem_public_key)?;

        let kek = multi_key_combine(
            &ecc_key_share,
            &ecc_ciphertext,
            &mlkem_key_share,
            &mlkem_ciphertext,
            &[fixed_info],
            COMBINER_OUTPUT_BITS,
        )?;

        Ok(Encapsulation {
            ecc_ciphertext,
            mlkem_ciphertext,
            kek,
        })
    }

    /// Recover the KEK; the lattice KEM does not need its public key
    pub fn decapsulate(
        ecc_ciphertext: &[u8],
        mlkem_ciphertext: &[u8],
        ecc_secret_key: &[u8],
        ecc_public_key: &[u8],
        mlkem_secret_key: &[u8],
        fixed_info: u8,
    ) -> Result<Zeroizing<Vec<u8>>> {
        Error::check_length(C::name(), C::CIPHERTEXT_LEN, ecc_ciphertext.len())?;
        Error::check_length(P::name(), P::CIPHERTEXT_LEN, mlkem_ciphertext.len())?;

        let ecc_key_share = C::decapsulate(ecc_ciphertext, ecc_secret_key, ecc_public_key)?;
        let mlkem_key_share = P::decapsulate(mlkem_ciphertext, mlkem_secret_key, &[])?;

        multi_key_combine(
            &ecc_key_share,
            ecc_ciphertext,
            &mlkem_key_share,
            mlkem_ciphertext,
            &[fixed_info],
            COMBINER_OUTPUT_BITS,
        )
    }
}
