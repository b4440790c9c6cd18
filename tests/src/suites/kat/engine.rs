//! Known-answer engine backed by the pkcrypt crates

use super::error::{EngineError, Result};
use super::model::{TestCase, TestGroup};
use super::runner::KatEngine;
use pkcrypt_algorithms::{digest, hkdf, keywrap, kmac256};
use pkcrypt_api::EcdsaSignature;
use pkcrypt_kem::ecdh_x;
use pkcrypt_params::{Curve, EcdhXAlgorithm, HashAlgorithm, SymmetricAlgorithm};
use pkcrypt_sign::ecdsa;

pub struct PkcryptEngine;

impl KatEngine for PkcryptEngine {
    fn run(&self, algorithm: &str, group: &TestGroup, case: &TestCase) -> Result<()> {
        let set = group.parameter_set.as_str();
        match algorithm {
            "ECDH-X" => ecdh_x_case(ecdh_x_algorithm(set)?, case),
            "ECDSA" => ecdsa_case(Curve::from_name(set)?, case),
            "HKDF" => hkdf_case(hash_algorithm(set)?, case),
            "KMAC256" => kmac_case(case),
            "AES-KW" => keywrap_case(cipher(set)?, case),
            other => Err(EngineError::Unknown {
                kind: "algorithm",
                name: other.into(),
            }),
        }
    }
}

/// Hex-decode a required field
fn field(case: &TestCase, name: &str) -> Result<Vec<u8>> {
    let value = case
        .fields
        .get(name)
        .ok_or_else(|| EngineError::MissingField(name.into()))?;
    Ok(hex::decode(value)?)
}

fn expect(field: &'static str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::Mismatch {
            field,
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        })
    }
}

fn ecdh_x_algorithm(name: &str) -> Result<EcdhXAlgorithm> {
    match name {
        "X25519" => Ok(EcdhXAlgorithm::X25519),
        "X448" => Ok(EcdhXAlgorithm::X448),
        other => Err(EngineError::Unknown {
            kind: "Montgomery curve",
            name: other.into(),
        }),
    }
}

fn hash_algorithm(name: &str) -> Result<HashAlgorithm> {
    [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_512,
    ]
    .into_iter()
    .find(|h| h.name() == name)
    .ok_or_else(|| EngineError::Unknown {
        kind: "hash",
        name: name.into(),
    })
}

fn cipher(name: &str) -> Result<SymmetricAlgorithm> {
    match name {
        "AES-128" => Ok(SymmetricAlgorithm::Aes128),
        "AES-192" => Ok(SymmetricAlgorithm::Aes192),
        "AES-256" => Ok(SymmetricAlgorithm::Aes256),
        other => Err(EngineError::Unknown {
            kind: "cipher",
            name: other.into(),
        }),
    }
}

fn ecdh_x_case(algo: EcdhXAlgorithm, case: &TestCase) -> Result<()> {
    let secret_key = field(case, "secretKey")?;
    let peer_public_key = field(case, "peerPublicKey")?;

    if let Ok(public_key) = field(case, "publicKey") {
        if !ecdh_x::validate_params(algo, &public_key, &secret_key) {
            return Err(EngineError::Rejected);
        }
    }

    let shared = ecdh_x::get_shared_secret(algo, &secret_key, &peer_public_key)?;
    expect("sharedSecret", &field(case, "sharedSecret")?, &shared)
}

fn ecdsa_case(curve: Curve, case: &TestCase) -> Result<()> {
    let hash = hash_algorithm(
        case.fields
            .get("hash")
            .ok_or_else(|| EngineError::MissingField("hash".into()))?,
    )?;
    let message = field(case, "msg")?;
    let public_key = field(case, "publicKey")?;
    let signature = EcdsaSignature {
        r: field(case, "r")?,
        s: field(case, "s")?,
    };
    let hashed = digest(hash, &message);

    // Once with the whole message and once as if it had been streamed
    for input in [Some(message.as_slice()), None] {
        if !ecdsa::verify(curve, hash, &signature, input, &public_key, &hashed)? {
            return Err(EngineError::Rejected);
        }
    }
    Ok(())
}

fn hkdf_case(hash: HashAlgorithm, case: &TestCase) -> Result<()> {
    let expected = field(case, "okm")?;
    let okm = hkdf(
        hash,
        &field(case, "ikm")?,
        &field(case, "salt")?,
        &field(case, "info")?,
        expected.len(),
    )?;
    expect("okm", &expected, &okm)
}

fn kmac_case(case: &TestCase) -> Result<()> {
    let expected = field(case, "mac")?;
    let mac = kmac256(
        &field(case, "key")?,
        &field(case, "msg")?,
        &field(case, "customization")?,
        expected.len(),
    );
    expect("mac", &expected, &mac)
}

fn keywrap_case(cipher: SymmetricAlgorithm, case: &TestCase) -> Result<()> {
    let kek = field(case, "kek")?;
    let key = field(case, "key")?;
    let wrapped = field(case, "wrapped")?;

    let unwrapped = keywrap::unwrap(cipher, &kek, &wrapped)?;
    expect("key", &key, &unwrapped)?;
    expect("wrapped", &wrapped, &keywrap::wrap(cipher, &kek, &key)?)
}
