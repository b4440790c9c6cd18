//! Fixed-output hash functions selected by OpenPGP identifier

use pkcrypt_params::HashAlgorithm;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};

/// Hash `data` with the selected algorithm
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    digest_parts(algorithm, &[data])
}

/// Hash the concatenation of `parts` without materialising it
pub fn digest_parts(algorithm: HashAlgorithm, parts: &[&[u8]]) -> Vec<u8> {
    fn run<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = D::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().to_vec()
    }

    match algorithm {
        HashAlgorithm::Sha224 => run::<Sha224>(parts),
        HashAlgorithm::Sha256 => run::<Sha256>(parts),
        HashAlgorithm::Sha384 => run::<Sha384>(parts),
        HashAlgorithm::Sha512 => run::<Sha512>(parts),
        HashAlgorithm::Sha3_256 => run::<Sha3_256>(parts),
        HashAlgorithm::Sha3_512 => run::<Sha3_512>(parts),
    }
}
