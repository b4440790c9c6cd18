//! KMAC256 (NIST SP 800-185)
//!
//! Built on the cSHAKE256 core of the `sha3` crate with the function name
//! `"KMAC"`. The SP 800-185 string encodings are implemented here.

use pkcrypt_params::utils::hash::KECCAK_512_RATE;
use sha3::digest::{ExtendableOutput, Update};
use sha3::{CShake256, CShake256Core};
use zeroize::Zeroizing;

const FUNCTION_NAME: &[u8] = b"KMAC";

/// Incremental KMAC256
///
/// ```
/// use pkcrypt_algorithms::kdf::Kmac256;
///
/// let mut mac = Kmac256::new(b"key", b"KDF");
/// mac.update(b"part one");
/// mac.update(b"part two");
/// let mut out = [0u8; 32];
/// mac.finalize_into(&mut out);
/// ```
#[derive(Clone)]
pub struct Kmac256 {
    inner: CShake256,
}

impl Kmac256 {
    /// Start a KMAC256 computation under `key` with customization string `customization`
    pub fn new(key: &[u8], customization: &[u8]) -> Self {
        let mut inner =
            CShake256::from_core(CShake256Core::new_with_function_name(FUNCTION_NAME, customization));

        // newX = bytepad(encode_string(K), 136) || X || right_encode(L)
        let padded_key = Zeroizing::new(bytepad(&encode_string(key), KECCAK_512_RATE));
        inner.update(&padded_key);

        Self { inner }
    }

    /// Absorb message data
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finish with an output length of `out.len()` bytes
    pub fn finalize_into(self, out: &mut [u8]) {
        let mut inner = self.inner;
        inner.update(&right_encode(out.len() as u64 * 8));
        inner.finalize_xof_into(out);
    }
}

/// One-shot KMAC256 with an output of `output_len` bytes
pub fn kmac256(key: &[u8], data: &[u8], customization: &[u8], output_len: usize) -> Zeroizing<Vec<u8>> {
    let mut mac = Kmac256::new(key, customization);
    mac.update(data);
    let mut out = Zeroizing::new(vec![0u8; output_len]);
    mac.finalize_into(&mut out);
    out
}

/// `left_encode(x)`: byte count first, then `x` big-endian without leading zeros
pub(crate) fn left_encode(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = leading_zero_bytes(&bytes);
    let mut out = Vec::with_capacity(1 + bytes.len() - skip);
    out.push((bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
    out
}

/// `right_encode(x)`: `x` big-endian without leading zeros, then the byte count
pub(crate) fn right_encode(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = leading_zero_bytes(&bytes);
    let mut out = Vec::with_capacity(1 + bytes.len() - skip);
    out.extend_from_slice(&bytes[skip..]);
    out.push((bytes.len() - skip) as u8);
    out
}

// At least one byte is always encoded, even for zero.
fn leading_zero_bytes(bytes: &[u8; 8]) -> usize {
    bytes.iter().take_while(|&&b| b == 0).count().min(7)
}

/// `encode_string(S) = left_encode(len(S) in bits) || S`
pub(crate) fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode(s.len() as u64 * 8);
    out.extend_from_slice(s);
    out
}

/// `bytepad(X, w) = left_encode(w) || X`, zero-padded to a multiple of `w`
pub(crate) fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    let mut out = left_encode(w as u64);
    out.extend_from_slice(x);
    let rem = out.len() % w;
    if rem != 0 {
        out.resize(out.len() + (w - rem), 0);
    }
    out
}
