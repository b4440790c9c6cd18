//! The composite KEM key combiner
//!
//! ```text
//! input = counter || eccKeyShare || eccCipherText
//!                 || mlkemKeyShare || mlkemCipherText || fixedInfo
//! KEK   = KMAC256(key = domain, data = input, customization = "KDF", L = 256)
//! ```

use pkcrypt_algorithms::Kmac256;
use pkcrypt_api::{Error, Result};
use pkcrypt_params::pqc::composite::{
    COMBINER_COUNTER, COMBINER_CUSTOMIZATION, COMBINER_DOMAIN, COMBINER_OUTPUT_BITS,
};
use zeroize::Zeroizing;

/// Combine both components' key shares and ciphertexts into one key
///
/// `fixed_info` is the composite algorithm's identifier octet. Only a
/// 256-bit output is defined; any other `output_bits` is
/// [`Error::UnsupportedOutputSize`].
pub fn multi_key_combine(
    ecc_key_share: &[u8],
    ecc_ciphertext: &[u8],
    mlkem_key_share: &[u8],
    mlkem_ciphertext: &[u8],
    fixed_info: &[u8],
    output_bits: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    if output_bits != COMBINER_OUTPUT_BITS {
        return Err(Error::UnsupportedOutputSize {
            requested_bits: output_bits,
        });
    }

    let mut mac = Kmac256::new(COMBINER_DOMAIN, COMBINER_CUSTOMIZATION);
    for part in [
        &COMBINER_COUNTER[..],
        ecc_key_share,
        ecc_ciphertext,
        mlkem_key_share,
        mlkem_ciphertext,
        fixed_info,
    ] {
        mac.update(part);
    }

    let mut kek = Zeroizing::new(vec![0u8; output_bits / 8]);
    mac.finalize_into(&mut kek);
    Ok(kek)
}
