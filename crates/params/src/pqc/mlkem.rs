//! Constants for ML-KEM (FIPS 203)

/// Shared secret size common to all ML-KEM parameter sets
pub const MLKEM_SHARED_SECRET_SIZE: usize = 32;

/// Structure containing the encoding sizes of an ML-KEM parameter set
#[derive(Debug)]
pub struct MlKemDescriptor {
    pub name: &'static str,

    /// Size of the encapsulation key in bytes
    pub public_key_size: usize,

    /// Size of the expanded decapsulation key in bytes
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

/// ML-KEM-768
pub const MLKEM768: MlKemDescriptor = MlKemDescriptor {
    name: "ML-KEM-768",
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: MLKEM_SHARED_SECRET_SIZE,
};

/// ML-KEM-1024
pub const MLKEM1024: MlKemDescriptor = MlKemDescriptor {
    name: "ML-KEM-1024",
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: MLKEM_SHARED_SECRET_SIZE,
};
