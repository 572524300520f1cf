// RSA Error Types
// Every failure the key generator and codec can report to their caller

use thiserror::Error;

use super::bigint::RsaBigInt;

/// Result type alias for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;

/// Errors raised by the RSA core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    /// e and φ(n) share a factor, so no private exponent exists
    #[error("modular inverse does not exist: gcd({e}, {phi}) != 1")]
    NoInverse { e: RsaBigInt, phi: RsaBigInt },

    /// Sampling range is empty
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: RsaBigInt, max: RsaBigInt },

    /// A capped rejection loop ran out of attempts
    #[error("no {what} found in [{min}, {max}] after {attempts} attempts")]
    SamplingExhausted {
        what: &'static str,
        min: RsaBigInt,
        max: RsaBigInt,
        attempts: u64,
    },

    #[error("{0} is not prime")]
    NotPrime(RsaBigInt),

    #[error("p and q must be distinct, both are {0}")]
    IdenticalPrimes(RsaBigInt),

    /// Public exponent outside (1, φ(n))
    #[error("public exponent {e} must satisfy 1 < e < {phi}")]
    InvalidExponent { e: RsaBigInt, phi: RsaBigInt },

    /// Modulus too small to encrypt anything
    #[error("modulus {0} must be greater than 1")]
    InvalidModulus(RsaBigInt),

    /// Key parts disagree on n
    #[error("key modulus {found} does not match {expected}")]
    ModulusMismatch { expected: RsaBigInt, found: RsaBigInt },

    /// Decrypted value is not a Unicode scalar value
    #[error("decrypted value {0} is not a valid character")]
    InvalidCodepoint(RsaBigInt),

    /// Decrypted value does not fit in a byte
    #[error("decrypted value {0} is not a valid byte")]
    InvalidByte(RsaBigInt),
}
