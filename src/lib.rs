//! Textbook RSA: trial-division primes, small random key pairs, and
//! per-character / per-byte encryption with plain modular exponentiation.
//!
//! Not secure. There is no padding and every symbol is encrypted on its
//! own. The [`shell`] module holds the command line front end; the [`rsa`]
//! core keeps no state between calls.

pub mod rsa;
pub mod shell;
pub mod util;

pub use rsa::{
    decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text, generate_prime, is_prime, mod_inverse, rsa_keygen,
    Ciphertext, KeygenConfig, PrimePair, RsaError, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
};
