// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod ciphertext;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prime;

pub use bigint::{extended_gcd, mod_inverse, mod_pow, RsaBigInt};
pub use ciphertext::Ciphertext;
pub use decrypt::{decrypt_bytes, decrypt_text};
pub use encrypt::{encrypt_bytes, encrypt_text};
pub use error::{RsaError, RsaResult};
pub use keygen::{rsa_keygen, rsa_keygen_with, KeygenConfig, PrimePair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use prime::{generate_prime, generate_prime_with, is_prime, is_prime_natural};
