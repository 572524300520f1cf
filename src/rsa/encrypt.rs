// RSA Encryption Implementation
// Textbook per-symbol encryption: every codepoint or byte becomes m^e mod n

use super::bigint::{ensure_modulus, mod_pow, RsaBigInt};
use super::ciphertext::Ciphertext;
use super::error::RsaResult;
use super::keygen::RsaPublicKey;

/// Encrypt a single integer: m^e mod n
///
/// No range check is made on m; values at or above n do not survive a
/// round trip. A modulus below 2 is rejected.
pub fn encrypt_value(m: &RsaBigInt, public_key: &RsaPublicKey) -> RsaResult<RsaBigInt> {
    ensure_modulus(&public_key.n)?;
    Ok(mod_pow(m, &public_key.e, &public_key.n))
}

/// Encrypt a string one character (Unicode codepoint) at a time
pub fn encrypt_text(message: &str, public_key: &RsaPublicKey) -> RsaResult<Ciphertext> {
    ensure_modulus(&public_key.n)?;
    Ok(message
        .chars()
        .map(|c| mod_pow(&RsaBigInt::from(u32::from(c)), &public_key.e, &public_key.n))
        .collect())
}

/// Encrypt raw bytes one byte at a time
pub fn encrypt_bytes(content: &[u8], public_key: &RsaPublicKey) -> RsaResult<Ciphertext> {
    ensure_modulus(&public_key.n)?;
    Ok(content
        .iter()
        .map(|&byte| mod_pow(&RsaBigInt::from(byte), &public_key.e, &public_key.n))
        .collect())
}

impl RsaPublicKey {
    /// Encrypt a message using this public key
    pub fn encrypt_text(&self, message: &str) -> RsaResult<Ciphertext> {
        encrypt_text(message, self)
    }

    pub fn encrypt_bytes(&self, content: &[u8]) -> RsaResult<Ciphertext> {
        encrypt_bytes(content, self)
    }
}
