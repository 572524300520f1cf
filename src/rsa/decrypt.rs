// RSA Decryption Implementation
// Inverts per-symbol encryption: every ciphertext integer becomes c^d mod n

use num_traits::ToPrimitive;

use super::bigint::{ensure_modulus, mod_pow, RsaBigInt};
use super::ciphertext::Ciphertext;
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPrivateKey;

/// Decrypt a single integer: c^d mod n
pub fn decrypt_value(c: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<RsaBigInt> {
    ensure_modulus(&private_key.n)?;
    Ok(mod_pow(c, &private_key.d, &private_key.n))
}

/// Decrypt ciphertext back to a string, one codepoint per element
///
/// A decrypted value that is not a Unicode scalar value (wrong key or
/// tampered ciphertext) fails with [`RsaError::InvalidCodepoint`].
pub fn decrypt_text(ciphertext: &Ciphertext, private_key: &RsaPrivateKey) -> RsaResult<String> {
    ensure_modulus(&private_key.n)?;
    ciphertext
        .iter()
        .map(|c| {
            let m = decrypt_value(c, private_key)?;
            m.to_u32()
                .and_then(char::from_u32)
                .ok_or(RsaError::InvalidCodepoint(m))
        })
        .collect()
}

/// Decrypt ciphertext back to raw bytes, one byte per element
pub fn decrypt_bytes(ciphertext: &Ciphertext, private_key: &RsaPrivateKey) -> RsaResult<Vec<u8>> {
    ensure_modulus(&private_key.n)?;
    ciphertext
        .iter()
        .map(|c| {
            let m = decrypt_value(c, private_key)?;
            m.to_u8().ok_or(RsaError::InvalidByte(m))
        })
        .collect()
}

impl RsaPrivateKey {
    /// Decrypt a ciphertext using this private key
    pub fn decrypt_text(&self, ciphertext: &Ciphertext) -> RsaResult<String> {
        decrypt_text(ciphertext, self)
    }

    pub fn decrypt_bytes(&self, ciphertext: &Ciphertext) -> RsaResult<Vec<u8>> {
        decrypt_bytes(ciphertext, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::{rsa_keygen, rsa_keygen_with, KeygenConfig, RsaKeyPair};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn textbook_pair() -> RsaKeyPair {
        RsaKeyPair::from_primes(from_u64(61), from_u64(53), from_u64(17)).unwrap()
    }

    #[test]
    fn test_decrypt_textbook_value() {
        let keypair = textbook_pair();
        assert_eq!(decrypt_value(&from_u64(2790), &keypair.private_key).unwrap(), from_u64(65));
    }

    #[test]
    fn test_decrypt_text_textbook() {
        let keypair = textbook_pair();
        let ciphertext = Ciphertext::new(vec![from_u64(2790)]);
        assert_eq!(decrypt_text(&ciphertext, &keypair.private_key).unwrap(), "A");
    }

    #[test]
    fn test_text_roundtrip() {
        let keypair = rsa_keygen().unwrap();
        let messages = ["", "A", "Hello, RSA!", "héllo wörld ✓ 🔒", "line\nbreak\ttab"];

        for message in messages {
            let ciphertext = keypair.public_key.encrypt_text(message).unwrap();
            assert_eq!(ciphertext.len(), message.chars().count());
            let decrypted = keypair.private_key.decrypt_text(&ciphertext).unwrap();
            assert_eq!(decrypted, message);
        }
    }

    #[test]
    fn test_bytes_roundtrip() {
        let config = KeygenConfig::default();
        let content: Vec<u8> = (0..=255u8).chain([0, 255, 7, 7]).collect();

        for seed in 0..5 {
            let keypair = rsa_keygen_with(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
            let ciphertext = keypair.public_key.encrypt_bytes(&content).unwrap();
            assert_eq!(ciphertext.len(), content.len());
            assert_eq!(decrypt_bytes(&ciphertext, &keypair.private_key).unwrap(), content);
        }
    }

    #[test]
    fn test_decrypt_empty() {
        let keypair = textbook_pair();
        assert_eq!(decrypt_text(&Ciphertext::default(), &keypair.private_key).unwrap(), "");
        assert!(decrypt_bytes(&Ciphertext::default(), &keypair.private_key).unwrap().is_empty());
    }

    #[test]
    fn test_decrypt_bytes_out_of_range() {
        // 3000 decrypts to itself under d = 1, which is no byte
        let key = RsaPrivateKey {
            d: from_u64(1),
            n: from_u64(3233),
        };
        let err = decrypt_bytes(&Ciphertext::new(vec![from_u64(3000)]), &key).unwrap_err();
        assert_eq!(err, RsaError::InvalidByte(from_u64(3000)));
    }

    #[test]
    fn test_decrypt_text_surrogate_is_rejected() {
        // 0xD800 is a surrogate, not a char; n is large enough to hold it
        let key = RsaPrivateKey {
            d: from_u64(1),
            n: from_u64(1_000_003),
        };
        let err = decrypt_text(&Ciphertext::new(vec![from_u64(0xD800)]), &key).unwrap_err();
        assert_eq!(err, RsaError::InvalidCodepoint(from_u64(0xD800)));
    }

    #[test]
    fn test_decrypt_zero_modulus_is_an_error() {
        let key = RsaPrivateKey {
            d: from_u64(2753),
            n: from_u64(0),
        };
        let ciphertext = Ciphertext::new(vec![from_u64(2790)]);
        assert_eq!(decrypt_text(&ciphertext, &key).unwrap_err(), RsaError::InvalidModulus(from_u64(0)));
        assert_eq!(decrypt_bytes(&ciphertext, &key).unwrap_err(), RsaError::InvalidModulus(from_u64(0)));
    }
}
