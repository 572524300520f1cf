// RSA Key Generation
// Implements textbook RSA key pair generation from small random primes

use std::fmt;

use log::{debug, info};
use num_traits::One;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use super::bigint::{decimal, ensure_modulus, from_u64, gcd, mod_inverse, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::prime::{generate_prime_with, is_prime_natural, sample_until, within_cap};

/// Lower bound of the default prime range
pub const DEFAULT_PRIME_MIN: u64 = 1000;
/// Upper bound of the default prime range
pub const DEFAULT_PRIME_MAX: u64 = 5000;

/// Smallest public exponent the generator will draw
const MIN_PUBLIC_EXPONENT: u64 = 3;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPublicKey {
    #[serde(with = "decimal")]
    pub e: RsaBigInt, // Public exponent
    #[serde(with = "decimal")]
    pub n: RsaBigInt, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPrivateKey {
    #[serde(with = "decimal")]
    pub d: RsaBigInt, // Private exponent
    #[serde(with = "decimal")]
    pub n: RsaBigInt, // Modulus (same as public)
}

/// The two primes a key pair was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePair {
    #[serde(with = "decimal")]
    pub p: RsaBigInt,
    #[serde(with = "decimal")]
    pub q: RsaBigInt,
}

/// RSA Key Pair (public key, private key and their source primes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub primes: PrimePair,
}

/// Configuration for key generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenConfig {
    pub prime_min: RsaBigInt,
    pub prime_max: RsaBigInt,
    /// Cap on every rejection loop; `None` keeps sampling forever
    pub max_attempts: Option<u64>,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            prime_min: from_u64(DEFAULT_PRIME_MIN),
            prime_max: from_u64(DEFAULT_PRIME_MAX),
            max_attempts: None,
        }
    }
}

impl KeygenConfig {
    pub fn with_prime_range(mut self, min: RsaBigInt, max: RsaBigInt) -> Self {
        self.prime_min = min;
        self.prime_max = max;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl fmt::Display for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

impl PrimePair {
    /// Euler's totient of p*q: (p-1)(q-1)
    pub fn phi(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }

    pub fn modulus(&self) -> RsaBigInt {
        &self.p * &self.q
    }
}

impl RsaKeyPair {
    /// Build a key pair from chosen primes and public exponent
    ///
    /// p and q must be distinct primes and e must satisfy 1 < e < φ(n)
    /// with gcd(e, φ(n)) = 1.
    pub fn from_primes(p: RsaBigInt, q: RsaBigInt, e: RsaBigInt) -> RsaResult<Self> {
        for prime in [&p, &q] {
            if !is_prime_natural(prime) {
                return Err(RsaError::NotPrime(prime.clone()));
            }
        }
        if p == q {
            return Err(RsaError::IdenticalPrimes(p));
        }

        let primes = PrimePair { p, q };
        let phi = primes.phi();
        if e <= RsaBigInt::one() || e >= phi {
            return Err(RsaError::InvalidExponent { e, phi });
        }

        Self::derive(primes, e, &phi)
    }

    /// Compute n and d for already validated parameters
    fn derive(primes: PrimePair, e: RsaBigInt, phi: &RsaBigInt) -> RsaResult<Self> {
        let d = mod_inverse(&e, phi)?;
        let n = primes.modulus();

        Ok(Self {
            public_key: RsaPublicKey { e, n: n.clone() },
            private_key: RsaPrivateKey { d, n },
            primes,
        })
    }

    /// Check that both keys share n = p*q and that n > 1
    ///
    /// Key pairs built here always pass; this guards pairs read back from
    /// storage.
    pub fn validate(&self) -> RsaResult<()> {
        let n = &self.public_key.n;
        ensure_modulus(n)?;

        for found in [&self.private_key.n, &self.primes.modulus()] {
            if found != n {
                return Err(RsaError::ModulusMismatch {
                    expected: n.clone(),
                    found: found.clone(),
                });
            }
        }

        Ok(())
    }

    /// Split into the (public key, private key, primes) triple
    pub fn into_parts(self) -> (RsaPublicKey, RsaPrivateKey, PrimePair) {
        (self.public_key, self.private_key, self.primes)
    }
}

/// Generate an RSA key pair from primes in [1000, 5000]
pub fn rsa_keygen() -> RsaResult<RsaKeyPair> {
    rsa_keygen_with(&KeygenConfig::default(), &mut thread_rng())
}

/// Generate an RSA key pair with explicit configuration and random source
pub fn rsa_keygen_with<R: Rng + ?Sized>(config: &KeygenConfig, rng: &mut R) -> RsaResult<RsaKeyPair> {
    let (min, max, cap) = (&config.prime_min, &config.prime_max, config.max_attempts);

    // Step 1: Two independent primes, q redrawn until it differs from p
    let p = generate_prime_with(rng, min, max, cap)?;
    let mut q = generate_prime_with(rng, min, max, cap)?;
    let mut redraws: u64 = 0;
    while q == p {
        if !within_cap(cap, redraws) {
            return Err(RsaError::SamplingExhausted {
                what: "prime distinct from p",
                min: min.clone(),
                max: max.clone(),
                attempts: redraws,
            });
        }
        redraws += 1;
        q = generate_prime_with(rng, min, max, cap)?;
    }

    // Step 2: φ(n) = (p-1)(q-1)
    let primes = PrimePair { p, q };
    let phi = primes.phi();

    // Step 3: e drawn from [3, φ(n) - 1] until coprime with φ(n)
    let e = sample_until(
        rng,
        &from_u64(MIN_PUBLIC_EXPONENT),
        &(&phi - 1u8),
        cap,
        "public exponent coprime to phi",
        |candidate| gcd(candidate, &phi).is_one(),
    )?;
    debug!("selected public exponent {e} for phi {phi}");

    // Step 4: d = e^(-1) mod φ(n)
    let keypair = RsaKeyPair::derive(primes, e, &phi)?;
    info!("generated RSA key pair with modulus {}", keypair.public_key.n);

    Ok(keypair)
}
