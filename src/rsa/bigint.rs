// RSA Big Integer Operations
// Wrapper around num-bigint for the arithmetic shared by key generation and the codec

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use super::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Reject a modulus of 0 or 1 before it reaches `mod_pow`
pub fn ensure_modulus(n: &RsaBigInt) -> RsaResult<()> {
    if *n <= RsaBigInt::one() {
        return Err(RsaError::InvalidModulus(n.clone()));
    }
    Ok(())
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
///
/// The coefficients are signed, so this works on `BigInt`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (quotient, remainder) = a.div_mod_floor(b);
    let (gcd, x1, y1) = extended_gcd(b, &remainder);
    let y = x1 - quotient * &y1;

    (gcd, y1, y)
}

/// Compute modular inverse: e^(-1) mod phi
///
/// The result lies in `[0, phi)`. Fails with [`RsaError::NoInverse`] when
/// `e` and `phi` are not coprime.
pub fn mod_inverse(e: &RsaBigInt, phi: &RsaBigInt) -> RsaResult<RsaBigInt> {
    let no_inverse = || RsaError::NoInverse {
        e: e.clone(),
        phi: phi.clone(),
    };

    if phi.is_zero() {
        return Err(no_inverse());
    }

    let modulus = BigInt::from(phi.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from(e.clone()), &modulus);
    if !gcd.is_one() {
        return Err(no_inverse());
    }

    // mod_floor against a positive modulus is never negative
    x.mod_floor(&modulus).to_biguint().ok_or_else(no_inverse)
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Draw a uniformly random integer from the inclusive range [low, high]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, low: &RsaBigInt, high: &RsaBigInt) -> RsaResult<RsaBigInt> {
    if low > high {
        return Err(RsaError::InvalidRange {
            min: low.clone(),
            max: high.clone(),
        });
    }

    Ok(rng.gen_biguint_range(low, &(high + 1u8)))
}

/// Serde adapter writing a big integer as a decimal string
pub mod decimal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::RsaBigInt;

    pub fn serialize<S: Serializer>(value: &RsaBigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RsaBigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let base = from_u64(3);
        let exp = from_u64(5);
        let modulus = from_u64(7);
        let result = mod_pow(&base, &exp, &modulus);
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_textbook_vector() {
        let n = from_u64(3233);
        assert_eq!(mod_pow(&from_u64(65), &from_u64(17), &n), from_u64(2790));
        assert_eq!(mod_pow(&from_u64(2790), &from_u64(2753), &n), from_u64(65));
    }

    #[test]
    fn test_mod_pow_unit_modulus() {
        assert_eq!(mod_pow(&from_u64(9), &from_u64(4), &from_u64(1)), from_u64(0));
    }

    #[test]
    fn test_ensure_modulus() {
        assert_eq!(ensure_modulus(&from_u64(0)).unwrap_err(), RsaError::InvalidModulus(from_u64(0)));
        assert_eq!(ensure_modulus(&from_u64(1)).unwrap_err(), RsaError::InvalidModulus(from_u64(1)));
        assert!(ensure_modulus(&from_u64(3233)).is_ok());
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&a * &x + &b * &y, g);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let a = from_u64(3);
        let m = from_u64(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, from_u64(5));

        // Verify: 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!((a * inv) % m, from_u64(1));
    }

    #[test]
    fn test_mod_inverse_textbook_vector() {
        assert_eq!(mod_inverse(&from_u64(17), &from_u64(3120)).unwrap(), from_u64(2753));
    }

    #[test]
    fn test_mod_inverse_negative_coefficient_is_normalized() {
        // Euclid yields x = -2 for 7 mod 15; the inverse is 13
        assert_eq!(mod_inverse(&from_u64(7), &from_u64(15)).unwrap(), from_u64(13));
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        let err = mod_inverse(&from_u64(6), &from_u64(9)).unwrap_err();
        assert_eq!(
            err,
            RsaError::NoInverse {
                e: from_u64(6),
                phi: from_u64(9),
            }
        );
    }

    #[test]
    fn test_mod_inverse_zero_modulus() {
        assert!(mod_inverse(&from_u64(1), &from_u64(0)).is_err());
    }

    #[test]
    fn test_random_in_range_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let low = from_u64(10);
        let high = from_u64(12);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let value = random_in_range(&mut rng, &low, &high).unwrap();
            assert!(value >= low && value <= high);
            let offset: usize = (value - &low).try_into().unwrap();
            seen[offset] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_random_in_range_single_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let value = random_in_range(&mut rng, &from_u64(42), &from_u64(42)).unwrap();
        assert_eq!(value, from_u64(42));
    }

    #[test]
    fn test_random_in_range_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_in_range(&mut rng, &from_u64(5), &from_u64(4)).unwrap_err();
        assert!(matches!(err, RsaError::InvalidRange { .. }));
    }
}
