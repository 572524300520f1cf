// Prime Testing and Sampling
// Trial-division primality and rejection sampling of primes in a range

use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use rand::{thread_rng, Rng};

use super::bigint::{random_in_range, RsaBigInt};
use super::error::{RsaError, RsaResult};

/// Trial division primality test over arbitrary integers
///
/// Anything below 2 (negatives included) is not prime.
pub fn is_prime(number: &BigInt) -> bool {
    number.to_biguint().is_some_and(|n| is_prime_natural(&n))
}

/// Trial division primality test on the unsigned key domain
///
/// Checks 2 explicitly, rejects other even numbers, then tries every odd
/// divisor up to floor(sqrt(number)).
pub fn is_prime_natural(number: &RsaBigInt) -> bool {
    let two = RsaBigInt::from(2u8);
    if number < &two {
        return false;
    }
    if number == &two {
        return true;
    }
    if number.is_even() {
        return false;
    }

    let limit = number.sqrt();
    let mut divisor = RsaBigInt::from(3u8);
    while divisor <= limit {
        if (number % &divisor).is_zero() {
            return false;
        }
        divisor += 2u8;
    }

    true
}

/// Generate a random prime in [min_value, max_value]
///
/// Loops until a prime is drawn; a range without primes never returns.
pub fn generate_prime(min_value: &RsaBigInt, max_value: &RsaBigInt) -> RsaResult<RsaBigInt> {
    generate_prime_with(&mut thread_rng(), min_value, max_value, None)
}

/// Generate a random prime in [min_value, max_value] from the given source
///
/// With `max_attempts` set, gives up with [`RsaError::SamplingExhausted`]
/// after that many draws.
pub fn generate_prime_with<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: &RsaBigInt,
    max_value: &RsaBigInt,
    max_attempts: Option<u64>,
) -> RsaResult<RsaBigInt> {
    let prime = sample_until(rng, min_value, max_value, max_attempts, "prime", is_prime_natural)?;
    debug!("sampled prime {prime} from [{min_value}, {max_value}]");
    Ok(prime)
}

/// Whether another draw is allowed after `attempts` draws
///
/// A cap of N permits exactly N draws.
pub(crate) fn within_cap(max_attempts: Option<u64>, attempts: u64) -> bool {
    max_attempts.map_or(true, |cap| attempts < cap)
}

/// Rejection sampling: draw from [min, max] until `accept` holds
pub(crate) fn sample_until<R, F>(
    rng: &mut R,
    min: &RsaBigInt,
    max: &RsaBigInt,
    max_attempts: Option<u64>,
    what: &'static str,
    accept: F,
) -> RsaResult<RsaBigInt>
where
    R: Rng + ?Sized,
    F: Fn(&RsaBigInt) -> bool,
{
    let mut attempts: u64 = 0;

    loop {
        if !within_cap(max_attempts, attempts) {
            return Err(RsaError::SamplingExhausted {
                what,
                min: min.clone(),
                max: max.clone(),
                attempts,
            });
        }
        attempts += 1;

        let candidate = random_in_range(rng, min, max)?;
        if accept(&candidate) {
            trace!("accepted {what} after {attempts} draws");
            return Ok(candidate);
        }
    }
}
