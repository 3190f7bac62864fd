//! Arbitrary-precision integer facility.
//!
//! Thin wrappers over `num-bigint-dig` giving the key agreement exactly the
//! operations it consumes: strict decimal parsing, primality testing,
//! modular exponentiation, bit length, secure random sampling, decimal
//! rendering and best-effort erasure of backing storage.

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Miller-Rabin rounds used by [`is_probable_prime`].
pub const PRIMALITY_ROUNDS: usize = 20;

/// Parse a non-negative decimal integer.
///
/// Only ASCII digits are accepted: no sign, whitespace, underscores or
/// radix prefixes. Returns `None` for anything else, including "".
pub fn parse_decimal(s: &str) -> Option<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
}

/// Probabilistic primality test.
pub fn is_probable_prime(n: &BigUint) -> bool {
    probably_prime(n, PRIMALITY_ROUNDS)
}

/// `base^exponent mod modulus`. `modulus` must be non-zero.
///
/// `base` may exceed `modulus`; it is reduced first.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    (base % modulus).modpow(exponent, modulus)
}

/// Number of significant bits in `n`.
pub fn bit_length(n: &BigUint) -> usize {
    n.bits()
}

/// Uniformly random integer in `[0, 2^bits)` drawn from `rng`.
pub fn secure_random_with_bit_length<R>(rng: &mut R, bits: usize) -> BigUint
where
    R: RngCore + CryptoRng + ?Sized,
{
    rng.gen_biguint(bits)
}

/// Render `n` as a decimal string.
pub fn to_decimal_string(n: &BigUint) -> String {
    n.to_str_radix(10)
}

/// Overwrite the digits backing `n` with zeros.
///
/// Best effort: spare capacity and copies made inside the arithmetic
/// routines are out of reach.
pub fn zero(n: &mut BigUint) {
    n.zeroize();
}

/// True if every digit backing `n` is zero.
#[cfg(test)]
pub(crate) fn is_zeroed(n: &BigUint) -> bool {
    n.to_bytes_le().iter().all(|&b| b == 0)
}

/// True if `n` reads as zero but still holds its old limbs.
///
/// [`zero`] overwrites digits without shrinking the limb vector, so a wiped
/// multi-limb value keeps a non-zero `bits()`. A value that was replaced by
/// a fresh zero has no limbs left and reports 0.
#[cfg(test)]
pub(crate) fn wiped_in_place(n: &BigUint) -> bool {
    is_zeroed(n) && n.bits() > 0
}
