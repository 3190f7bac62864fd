//! Cryptographic primitives for xs-keyinit.
//!
//! This module provides:
//! - Arbitrary-precision integer operations (parse, primality, modpow, erase)
//! - Cryptographically secure random number generation

pub mod bigint;
pub mod random;
