//! Diffie-Hellman key agreement over a prime field.
//!
//! A session holds the group `(p, g)` and a private exponent `x`. The
//! public value is `g^x mod p`; the shared secret with a peer whose public
//! value is `y` is `y^x mod p`. All integers cross the API boundary as
//! decimal strings.
//!
//! Two construction contracts exist:
//! - generated secret: `x` is rejection-sampled into `(0, p-1)` from a CSPRNG;
//! - supplied secret: `x` is taken as given, with no range check, so that
//!   fixtures can pin exact values.
//!
//! Peer public values are parsed but not range-checked against `(0, p)`.
//! Callers exposed to untrusted peers should validate them separately.

use std::fmt;

use log::debug;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto::{bigint, random};
use crate::error::{KeyAgreementError, Result};
use crate::params::GroupParameters;

/// A single key-exchange session.
///
/// The modulus, generator and secret are zeroed by [`KeyAgreement::dispose`],
/// and again on drop if `dispose` was never called.
pub struct KeyAgreement {
    modulus: BigUint,
    generator: BigUint,
    secret: BigUint,
    disposed: bool,
}

impl KeyAgreement {
    /// Create a session with a freshly generated secret.
    pub fn new(prime: &str, generator: &str) -> Result<Self> {
        Self::new_with_rng(prime, generator, &mut random::secure_rng())
    }

    /// Create a session whose secret is drawn from `rng`.
    pub fn new_with_rng<R>(prime: &str, generator: &str, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let (modulus, generator) = parse_group(prime, generator)?;
        let secret = generate_secret(&modulus, rng);
        debug!(
            "key agreement session created ({}-bit modulus, generated secret)",
            bigint::bit_length(&modulus)
        );
        Ok(Self {
            modulus,
            generator,
            secret,
            disposed: false,
        })
    }

    /// Create a session with a caller-supplied secret.
    ///
    /// The secret is trusted: it is not checked against `(0, p-1)`.
    pub fn with_secret(prime: &str, generator: &str, secret: &str) -> Result<Self> {
        let (modulus, generator) = parse_group(prime, generator)?;
        let secret = bigint::parse_decimal(secret).ok_or_else(|| {
            KeyAgreementError::InvalidParameters(
                "supplied secret is not a non-negative decimal integer".into(),
            )
        })?;
        debug!(
            "key agreement session created ({}-bit modulus, supplied secret)",
            bigint::bit_length(&modulus)
        );
        Ok(Self {
            modulus,
            generator,
            secret,
            disposed: false,
        })
    }

    /// Create a session, using `secret` when given and generating one otherwise.
    pub fn from_decimal(prime: &str, generator: &str, secret: Option<&str>) -> Result<Self> {
        match secret {
            Some(secret) => Self::with_secret(prime, generator, secret),
            None => Self::new(prime, generator),
        }
    }

    /// Create a session with a generated secret over `params`.
    pub fn from_parameters(params: &GroupParameters) -> Result<Self> {
        Self::new(&params.prime, &params.generator)
    }

    /// Compute `g^x mod p` as a decimal string.
    pub fn create_public_value(&self) -> Result<String> {
        self.ensure_live()?;
        let mut value = bigint::mod_pow(&self.generator, &self.secret, &self.modulus);
        let rendered = bigint::to_decimal_string(&value);
        bigint::zero(&mut value);
        Ok(rendered)
    }

    /// Compute `y^x mod p` for the peer's public value `y`.
    ///
    /// `y` must be a plain decimal integer; it is not range-checked.
    pub fn derive_shared_secret(&self, peer_public_value: &str) -> Result<Zeroizing<String>> {
        self.ensure_live()?;
        let peer = bigint::parse_decimal(peer_public_value).ok_or_else(|| {
            KeyAgreementError::MalformedInput(format!(
                "peer public value is not a non-negative decimal integer ({} bytes)",
                peer_public_value.len()
            ))
        })?;
        let mut shared = bigint::mod_pow(&peer, &self.secret, &self.modulus);
        let rendered = Zeroizing::new(bigint::to_decimal_string(&shared));
        bigint::zero(&mut shared);
        Ok(rendered)
    }

    /// Zero the modulus, generator and secret. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        bigint::zero(&mut self.modulus);
        bigint::zero(&mut self.generator);
        bigint::zero(&mut self.secret);
        self.disposed = true;
        debug!("key agreement session disposed");
    }

    /// Whether [`KeyAgreement::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Bit length of the modulus, or 0 once disposed.
    pub fn modulus_bits(&self) -> usize {
        if self.disposed {
            0
        } else {
            bigint::bit_length(&self.modulus)
        }
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            return Err(KeyAgreementError::Disposed);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &BigUint {
        &self.secret
    }

    #[cfg(test)]
    fn storage_is_zeroed(&self) -> bool {
        bigint::is_zeroed(&self.modulus)
            && bigint::is_zeroed(&self.generator)
            && bigint::is_zeroed(&self.secret)
    }
}

impl Drop for KeyAgreement {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for KeyAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAgreement")
            .field("modulus_bits", &self.modulus_bits())
            .field("secret", &"<redacted>")
            .field("disposed", &self.disposed)
            .finish()
    }
}

/// Parse and validate a group: `p` prime and greater than 2, `0 < g < p`.
pub(crate) fn parse_group(prime: &str, generator: &str) -> Result<(BigUint, BigUint)> {
    let modulus = bigint::parse_decimal(prime).ok_or_else(|| {
        KeyAgreementError::InvalidParameters("modulus is not a non-negative decimal integer".into())
    })?;
    let generator = bigint::parse_decimal(generator).ok_or_else(|| {
        KeyAgreementError::InvalidParameters(
            "generator is not a non-negative decimal integer".into(),
        )
    })?;

    // p = 2 leaves (0, p-1) empty and sampling would never terminate.
    if modulus <= BigUint::from(2u32) {
        return Err(KeyAgreementError::InvalidParameters(
            "modulus is too small to admit a secret".into(),
        ));
    }
    if !bigint::is_probable_prime(&modulus) {
        return Err(KeyAgreementError::InvalidParameters(
            "modulus is not prime".into(),
        ));
    }
    if generator.is_zero() || generator >= modulus {
        return Err(KeyAgreementError::InvalidParameters(
            "generator must satisfy 0 < g < p".into(),
        ));
    }
    Ok((modulus, generator))
}

/// Rejection-sample a secret uniformly from `(0, p-1)`.
fn generate_secret<R>(modulus: &BigUint, rng: &mut R) -> BigUint
where
    R: RngCore + CryptoRng + ?Sized,
{
    let upper = modulus - &BigUint::one();
    let bits = bigint::bit_length(modulus);
    loop {
        let mut candidate = bigint::secure_random_with_bit_length(rng, bits);
        if !candidate.is_zero() && candidate < upper {
            return candidate;
        }
        bigint::zero(&mut candidate);
    }
}
