//! Key exchange — the finite-field Diffie-Hellman session.
//!
//! One [`KeyAgreement`] per keyinit exchange: construct it from the shared
//! group, send [`KeyAgreement::create_public_value`] to the peer, feed the
//! peer's answer to [`KeyAgreement::derive_shared_secret`], then dispose.

pub mod agreement;
pub mod peer;

pub use agreement::KeyAgreement;
pub use peer::normalize_peer_value;
