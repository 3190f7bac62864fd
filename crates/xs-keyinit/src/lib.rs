//! xs-keyinit — Diffie-Hellman key agreement for the guest agent.
//!
//! Provides the finite-field key agreement behind the `keyinit` exchange
//! a host-side orchestrator uses before sending a one-time administrative
//! credential to a guest: group validation, secret generation, public
//! value and shared secret computation, and erasure of key material.

pub mod crypto;
pub mod error;
pub mod exchange;
pub mod params;

// Re-export primary types
pub use error::{KeyAgreementError, Result};
pub use exchange::{normalize_peer_value, KeyAgreement};
pub use params::GroupParameters;
