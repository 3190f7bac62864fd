//! Group parameters — the prime and generator both parties agree on.
//!
//! Parameters are public and exchanged out-of-band. They are kept as
//! decimal strings, the same encoding the key agreement accepts, and can
//! be stored as JSON:
//! ```json
//! { "prime": "162259276829213363391578010288127", "generator": "5" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::bigint;
use crate::error::{KeyAgreementError, Result};
use crate::exchange::agreement::parse_group;

/// Prime used by the host-side agent client: the Mersenne prime 2^107 - 1.
pub const AGENT_PRIME: &str = "162259276829213363391578010288127";

/// Generator used by the host-side agent client.
pub const AGENT_GENERATOR: &str = "5";

/// A Diffie-Hellman group as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParameters {
    pub prime: String,
    pub generator: String,
}

impl GroupParameters {
    pub fn new(prime: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            prime: prime.into(),
            generator: generator.into(),
        }
    }

    /// The group the host-side agent client uses for `keyinit`.
    pub fn agent_default() -> Self {
        Self::new(AGENT_PRIME, AGENT_GENERATOR)
    }

    /// Check the group with the same rules as session construction.
    ///
    /// Returns the modulus bit length. No secret is generated.
    pub fn validate(&self) -> Result<usize> {
        let (modulus, _) = parse_group(&self.prime, &self.generator)?;
        Ok(bigint::bit_length(&modulus))
    }

    /// Load parameters from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            KeyAgreementError::SerializationError(format!("failed to parse group file: {e}"))
        })
    }

    /// Write parameters to a JSON file, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| KeyAgreementError::SerializationError(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for GroupParameters {
    fn default() -> Self {
        Self::agent_default()
    }
}
