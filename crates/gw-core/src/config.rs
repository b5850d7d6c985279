//! Generator and history configuration.

use crate::{GwError, GwResult};

/// Tunables shared by the generator and the history store.
///
/// The defaults reproduce the shipped behaviour: 100 sampling attempts per
/// generation, 100 retained history records, and an entropy-seeded RNG.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Upper bound on sample-and-resolve attempts per `generate` call.
    pub max_attempts: u32,

    /// Number of most recent records kept by the history store.
    pub history_limit: usize,

    /// Fixed RNG seed for reproducible runs.  `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
    pub const DEFAULT_HISTORY_LIMIT: usize = 100;

    /// Reject settings that would make generation or history meaningless.
    pub fn validate(&self) -> GwResult<()> {
        if self.max_attempts == 0 {
            return Err(GwError::Config("max_attempts must be at least 1".into()));
        }
        if self.history_limit == 0 {
            return Err(GwError::Config("history_limit must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts:  Self::DEFAULT_MAX_ATTEMPTS,
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            seed:          None,
        }
    }
}
