//! Search policy types.

use crate::error::SearchError;

/// Default iteration cap for the random-walk baseline.
pub const DEFAULT_RANDOM_WALK_CAP: u64 = 10_000;

/// Engine configuration shared by the search algorithms.
///
/// Uniform-cost search and A* are exhaustive and ignore these options; they
/// only bound the random-walk baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on random-walk steps before giving up.
    pub random_walk_cap: u64,
    /// Seed for the random walk. `None` draws from OS entropy, so every call
    /// walks differently.
    pub seed: Option<u64>,
}

impl SearchPolicy {
    /// Reject out-of-range options.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `random_walk_cap` is zero
    /// (a search must be allowed at least the starting iteration).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.random_walk_cap == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "random_walk_cap must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// The default policy with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            random_walk_cap: DEFAULT_RANDOM_WALK_CAP,
            seed: None,
        }
    }
}
