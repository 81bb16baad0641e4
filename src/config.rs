//! Mutator configuration.

use serde::{Deserialize, Serialize};

/// Capacity used by the command line tool when none is given.
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// Tunables for [`PlaylistMutator`](crate::PlaylistMutator).
///
/// The engine itself has no default capacity; callers pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutatorConfig {
    /// Largest number of entries a playlist may hold.
    pub max_entries: usize,
}

impl MutatorConfig {
    pub fn new(max_entries: usize) -> Self {
        Self { max_entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let config: MutatorConfig = serde_json::from_str(r#"{"max_entries": 10}"#).unwrap();
        assert_eq!(config, MutatorConfig::new(10));
    }

    #[test]
    fn test_config_requires_capacity() {
        assert!(serde_json::from_str::<MutatorConfig>("{}").is_err());
    }
}
