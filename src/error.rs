//! Error types for playlist operations.

use thiserror::Error;

use crate::models::InvariantViolation;

/// Failures raised by the mutator.
///
/// Both are raised before the snapshot is touched, so a playlist that
/// produced one of these is still in its original state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The insert would push the playlist over its capacity.
    #[error("Playlist cannot have more than {max_entries} tracks")]
    CapacityExceeded { max_entries: usize },

    /// The insertion point lies outside the playlist.
    #[error("Invalid index: {0}")]
    InvalidIndex(i64),
}

/// Main error type for all playlist operations.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The requested mutation was rejected.
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// No playlist matched the handle and owner.
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// A loaded snapshot does not satisfy the playlist invariants.
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(#[from] InvariantViolation),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type alias for playlist operations.
pub type Result<T> = std::result::Result<T, PlaylistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_the_limit() {
        let err = MutationError::CapacityExceeded { max_entries: 500 };
        assert_eq!(err.to_string(), "Playlist cannot have more than 500 tracks");
    }

    #[test]
    fn test_mutation_error_is_transparent() {
        let err: PlaylistError = MutationError::InvalidIndex(-10).into();
        assert_eq!(err.to_string(), "Invalid index: -10");
    }
}
