//! Data models for playlist snapshots.
//!
//! This module contains the structures used to represent tracks,
//! playlists, and the membership records linking the two.

pub mod common;
pub mod playlist;
pub mod track;

// Re-exports for convenience
pub use common::{ArtistId, EntryId, PlaylistId, SharingLevel, TrackId, UserId};
pub use playlist::{InvariantViolation, Playlist, PlaylistEntry, DURATION_TOLERANCE};
pub use track::Track;
