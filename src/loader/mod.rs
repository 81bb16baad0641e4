//! Playlist loaders.
//!
//! A loader returns the current snapshot of a playlist given its external
//! handle and owner. Two implementations are provided:
//! - [`GeneratedPlaylistLoader`]: fabricates playlists of a fixed size
//! - [`JsonFileLoader`]: reads a serialized snapshot from disk

pub mod generated;
pub mod json_file;

pub use generated::GeneratedPlaylistLoader;
pub use json_file::JsonFileLoader;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Playlist, UserId};

/// Source of playlist snapshots.
///
/// Returned snapshots are expected to be consistent: entry count, dense
/// positions, aggregate duration and unique entry ids.
pub trait PlaylistLoader {
    fn load_playlist(&self, uuid: &Uuid, owner_id: UserId) -> Result<Playlist>;
}

impl<L: PlaylistLoader + ?Sized> PlaylistLoader for &L {
    fn load_playlist(&self, uuid: &Uuid, owner_id: UserId) -> Result<Playlist> {
        (**self).load_playlist(uuid, owner_id)
    }
}
