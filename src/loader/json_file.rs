//! Loader reading playlist snapshots from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use super::PlaylistLoader;
use crate::error::{PlaylistError, Result};
use crate::models::{Playlist, UserId};

/// Reads one serialized [`Playlist`] from a file.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the snapshot without checking who owns it.
    pub fn read(&self) -> Result<Playlist> {
        debug!("Reading playlist snapshot from {}", self.path.display());
        let data = fs::read_to_string(&self.path)?;
        let playlist: Playlist = serde_json::from_str(&data)?;
        playlist.check_invariants()?;
        Ok(playlist)
    }

    /// Write `playlist` back to the file, pretty-printed.
    pub fn write(&self, playlist: &Playlist) -> Result<()> {
        debug!("Writing playlist snapshot to {}", self.path.display());
        let data = serde_json::to_string_pretty(playlist)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl PlaylistLoader for JsonFileLoader {
    fn load_playlist(&self, uuid: &Uuid, owner_id: UserId) -> Result<Playlist> {
        let playlist = self.read()?;
        if playlist.uuid != *uuid || playlist.owner_id != owner_id || playlist.deleted {
            return Err(PlaylistError::PlaylistNotFound(uuid.to_string()));
        }
        Ok(playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::GeneratedPlaylistLoader;
    use crate::models::InvariantViolation;

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonFileLoader::new(dir.path().join("playlist.json"));
        let uuid = Uuid::new_v4();
        let playlist = GeneratedPlaylistLoader::new(4, 10).generate(uuid, UserId(3));

        loader.write(&playlist).unwrap();
        let loaded = loader.load_playlist(&uuid, UserId(3)).unwrap();

        assert_eq!(loaded, playlist);
    }

    #[test]
    fn test_wrong_owner_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonFileLoader::new(dir.path().join("playlist.json"));
        let uuid = Uuid::new_v4();
        loader
            .write(&GeneratedPlaylistLoader::new(1, 0).generate(uuid, UserId(3)))
            .unwrap();

        let err = loader.load_playlist(&uuid, UserId(4)).unwrap_err();
        assert!(matches!(err, PlaylistError::PlaylistNotFound(_)));

        let err = loader.load_playlist(&Uuid::nil(), UserId(3)).unwrap_err();
        assert!(matches!(err, PlaylistError::PlaylistNotFound(_)));
    }

    #[test]
    fn test_inconsistent_snapshot_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonFileLoader::new(dir.path().join("playlist.json"));
        let mut playlist = GeneratedPlaylistLoader::new(2, 0).generate(Uuid::new_v4(), UserId(1));
        playlist.nr_of_tracks = 5;
        loader.write(&playlist).unwrap();

        let err = loader.read().unwrap_err();
        assert!(matches!(
            err,
            PlaylistError::CorruptSnapshot(InvariantViolation::CountMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonFileLoader::new(dir.path().join("absent.json"));
        assert!(matches!(loader.read(), Err(PlaylistError::IoError(_))));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileLoader::new(&path).read(),
            Err(PlaylistError::ParseError(_))
        ));
    }
}
