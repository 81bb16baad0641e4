//! Track model.
//!
//! Tracks arrive fully resolved from the catalogue and are never modified
//! by the playlist engine.

use serde::{Deserialize, Serialize};

use super::common::{ArtistId, TrackId};

/// A catalogue track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Track identifier.
    pub id: TrackId,

    /// Performing artist.
    pub artist_id: ArtistId,

    /// Track title.
    pub title: String,

    /// Position of the track on its release.
    #[serde(default)]
    pub track_number_idx: u32,

    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Track {
    /// Create a track with a known duration.
    pub fn new<S: Into<String>>(id: i64, artist_id: i64, title: S, duration: f64) -> Self {
        Self {
            id: TrackId(id),
            artist_id: ArtistId(artist_id),
            title: title.into(),
            track_number_idx: 0,
            duration: Some(duration),
        }
    }

    /// Duration in seconds, zero when unknown.
    pub fn duration_secs(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration_secs().max(0.0) as u64;
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_duration_counts_as_zero() {
        let track = Track {
            duration: None,
            ..Default::default()
        };
        assert_eq!(track.duration_secs(), 0.0);
    }

    #[test]
    fn test_track_duration_formatted() {
        let track = Track::new(1, 4, "A brand new track", 215.0);
        assert_eq!(track.duration_formatted(), "03:35");
    }

    #[test]
    fn test_track_deserializes_without_duration() {
        let track: Track =
            serde_json::from_str(r#"{"id": 100, "artist_id": 4, "title": "test track"}"#).unwrap();
        assert_eq!(track.id, TrackId(100));
        assert_eq!(track.duration, None);
        assert_eq!(track.track_number_idx, 0);
    }
}
