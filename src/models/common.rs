//! Common types shared across all models.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Get the raw integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Identifier of a catalogue track.
    TrackId
);
integer_id!(
    /// Identifier of an artist.
    ArtistId
);
integer_id!(
    /// Identifier of a membership record, unique within one playlist.
    EntryId
);
integer_id!(
    /// Internal identifier of a playlist.
    PlaylistId
);
integer_id!(
    /// Identifier of the user owning a playlist.
    UserId
);

/// Who may see a playlist or one of its entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharingLevel {
    /// Visible to everyone.
    #[default]
    Public,
    /// Visible to the owner only.
    Private,
}

impl SharingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SharingLevel::Public => "public",
            SharingLevel::Private => "private",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&EntryId(42)).unwrap();
        assert_eq!(json, "42");

        let id: TrackId = serde_json::from_str("100").unwrap();
        assert_eq!(id, TrackId(100));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId(7).to_string(), "7");
    }

    #[test]
    fn test_sharing_level_lowercase() {
        assert_eq!(
            serde_json::to_string(&SharingLevel::Private).unwrap(),
            "\"private\""
        );
        assert_eq!(SharingLevel::Public.as_str(), "public");
    }
}
