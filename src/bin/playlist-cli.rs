use chrono::Utc;
use clap::{Parser, Subcommand};
use playlist_engine::{
    EntryId, GeneratedPlaylistLoader, InsertRequest, JsonFileLoader, MutatorConfig, Playlist,
    PlaylistMutator, SequentialEntryIds, Track, UserId, APPEND, DEFAULT_MAX_ENTRIES,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "playlist-cli")]
#[command(about = "Edit playlist snapshots stored as JSON", long_about = None)]
struct Cli {
    /// Maximum number of tracks a playlist may hold (can also be set via PLAYLIST_MAX_ENTRIES env var)
    #[arg(long, env = "PLAYLIST_MAX_ENTRIES", default_value_t = DEFAULT_MAX_ENTRIES)]
    max_entries: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a generated playlist snapshot
    Generate {
        /// Number of tracks to generate
        #[arg(short, long, default_value_t = 10)]
        tracks: usize,

        /// Identifier of the first generated entry
        #[arg(long, default_value_t = 0)]
        first_id: i64,

        /// Owner of the playlist
        #[arg(long, default_value_t = 1)]
        owner: i64,

        /// External handle, random if omitted
        #[arg(long)]
        uuid: Option<Uuid>,
    },
    /// Insert a track into a snapshot
    Add {
        /// Snapshot file
        snapshot: PathBuf,

        #[arg(long)]
        track_id: i64,

        #[arg(long)]
        artist_id: i64,

        #[arg(long, default_value = "")]
        title: String,

        /// Duration in seconds
        #[arg(long)]
        duration: Option<f64>,

        /// Target position, -1 appends
        #[arg(short, long, default_value_t = APPEND, allow_negative_numbers = true)]
        index: i64,

        /// Write the result back to the snapshot file
        #[arg(long)]
        in_place: bool,
    },
    /// Remove entries from a snapshot
    Remove {
        /// Snapshot file
        snapshot: PathBuf,

        /// Identifiers of the entries to remove
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Write the result back to the snapshot file
        #[arg(long)]
        in_place: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mutator = PlaylistMutator::from_config(&MutatorConfig::new(cli.max_entries));

    match cli.command {
        Commands::Generate {
            tracks,
            first_id,
            owner,
            uuid,
        } => {
            let playlist = GeneratedPlaylistLoader::new(tracks, first_id)
                .generate(uuid.unwrap_or_else(Uuid::new_v4), UserId(owner));
            println!("{}", serde_json::to_string_pretty(&playlist)?);
        }
        Commands::Add {
            snapshot,
            track_id,
            artist_id,
            title,
            duration,
            index,
            in_place,
        } => {
            let loader = JsonFileLoader::new(&snapshot);
            let mut playlist = loader.read()?;
            let track = Track {
                duration,
                ..Track::new(track_id, artist_id, title, 0.0)
            };

            let mut ids = SequentialEntryIds::after(&playlist);
            let added = mutator.insert(
                &mut playlist,
                InsertRequest::new(vec![track], index, Utc::now()),
                &mut ids,
            )?;
            eprintln!(
                "Added entry {} ({} tracks, {})",
                added
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                playlist.nr_of_tracks,
                playlist.duration_formatted()
            );
            emit(&loader, &playlist, in_place)?;
        }
        Commands::Remove {
            snapshot,
            ids,
            in_place,
        } => {
            let loader = JsonFileLoader::new(&snapshot);
            let mut playlist = loader.read()?;
            let ids: Vec<EntryId> = ids.into_iter().map(EntryId).collect();

            let removed = mutator.delete(&mut playlist, &ids);
            eprintln!(
                "Removed {}/{} entries ({} tracks, {})",
                removed.len(),
                ids.len(),
                playlist.nr_of_tracks,
                playlist.duration_formatted()
            );
            emit(&loader, &playlist, in_place)?;
        }
    }

    Ok(())
}

fn emit(
    loader: &JsonFileLoader,
    playlist: &Playlist,
    in_place: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if in_place {
        loader.write(playlist)?;
    } else {
        println!("{}", serde_json::to_string_pretty(playlist)?);
    }
    Ok(())
}
