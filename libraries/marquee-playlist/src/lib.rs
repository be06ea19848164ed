//! Marquee - Playlist Sequencing
//!
//! Platform-agnostic "what plays next" logic for the Marquee media player.
//!
//! This crate provides:
//! - Natural-order and shuffled playback over a track list
//! - Repeat modes (Off, One, All)
//! - A play-next queue that takes precedence over playlist order
//! - Playback history for "previous"
//!
//! The engine is a plain state machine. It never touches a media element; the
//! host reacts to the track-change and queue-end callbacks.
//!
//! # Example
//!
//! ```rust
//! use marquee_playlist::{PlaylistConfig, PlaylistEngine, RepeatMode, Track};
//! use std::sync::{Arc, Mutex};
//!
//! let tracks = vec![
//!     Track::new("a", "https://cdn.example.com/a.mp4").with_title("Opening"),
//!     Track::new("b", "https://cdn.example.com/b.mp4"),
//!     Track::new("c", "https://cdn.example.com/c.mp4"),
//! ];
//!
//! let now_playing = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&now_playing);
//!
//! let mut playlist = PlaylistEngine::new(
//!     tracks,
//!     PlaylistConfig { repeat: RepeatMode::All, ..Default::default() },
//! )
//! .with_on_track_change(move |track, _index| {
//!     *sink.lock().unwrap() = track.id.clone();
//! });
//!
//! playlist.next();
//! assert_eq!(*now_playing.lock().unwrap(), "b");
//!
//! // Queued tracks jump ahead of the playlist order
//! playlist.add_to_queue(Track::new("a", "https://cdn.example.com/a.mp4"));
//! playlist.next();
//! assert_eq!(playlist.current_index(), Some(0));
//!
//! playlist.previous();
//! assert_eq!(playlist.current_track().unwrap().id, "b");
//! ```

mod engine;
mod error;
mod history;
mod queue;
mod shuffle;
pub mod types;

pub use engine::{PlaylistEngine, PlaylistSnapshot, QueueEndCallback, TrackChangeCallback};
pub use error::{PlaylistError, Result};
pub use shuffle::is_permutation;
pub use types::{Chapter, PlaylistConfig, RepeatMode, Track};
