//! Core types for playlist sequencing

use crate::error::{PlaylistError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One playable media item
///
/// Tracks are immutable value records owned by the host. The engine only
/// clones and reorders them; identity is the `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: String,

    /// Source locator (URL or path) handed to the media element
    pub src: String,

    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Display artist (or podcast author)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Album (or podcast show) name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Artwork URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,

    /// Duration, when known ahead of playback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,

    /// Chapter markers, ordered by start time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chapters: Vec<Chapter>,
}

impl Track {
    /// Create a track with no display metadata
    pub fn new(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            title: None,
            artist: None,
            album: None,
            artwork_url: None,
            duration: None,
            chapters: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_artwork_url(mut self, url: impl Into<String>) -> Self {
        self.artwork_url = Some(url.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Attach chapters; they are stored sorted by start time
    pub fn with_chapters(mut self, mut chapters: Vec<Chapter>) -> Self {
        chapters.sort_by_key(|c| c.start);
        self.chapters = chapters;
        self
    }

    /// Chapter playing at `position`, if any
    pub fn chapter_at(&self, position: Duration) -> Option<&Chapter> {
        self.chapters
            .iter()
            .rev()
            .find(|chapter| chapter.start <= position)
    }
}

/// Chapter marker inside a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter title
    pub title: String,

    /// Offset from the start of the track
    pub start: Duration,
}

impl Chapter {
    pub fn new(title: impl Into<String>, start: Duration) -> Self {
        Self {
            title: title.into(),
            start,
        }
    }
}

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when the playlist ends
    #[default]
    #[serde(rename = "none")]
    Off,

    /// Loop the current track only
    One,

    /// Loop the entire playlist
    All,
}

/// Configuration for a playlist engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistConfig {
    /// Index of the initially current track (default: 0)
    pub initial_index: usize,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Maximum history size (default: unbounded); zero keeps no history
    pub history_size: Option<usize>,

    /// Seed for shuffle permutations (default: OS entropy)
    pub shuffle_seed: Option<u64>,
}

impl PlaylistConfig {
    /// Decode and validate a JSON config
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.history_size == Some(0) {
            return Err(PlaylistError::InvalidValue {
                field: "history_size",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}
