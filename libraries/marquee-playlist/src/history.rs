//! Playback history tracking
//!
//! Keeps previously-current tracks for "previous" navigation

use crate::types::Track;
use std::collections::VecDeque;

/// Playback history, optionally bounded
///
/// Most recent entry is at the back. When a bound is set and reached, the
/// oldest entry is discarded. A bound of zero keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct History {
    tracks: VecDeque<Track>,

    /// `None` = unbounded
    max_size: Option<usize>,
}

impl History {
    pub fn new(max_size: Option<usize>) -> Self {
        Self {
            tracks: VecDeque::new(),
            max_size,
        }
    }

    /// Record a track that stopped being current
    pub fn push(&mut self, track: Track) {
        if let Some(max) = self.max_size {
            if max == 0 {
                return;
            }
            if self.tracks.len() >= max {
                self.tracks.pop_front(); // Remove oldest
            }
        }
        self.tracks.push_back(track);
    }

    /// Pop most recent track
    pub fn pop(&mut self) -> Option<Track> {
        self.tracks.pop_back()
    }

    /// All entries, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
