//! Play-next queue
//!
//! Tracks the user explicitly asked to hear next. The queue sits in front of
//! the playlist order: while it has entries, forward navigation drains it
//! first, in FIFO order, regardless of shuffle or repeat.

use crate::types::Track;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct PlayNextQueue {
    tracks: VecDeque<Track>,
}

impl PlayNextQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end of the queue
    pub fn push_back(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Insert ahead of everything already queued
    pub fn push_front(&mut self, track: Track) {
        self.tracks.push_front(track);
    }

    /// Take the head of the queue
    pub fn pop_front(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Remove by position; `None` if out of range
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        self.tracks.remove(index)
    }

    /// Move the entry at `from` to `to`
    ///
    /// Returns false (and leaves the queue alone) if either index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.tracks.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            if let Some(track) = self.tracks.remove(from) {
                self.tracks.insert(to, track);
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
