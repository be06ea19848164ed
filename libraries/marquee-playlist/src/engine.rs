//! Playlist engine - sequencing core
//!
//! Decides what plays next and previous, honoring the play-next queue,
//! shuffle, repeat and history.

use crate::{
    history::History,
    queue::PlayNextQueue,
    shuffle::{is_permutation, shuffled_indices},
    types::{PlaylistConfig, RepeatMode, Track},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Invoked with the new current track and its index whenever it changes
pub type TrackChangeCallback = Box<dyn FnMut(&Track, usize) + Send>;

/// Invoked when forward navigation runs off the end with repeat off
pub type QueueEndCallback = Box<dyn FnMut() + Send>;

/// Playlist sequencing state machine
///
/// Owns:
/// - the track list (natural order)
/// - the current track pointer
/// - the shuffle permutation
/// - the repeat mode
/// - the play-next queue
/// - the history of previously-current tracks
///
/// Invalid navigation (out-of-range index, empty playlist, a queued or
/// historical track no longer in the list) is ignored rather than reported.
pub struct PlaylistEngine {
    tracks: Vec<Track>,
    /// Only meaningful while `< tracks.len()`
    current_index: usize,

    shuffle_enabled: bool,
    /// Permutation of `0..tracks.len()` while shuffle is on, empty otherwise
    shuffled_order: Vec<usize>,
    repeat: RepeatMode,

    queue: PlayNextQueue,
    history: History,

    rng: StdRng,

    on_track_change: Option<TrackChangeCallback>,
    on_queue_end: Option<QueueEndCallback>,
}

impl PlaylistEngine {
    /// Create an engine over `tracks`
    pub fn new(tracks: Vec<Track>, config: PlaylistConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut engine = Self {
            tracks,
            current_index: config.initial_index,
            shuffle_enabled: config.shuffle,
            shuffled_order: Vec::new(),
            repeat: config.repeat,
            queue: PlayNextQueue::new(),
            history: History::new(config.history_size),
            rng,
            on_track_change: None,
            on_queue_end: None,
        };

        if engine.shuffle_enabled {
            engine.reshuffle();
        }

        engine
    }

    pub fn with_on_track_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Track, usize) + Send + 'static,
    {
        self.set_on_track_change(callback);
        self
    }

    pub fn with_on_queue_end<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.set_on_queue_end(callback);
        self
    }

    pub fn set_on_track_change<F>(&mut self, callback: F)
    where
        F: FnMut(&Track, usize) + Send + 'static,
    {
        self.on_track_change = Some(Box::new(callback));
    }

    pub fn set_on_queue_end<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_queue_end = Some(Box::new(callback));
    }

    // ===== Navigation =====

    /// Jump to the track at `index`
    ///
    /// Out-of-range indices are ignored. The outgoing track goes to history.
    pub fn go_to_track(&mut self, index: usize) {
        if index >= self.tracks.len() {
            debug!(
                "Ignoring go_to_track({}) on playlist of {}",
                index,
                self.tracks.len()
            );
            return;
        }
        self.set_current(index, true);
    }

    /// Advance to the next track
    ///
    /// Resolution order:
    /// 1. Head of the play-next queue
    /// 2. Repeat one: re-announce the current track
    /// 3. Next entry in shuffle or natural order, wrapping under repeat all;
    ///    otherwise signal queue end
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if let Some(queued) = self.queue.pop_front() {
            match self.position_of(&queued.id) {
                Some(index) => {
                    debug!("Playing queued track {} at index {}", queued.id, index);
                    self.set_current(index, true);
                }
                None => warn!("Queued track {} is not in the playlist, dropping it", queued.id),
            }
            return;
        }

        if self.repeat == RepeatMode::One {
            self.notify_track_change();
            return;
        }

        if self.tracks.is_empty() {
            return;
        }

        match self.forward_index() {
            Some(index) => self.set_current(index, true),
            None => {
                debug!("Reached end of playlist");
                if let Some(callback) = self.on_queue_end.as_mut() {
                    callback();
                }
            }
        }
    }

    /// Go back to the previous track
    ///
    /// History wins when it has entries; the outgoing track is not recorded
    /// so walking back never re-adds what was just popped. With an empty
    /// history, steps backward through shuffle or natural order; the start of
    /// a non-repeating playlist is a silent no-op.
    pub fn previous(&mut self) {
        if let Some(previous) = self.history.pop() {
            match self.position_of(&previous.id) {
                Some(index) => self.set_current(index, false),
                None => warn!(
                    "History track {} is not in the playlist, dropping it",
                    previous.id
                ),
            }
            return;
        }

        if let Some(index) = self.backward_index() {
            self.set_current(index, false);
        }
    }

    // ===== Shuffle & Repeat =====

    /// Flip shuffle; enabling draws a fresh permutation
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle_enabled);
    }

    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle_enabled == enabled {
            return;
        }

        self.shuffle_enabled = enabled;
        if enabled {
            self.reshuffle();
        } else {
            self.shuffled_order.clear();
        }
        debug!("Shuffle {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Takes effect on the next navigation call
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    // ===== Track list =====

    /// Replace the track list
    ///
    /// The current track is kept by id when it survives; otherwise the
    /// pointer resets to the first track. Does not announce a track change.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        let current_id = self.current_track().map(|t| t.id.clone());
        let len_changed = tracks.len() != self.tracks.len();

        self.tracks = tracks;
        self.current_index = current_id
            .and_then(|id| self.position_of(&id))
            .unwrap_or(0);

        if self.shuffle_enabled && len_changed {
            self.reshuffle();
        }
    }

    // ===== Queue =====

    /// Append to the play-next queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push_back(track);
    }

    /// Put a track at the head of the play-next queue
    pub fn add_to_queue_next(&mut self, track: Track) {
        self.queue.push_front(track);
    }

    /// Remove a queue entry; out-of-range is a no-op
    pub fn remove_from_queue(&mut self, index: usize) -> Option<Track> {
        self.queue.remove(index)
    }

    /// Move a queue entry; returns false when either index is out of range
    pub fn reorder_queue(&mut self, from: usize, to: usize) -> bool {
        self.queue.reorder(from, to)
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ===== State Queries =====

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index of the current track, `None` when there is none
    pub fn current_index(&self) -> Option<usize> {
        (self.current_index < self.tracks.len()).then_some(self.current_index)
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle_enabled
    }

    /// Shuffle permutation; empty while shuffle is off
    pub fn shuffled_order(&self) -> &[usize] {
        &self.shuffled_order
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn queue(&self) -> impl Iterator<Item = &Track> {
        self.queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// History, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Track> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether `next()` has somewhere to go
    pub fn has_next(&self) -> bool {
        if !self.queue.is_empty() {
            return true;
        }
        if self.tracks.is_empty() {
            return false;
        }
        match self.repeat {
            RepeatMode::One => self.current_track().is_some(),
            RepeatMode::All => true,
            RepeatMode::Off => self.peek_forward_index().is_some(),
        }
    }

    /// Whether `previous()` has somewhere to go
    pub fn has_previous(&self) -> bool {
        !self.history.is_empty() || self.backward_index().is_some()
    }

    /// Serializable copy of the whole state
    pub fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            tracks: self.tracks.clone(),
            current_index: self.current_index(),
            shuffle_enabled: self.shuffle_enabled,
            shuffled_order: self.shuffled_order.clone(),
            repeat_mode: self.repeat,
            queue: self.queue.iter().cloned().collect(),
            history: self.history.iter().cloned().collect(),
        }
    }

    /// Load state saved with [`snapshot`](Self::snapshot)
    ///
    /// A stale shuffle order is regenerated. Callbacks are kept and not invoked.
    pub fn restore(&mut self, snapshot: PlaylistSnapshot) {
        self.tracks = snapshot.tracks;
        self.current_index = snapshot.current_index.unwrap_or(self.tracks.len());
        self.shuffle_enabled = snapshot.shuffle_enabled;
        self.repeat = snapshot.repeat_mode;

        self.shuffled_order = snapshot.shuffled_order;
        if !self.shuffle_enabled {
            self.shuffled_order.clear();
        } else if !is_permutation(&self.shuffled_order, self.tracks.len()) {
            warn!("Restored shuffle order does not match the playlist, reshuffling");
            self.reshuffle();
        }

        self.queue.clear();
        for track in snapshot.queue {
            self.queue.push_back(track);
        }

        self.history.clear();
        for track in snapshot.history {
            self.history.push(track);
        }
    }

    // ===== Internals =====

    fn position_of(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    fn position_in_shuffle(&self) -> Option<usize> {
        self.shuffled_order
            .iter()
            .position(|&index| index == self.current_index)
    }

    fn reshuffle(&mut self) {
        self.shuffled_order = shuffled_indices(self.tracks.len(), &mut self.rng);
    }

    /// Next index without wrapping
    fn peek_forward_index(&self) -> Option<usize> {
        if self.shuffle_enabled {
            let next = self.position_in_shuffle().map_or(0, |pos| pos + 1);
            self.shuffled_order.get(next).copied()
        } else {
            let next = if self.current_track().is_some() {
                self.current_index + 1
            } else {
                0
            };
            (next < self.tracks.len()).then_some(next)
        }
    }

    /// Next index, wrapping under repeat all
    ///
    /// A shuffled wrap draws a new permutation first.
    fn forward_index(&mut self) -> Option<usize> {
        debug_assert!(
            !self.shuffle_enabled || is_permutation(&self.shuffled_order, self.tracks.len())
        );

        if let Some(index) = self.peek_forward_index() {
            return Some(index);
        }
        if self.repeat != RepeatMode::All {
            return None;
        }

        if self.shuffle_enabled {
            self.reshuffle();
            self.shuffled_order.first().copied()
        } else {
            Some(0)
        }
    }

    /// Previous index, wrapping under repeat all
    fn backward_index(&self) -> Option<usize> {
        self.current_track()?;

        if self.shuffle_enabled {
            match self.position_in_shuffle()? {
                0 if self.repeat == RepeatMode::All => self.shuffled_order.last().copied(),
                0 => None,
                pos => self.shuffled_order.get(pos - 1).copied(),
            }
        } else if self.current_index > 0 {
            Some(self.current_index - 1)
        } else if self.repeat == RepeatMode::All {
            Some(self.tracks.len() - 1)
        } else {
            None
        }
    }

    fn set_current(&mut self, index: usize, record_history: bool) {
        if record_history {
            if let Some(outgoing) = self.current_track().cloned() {
                self.history.push(outgoing);
            }
        }
        self.current_index = index;
        self.notify_track_change();
    }

    fn notify_track_change(&mut self) {
        let Some(track) = self.tracks.get(self.current_index) else {
            return;
        };
        debug!("Track changed: {} (index {})", track.id, self.current_index);
        if let Some(callback) = self.on_track_change.as_mut() {
            callback(track, self.current_index);
        }
    }
}

impl Default for PlaylistEngine {
    fn default() -> Self {
        Self::new(Vec::new(), PlaylistConfig::default())
    }
}

impl fmt::Debug for PlaylistEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistEngine")
            .field("tracks", &self.tracks.len())
            .field("current_index", &self.current_index())
            .field("shuffle_enabled", &self.shuffle_enabled)
            .field("repeat", &self.repeat)
            .field("queue", &self.queue.len())
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

/// Read-only copy of the engine state, for rendering or persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSnapshot {
    pub tracks: Vec<Track>,
    pub current_index: Option<usize>,
    pub shuffle_enabled: bool,
    pub shuffled_order: Vec<usize>,
    pub repeat_mode: RepeatMode,
    pub queue: Vec<Track>,
    pub history: Vec<Track>,
}

impl PlaylistSnapshot {
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current_index?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter()
            .map(|id| Track::new(*id, format!("/media/{id}.mp3")))
            .collect()
    }

    fn seeded(ids: &[&str], repeat: RepeatMode) -> PlaylistEngine {
        PlaylistEngine::new(
            tracks(ids),
            PlaylistConfig {
                repeat,
                shuffle_seed: Some(11),
                ..Default::default()
            },
        )
    }

    fn history_ids(engine: &PlaylistEngine) -> Vec<String> {
        engine.history().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn empty_engine_has_no_current_track() {
        let mut engine = PlaylistEngine::default();
        assert!(engine.current_track().is_none());
        assert_eq!(engine.current_index(), None);

        engine.next();
        engine.previous();
        engine.go_to_track(0);
        assert_eq!(engine.current_index(), None);
        assert!(!engine.has_next());
        assert!(!engine.has_previous());
    }

    #[test]
    fn go_to_track_records_outgoing() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off);
        engine.go_to_track(2);
        assert_eq!(engine.current_index(), Some(2));
        assert_eq!(history_ids(&engine), ["a"]);
    }

    #[test]
    fn go_to_track_out_of_range_is_ignored() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let mut engine = seeded(&["a", "b"], RepeatMode::Off)
            .with_on_track_change(move |_, _| *counter.lock().unwrap() += 1);

        engine.go_to_track(2);
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(engine.history_len(), 0);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn previous_does_not_push_outgoing() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off);
        engine.next();
        engine.next();
        assert_eq!(history_ids(&engine), ["a", "b"]);

        engine.previous();
        assert_eq!(engine.current_track().unwrap().id, "b");
        assert_eq!(history_ids(&engine), ["a"]);
    }

    #[test]
    fn previous_without_history_steps_back() {
        let mut engine = PlaylistEngine::new(
            tracks(&["a", "b", "c"]),
            PlaylistConfig {
                initial_index: 2,
                ..Default::default()
            },
        );
        engine.previous();
        assert_eq!(engine.current_index(), Some(1));
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn previous_at_start_without_repeat_is_noop() {
        let ends = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&ends);
        let mut engine = seeded(&["a", "b"], RepeatMode::Off)
            .with_on_queue_end(move || *counter.lock().unwrap() += 1);

        engine.previous();
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(*ends.lock().unwrap(), 0);
        assert!(!engine.has_previous());
    }

    #[test]
    fn previous_at_start_with_repeat_all_wraps() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::All);
        engine.previous();
        assert_eq!(engine.current_index(), Some(2));
    }

    #[test]
    fn stale_queue_head_is_dropped() {
        let mut engine = seeded(&["a", "b"], RepeatMode::Off);
        engine.add_to_queue(Track::new("ghost", "/media/ghost.mp3"));
        engine.add_to_queue(Track::new("b", "/media/b.mp3"));

        engine.next();
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(engine.queue_len(), 1);
        assert_eq!(engine.history_len(), 0);

        engine.next();
        assert_eq!(engine.current_index(), Some(1));
        assert_eq!(engine.queue_len(), 0);
    }

    #[test]
    fn stale_history_entry_is_dropped() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off);
        engine.next();
        engine.next();
        engine.set_tracks(tracks(&["b", "c"]));
        assert_eq!(engine.current_track().unwrap().id, "c");

        engine.previous();
        assert_eq!(engine.current_track().unwrap().id, "b");
        engine.previous();
        // "a" is gone: popped and ignored
        assert_eq!(engine.current_track().unwrap().id, "b");
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn toggle_shuffle_builds_and_clears_order() {
        let mut engine = seeded(&["a", "b", "c", "d"], RepeatMode::Off);
        assert!(engine.shuffled_order().is_empty());

        engine.toggle_shuffle();
        assert!(engine.shuffle_enabled());
        assert!(is_permutation(engine.shuffled_order(), 4));

        engine.toggle_shuffle();
        assert!(!engine.shuffle_enabled());
        assert!(engine.shuffled_order().is_empty());
    }

    #[test]
    fn set_tracks_reshuffles_on_size_change() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off);
        engine.set_shuffle(true);

        engine.set_tracks(tracks(&["a", "b", "c", "d", "e"]));
        assert!(is_permutation(engine.shuffled_order(), 5));
    }

    #[test]
    fn set_tracks_follows_current_by_id() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off);
        engine.go_to_track(1);

        engine.set_tracks(tracks(&["z", "c", "b"]));
        assert_eq!(engine.current_index(), Some(2));

        engine.set_tracks(tracks(&["x", "y"]));
        assert_eq!(engine.current_index(), Some(0));
    }

    #[test]
    fn set_tracks_does_not_announce() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let mut engine = seeded(&["a"], RepeatMode::Off)
            .with_on_track_change(move |_, _| *counter.lock().unwrap() += 1);

        engine.set_tracks(tracks(&["b", "c"]));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn shuffled_forward_walks_permutation() {
        let mut engine = seeded(&["a", "b", "c", "d", "e"], RepeatMode::Off);
        engine.set_shuffle(true);
        let order = engine.shuffled_order().to_vec();

        engine.go_to_track(order[0]);
        for &expected in &order[1..] {
            engine.next();
            assert_eq!(engine.current_index(), Some(expected));
        }
        assert!(!engine.has_next());
    }

    #[test]
    fn shuffled_end_without_repeat_signals_queue_end() {
        let ends = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&ends);
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off)
            .with_on_queue_end(move || *counter.lock().unwrap() += 1);
        engine.set_shuffle(true);
        let last = *engine.shuffled_order().last().unwrap();

        engine.go_to_track(last);
        engine.next();
        assert_eq!(engine.current_index(), Some(last));
        assert_eq!(*ends.lock().unwrap(), 1);
    }

    #[test]
    fn shuffled_wrap_with_repeat_all_draws_new_order() {
        let mut engine = seeded(&["a", "b", "c", "d", "e", "f"], RepeatMode::All);
        engine.set_shuffle(true);
        let last = *engine.shuffled_order().last().unwrap();

        engine.go_to_track(last);
        engine.next();

        let order = engine.shuffled_order().to_vec();
        assert!(is_permutation(&order, 6));
        assert_eq!(engine.current_index(), Some(order[0]));
    }

    #[test]
    fn shuffled_previous_without_history_walks_back() {
        let mut engine = seeded(&["a", "b", "c", "d"], RepeatMode::Off);
        engine.set_shuffle(true);
        let order = engine.shuffled_order().to_vec();

        engine.go_to_track(order[2]);
        engine.clear_history();

        engine.previous();
        assert_eq!(engine.current_index(), Some(order[1]));
        engine.previous();
        assert_eq!(engine.current_index(), Some(order[0]));
        engine.previous();
        assert_eq!(engine.current_index(), Some(order[0]));
    }

    #[test]
    fn shuffled_previous_at_start_with_repeat_all_wraps() {
        let mut engine = seeded(&["a", "b", "c", "d", "e"], RepeatMode::All);
        engine.set_shuffle(true);
        let order = engine.shuffled_order().to_vec();

        engine.go_to_track(order[0]);
        engine.clear_history();
        engine.previous();

        assert_eq!(engine.current_index(), order.last().copied());
        assert_eq!(engine.shuffled_order(), order.as_slice());
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn zero_history_size_records_nothing() {
        let mut engine = PlaylistEngine::new(
            tracks(&["a", "b", "c"]),
            PlaylistConfig {
                history_size: Some(0),
                ..Default::default()
            },
        );

        engine.next();
        engine.go_to_track(2);
        engine.next();
        assert_eq!(engine.current_index(), Some(2));
        assert_eq!(engine.history_len(), 0);

        engine.previous();
        assert_eq!(engine.current_index(), Some(1));
    }

    #[test]
    fn bounded_history_from_config() {
        let mut engine = PlaylistEngine::new(
            tracks(&["a", "b", "c", "d"]),
            PlaylistConfig {
                history_size: Some(2),
                ..Default::default()
            },
        );
        engine.next();
        engine.next();
        engine.next();
        assert_eq!(history_ids(&engine), ["b", "c"]);
    }

    #[test]
    fn add_to_queue_next_plays_first() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::Off);
        engine.add_to_queue(tracks(&["b"]).remove(0));
        engine.add_to_queue_next(tracks(&["c"]).remove(0));

        engine.next();
        assert_eq!(engine.current_track().unwrap().id, "c");
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut engine = seeded(&["a", "b", "c"], RepeatMode::All);
        engine.set_shuffle(true);
        engine.next();
        engine.add_to_queue(tracks(&["a"]).remove(0));

        let snapshot = engine.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: PlaylistSnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = PlaylistEngine::default();
        restored.restore(decoded);
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(
            restored.current_track().map(|t| t.id.clone()),
            snapshot.current_track().map(|t| t.id.clone())
        );
    }

    #[test]
    fn restore_repairs_bad_shuffle_order() {
        let mut engine = PlaylistEngine::default();
        engine.restore(PlaylistSnapshot {
            tracks: tracks(&["a", "b", "c"]),
            current_index: Some(1),
            shuffle_enabled: true,
            shuffled_order: vec![0, 0, 7],
            repeat_mode: RepeatMode::Off,
            queue: Vec::new(),
            history: Vec::new(),
        });
        assert!(is_permutation(engine.shuffled_order(), 3));
        assert_eq!(engine.current_index(), Some(1));
    }
}
