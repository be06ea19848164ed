//! Player and device events
//!
//! Browser-level signals (Picture-in-Picture, Cast, tab visibility) relayed to
//! whichever components care, without those components touching the DOM.

use crate::bus::{EventBus, Vocabulary};
use crate::global::GlobalBus;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vocabulary of the player/device bus
#[derive(Debug)]
pub enum PlayerEvents {}

impl Vocabulary for PlayerEvents {
    const NAME: &'static str = "player";
}

pub type PlayerEventBus = EventBus<PlayerEvents>;

/// The tab went to the background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabHiddenPayload {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

/// The tab came back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabVisiblePayload {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub hidden_duration: Duration,
}

/// The viewer was away long enough to warrant a return ad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAdPayload {
    pub hidden_duration: Duration,
}

event! {
    EnterPictureInPicture("enterPictureInPicture"): PlayerEvents => ()
}
event! {
    ExitPictureInPicture("exitPictureInPicture"): PlayerEvents => ()
}
event! {
    CastStart("castStart"): PlayerEvents => ()
}
event! {
    CastStop("castStop"): PlayerEvents => ()
}
event! {
    TabHidden("tabHidden"): PlayerEvents => TabHiddenPayload
}
event! {
    TabVisible("tabVisible"): PlayerEvents => TabVisiblePayload
}
event! {
    TriggerReturnAd("triggerReturnAd"): PlayerEvents => ReturnAdPayload
}

static GLOBAL_PLAYER_BUS: GlobalBus<PlayerEvents> = GlobalBus::new();

/// Shared process-wide player bus, built on first use
pub fn global_player_bus() -> PlayerEventBus {
    GLOBAL_PLAYER_BUS.get()
}

/// Clear the shared player bus; the next [`global_player_bus`] call builds a new one
pub fn reset_global_player_bus() {
    GLOBAL_PLAYER_BUS.reset();
}
