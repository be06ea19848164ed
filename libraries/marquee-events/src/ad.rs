//! Ad-overlay events
//!
//! Directives from the ad layer to the overlay widgets drawn over the player:
//! show or hide overlay ads and info cards, and forget user dismissals.

use crate::bus::{EventBus, Vocabulary};
use crate::global::GlobalBus;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vocabulary of the ad-overlay bus
#[derive(Debug)]
pub enum AdEvents {}

impl Vocabulary for AdEvents {
    const NAME: &'static str = "ad";
}

pub type AdEventBus = EventBus<AdEvents>;

/// Where an overlay ad sits on the player surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    #[default]
    BottomCenter,
}

/// Non-linear ad drawn over the video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayAd {
    pub id: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub click_through_url: Option<String>,

    #[serde(default)]
    pub position: OverlayPosition,

    /// How long to keep it up; `None` until hidden
    #[serde(default)]
    pub display_duration: Option<Duration>,

    /// Whether the viewer may close it
    #[serde(default = "default_true")]
    pub dismissible: bool,
}

impl OverlayAd {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: None,
            click_through_url: None,
            position: OverlayPosition::default(),
            display_duration: None,
            dismissible: true,
        }
    }
}

/// Sponsored info card shown beside the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoCard {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub link_url: Option<String>,
}

impl InfoCard {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            thumbnail_url: None,
            link_url: None,
        }
    }
}

/// Payload of the hide-one events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideRequest {
    pub id: String,
}

impl HideRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

fn default_true() -> bool {
    true
}

event! {
    /// Show an overlay ad (replaces one already shown with the same id)
    ShowOverlayAd("showOverlayAd"): AdEvents => OverlayAd
}
event! {
    HideOverlayAd("hideOverlayAd"): AdEvents => HideRequest
}
event! {
    HideAllOverlayAds("hideAllOverlayAds"): AdEvents => ()
}
event! {
    /// Show an info card (replaces one already shown with the same id)
    ShowInfoCard("showInfoCard"): AdEvents => InfoCard
}
event! {
    HideInfoCard("hideInfoCard"): AdEvents => HideRequest
}
event! {
    HideAllInfoCards("hideAllInfoCards"): AdEvents => ()
}
event! {
    /// Forget which ads and cards the viewer dismissed
    ResetDismissed("resetDismissed"): AdEvents => ()
}

static GLOBAL_AD_BUS: GlobalBus<AdEvents> = GlobalBus::new();

/// Shared process-wide ad bus, built on first use
///
/// Prefer passing an [`AdEventBus`] down explicitly; this is a convenience for
/// code with no composition root.
pub fn global_ad_bus() -> AdEventBus {
    GLOBAL_AD_BUS.get()
}

/// Clear the shared ad bus; the next [`global_ad_bus`] call builds a new one
pub fn reset_global_ad_bus() {
    GLOBAL_AD_BUS.reset();
}
