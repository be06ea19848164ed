//! Marquee - Typed Event Buses
//!
//! Small in-process publish/subscribe buses that decouple browser-level
//! signals and ad directives from the components that react to them.
//!
//! This crate provides:
//! - A generic synchronous [`EventBus`] over a closed event vocabulary
//! - The ad-overlay vocabulary ([`ad`]) and the player/device vocabulary ([`player`])
//! - Process-wide default buses with explicit reset
//! - [`VisibilityMonitor`], which turns tab visibility into player events
//! - [`OverlayRegistry`], which tracks the overlays an ad bus asked for
//!
//! # Example
//!
//! ```rust
//! use marquee_events::ad::{AdEventBus, HideAllOverlayAds, OverlayAd, ShowOverlayAd};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let bus = AdEventBus::new();
//! let shown = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&shown);
//! let subscription = bus.on::<ShowOverlayAd, _>(move |ad| {
//!     assert_eq!(ad.id, "spring-sale");
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! bus.emit::<ShowOverlayAd>(OverlayAd::new("spring-sale"));
//! bus.signal::<HideAllOverlayAds>();
//!
//! subscription.unsubscribe();
//! bus.emit::<ShowOverlayAd>(OverlayAd::new("spring-sale"));
//! assert_eq!(shown.load(Ordering::SeqCst), 1);
//! ```

/// Declare an uninhabited event marker type
macro_rules! event {
    ($(#[$meta:meta])* $name:ident($wire:literal): $vocabulary:ty => $payload:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}

        impl $crate::bus::Event for $name {
            type Vocabulary = $vocabulary;
            type Payload = $payload;
            const NAME: &'static str = $wire;
        }
    };
}

pub mod ad;
mod bus;
mod error;
mod global;
mod overlay;
pub mod player;
mod visibility;

pub use bus::{Event, EventBus, ListenerId, Subscription, Vocabulary};
pub use error::{EventsError, Result};
pub use global::GlobalBus;
pub use overlay::OverlayRegistry;
pub use visibility::{VisibilityConfig, VisibilityMonitor};

pub use ad::{global_ad_bus, reset_global_ad_bus, AdEventBus};
pub use player::{global_player_bus, reset_global_player_bus, PlayerEventBus};
