//! Overlay registry
//!
//! Listens on an ad bus and keeps the list of overlay ads and info cards that
//! should currently be drawn, honoring viewer dismissals.

use crate::ad::{
    AdEventBus, HideAllInfoCards, HideAllOverlayAds, HideInfoCard, HideOverlayAd, InfoCard,
    OverlayAd, ResetDismissed, ShowInfoCard, ShowOverlayAd,
};
use crate::bus::Subscription;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
struct OverlayState {
    /// In the order they were first shown
    ads: Vec<OverlayAd>,
    cards: Vec<InfoCard>,
    dismissed_ads: HashSet<String>,
    dismissed_cards: HashSet<String>,
}

impl OverlayState {
    fn show_ad(&mut self, ad: &OverlayAd) {
        if self.dismissed_ads.contains(&ad.id) {
            debug!("Ignoring dismissed overlay ad {}", ad.id);
            return;
        }
        match self.ads.iter_mut().find(|shown| shown.id == ad.id) {
            Some(shown) => *shown = ad.clone(),
            None => self.ads.push(ad.clone()),
        }
    }

    fn show_card(&mut self, card: &InfoCard) {
        if self.dismissed_cards.contains(&card.id) {
            debug!("Ignoring dismissed info card {}", card.id);
            return;
        }
        match self.cards.iter_mut().find(|shown| shown.id == card.id) {
            Some(shown) => *shown = card.clone(),
            None => self.cards.push(card.clone()),
        }
    }
}

/// Live view of the overlays an ad bus asked for
///
/// Dropping the registry unsubscribes it from the bus.
#[derive(Debug)]
pub struct OverlayRegistry {
    state: Arc<Mutex<OverlayState>>,
    subscriptions: Vec<Subscription>,
}

impl OverlayRegistry {
    /// Subscribe to every ad-overlay event on `bus`
    pub fn attach(bus: &AdEventBus) -> Self {
        let state = Arc::new(Mutex::new(OverlayState::default()));
        let mut subscriptions = Vec::with_capacity(7);

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<ShowOverlayAd, _>(move |ad| lock(&s).show_ad(ad)));

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<HideOverlayAd, _>(move |req| {
            lock(&s).ads.retain(|ad| ad.id != req.id);
        }));

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<HideAllOverlayAds, _>(move |_| lock(&s).ads.clear()));

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<ShowInfoCard, _>(move |card| lock(&s).show_card(card)));

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<HideInfoCard, _>(move |req| {
            lock(&s).cards.retain(|card| card.id != req.id);
        }));

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<HideAllInfoCards, _>(move |_| lock(&s).cards.clear()));

        let s = Arc::clone(&state);
        subscriptions.push(bus.on::<ResetDismissed, _>(move |_| {
            let mut state = lock(&s);
            state.dismissed_ads.clear();
            state.dismissed_cards.clear();
        }));

        Self {
            state,
            subscriptions,
        }
    }

    /// Overlay ads to draw, in the order first shown
    pub fn visible_ads(&self) -> Vec<OverlayAd> {
        lock(&self.state).ads.clone()
    }

    /// Info cards to draw, in the order first shown
    pub fn visible_cards(&self) -> Vec<InfoCard> {
        lock(&self.state).cards.clone()
    }

    /// Viewer closed an overlay ad; it stays hidden until `resetDismissed`
    ///
    /// Returns false for ads that are not dismissible or not shown.
    pub fn dismiss_ad(&self, id: &str) -> bool {
        let mut state = lock(&self.state);
        let Some(pos) = state.ads.iter().position(|ad| ad.id == id) else {
            return false;
        };
        if !state.ads[pos].dismissible {
            return false;
        }
        state.ads.remove(pos);
        state.dismissed_ads.insert(id.to_string());
        true
    }

    /// Viewer closed an info card; it stays hidden until `resetDismissed`
    pub fn dismiss_card(&self, id: &str) -> bool {
        let mut state = lock(&self.state);
        let before = state.cards.len();
        state.cards.retain(|card| card.id != id);
        if state.cards.len() == before {
            return false;
        }
        state.dismissed_cards.insert(id.to_string());
        true
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        let state = lock(&self.state);
        state.dismissed_ads.contains(id) || state.dismissed_cards.contains(id)
    }

    /// Stop listening to the bus
    pub fn detach(self) {}
}

impl Drop for OverlayRegistry {
    fn drop(&mut self) {
        for subscription in &self.subscriptions {
            subscription.unsubscribe();
        }
    }
}

fn lock(state: &Mutex<OverlayState>) -> MutexGuard<'_, OverlayState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
