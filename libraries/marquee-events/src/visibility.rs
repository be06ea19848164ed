//! Tab visibility tracking
//!
//! Turns raw hidden/visible notifications from the host into player-bus
//! events, and asks for a return ad when the viewer was away long enough.

use crate::error::Result;
use crate::player::{
    PlayerEventBus, ReturnAdPayload, TabHidden, TabHiddenPayload, TabVisible, TabVisiblePayload,
    TriggerReturnAd,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for [`VisibilityMonitor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Minimum time away before `triggerReturnAd` fires (default: 30s)
    pub return_ad_threshold: Duration,

    /// Whether return ads are requested at all (default: true)
    pub return_ads: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            return_ad_threshold: Duration::from_secs(30),
            return_ads: true,
        }
    }
}

impl VisibilityConfig {
    /// Decode a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Emits `tabHidden`, `tabVisible` and `triggerReturnAd`
#[derive(Debug)]
pub struct VisibilityMonitor {
    bus: PlayerEventBus,
    config: VisibilityConfig,
    /// Timestamp (ms) of the hide that is still open
    hidden_since: Option<u64>,
}

impl VisibilityMonitor {
    pub fn new(bus: PlayerEventBus, config: VisibilityConfig) -> Self {
        Self {
            bus,
            config,
            hidden_since: None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden_since.is_some()
    }

    /// The page became hidden at `timestamp` (ms since epoch)
    ///
    /// Ignored while already hidden.
    pub fn hidden(&mut self, timestamp: u64) {
        if self.hidden_since.is_some() {
            return;
        }
        self.hidden_since = Some(timestamp);
        self.bus.emit::<TabHidden>(TabHiddenPayload { timestamp });
    }

    /// The page became visible at `timestamp` (ms since epoch)
    ///
    /// Ignored unless a hide is open. A clock that went backwards counts as
    /// zero time away.
    pub fn visible(&mut self, timestamp: u64) {
        let Some(since) = self.hidden_since.take() else {
            return;
        };
        let hidden_duration = Duration::from_millis(timestamp.saturating_sub(since));

        self.bus.emit::<TabVisible>(TabVisiblePayload {
            timestamp,
            hidden_duration,
        });

        if self.config.return_ads && hidden_duration >= self.config.return_ad_threshold {
            debug!("Viewer away for {:?}, requesting return ad", hidden_duration);
            self.bus
                .emit::<TriggerReturnAd>(ReturnAdPayload { hidden_duration });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, PartialEq)]
    enum Seen {
        Hidden(u64),
        Visible(u64, Duration),
        ReturnAd(Duration),
    }

    fn recording_bus() -> (PlayerEventBus, Arc<Mutex<Vec<Seen>>>) {
        let bus = PlayerEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&log);
        bus.on::<TabHidden, _>(move |p| sink.lock().unwrap().push(Seen::Hidden(p.timestamp)));
        let sink = Arc::clone(&log);
        bus.on::<TabVisible, _>(move |p| {
            sink.lock()
                .unwrap()
                .push(Seen::Visible(p.timestamp, p.hidden_duration));
        });
        let sink = Arc::clone(&log);
        bus.on::<TriggerReturnAd, _>(move |p| {
            sink.lock().unwrap().push(Seen::ReturnAd(p.hidden_duration));
        });

        (bus, log)
    }

    #[test]
    fn short_absence_has_no_return_ad() {
        let (bus, log) = recording_bus();
        let mut monitor = VisibilityMonitor::new(bus, VisibilityConfig::default());

        monitor.hidden(1_000);
        assert!(monitor.is_hidden());
        monitor.visible(6_000);
        assert!(!monitor.is_hidden());

        assert_eq!(
            *log.lock().unwrap(),
            [
                Seen::Hidden(1_000),
                Seen::Visible(6_000, Duration::from_secs(5))
            ]
        );
    }

    #[test]
    fn long_absence_triggers_return_ad() {
        let (bus, log) = recording_bus();
        let mut monitor = VisibilityMonitor::new(bus, VisibilityConfig::default());

        monitor.hidden(0);
        monitor.visible(30_000);

        assert_eq!(
            log.lock().unwrap().last(),
            Some(&Seen::ReturnAd(Duration::from_secs(30)))
        );
    }

    #[test]
    fn return_ads_can_be_disabled() {
        let (bus, log) = recording_bus();
        let config = VisibilityConfig {
            return_ads: false,
            ..Default::default()
        };
        let mut monitor = VisibilityMonitor::new(bus, config);

        monitor.hidden(0);
        monitor.visible(600_000);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn duplicate_notifications_are_ignored() {
        let (bus, log) = recording_bus();
        let mut monitor = VisibilityMonitor::new(bus, VisibilityConfig::default());

        monitor.visible(10);
        monitor.hidden(100);
        monitor.hidden(200);
        monitor.visible(300);
        monitor.visible(400);

        assert_eq!(
            *log.lock().unwrap(),
            [
                Seen::Hidden(100),
                Seen::Visible(300, Duration::from_millis(200))
            ]
        );
    }

    #[test]
    fn clock_going_backwards_counts_as_zero() {
        let (bus, log) = recording_bus();
        let mut monitor = VisibilityMonitor::new(bus, VisibilityConfig::default());

        monitor.hidden(5_000);
        monitor.visible(4_000);
        assert_eq!(
            log.lock().unwrap().last(),
            Some(&Seen::Visible(4_000, Duration::ZERO))
        );
    }

    #[test]
    fn config_from_json() {
        let config =
            VisibilityConfig::from_json(r#"{ "return_ad_threshold": { "secs": 5, "nanos": 0 } }"#)
                .unwrap();
        assert_eq!(config.return_ad_threshold, Duration::from_secs(5));
        assert!(config.return_ads);

        assert!(VisibilityConfig::from_json("not json").is_err());
    }
}
