//! Generic typed event bus
//!
//! A bus is parameterized by a [`Vocabulary`]: the closed set of events it
//! carries. Each event is a marker type implementing [`Event`], which names
//! the event and fixes its payload type, so emitting the wrong payload for an
//! event does not compile.
//!
//! Dispatch is synchronous. `emit` snapshots the listener list, releases the
//! registry lock, then calls each listener in registration order. Listeners
//! may therefore subscribe or unsubscribe from inside a callback; changes take
//! effect from the next `emit`. A panicking listener is caught and logged and
//! the remaining listeners still run.

use crate::error::EventsError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, error, trace};

/// A closed set of events carried by one bus type
pub trait Vocabulary: 'static {
    /// Bus name used in logs
    const NAME: &'static str;
}

/// One event of a [`Vocabulary`]
///
/// Implemented by uninhabited marker types; see the `ad` and `player` modules.
pub trait Event: 'static {
    type Vocabulary: Vocabulary;

    /// Payload handed to listeners; `()` for signal-only events
    type Payload: 'static;

    /// Event name used in logs
    const NAME: &'static str;
}

/// Identifies one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type ErasedListener = Arc<dyn Fn(&dyn Any) + Send + Sync>;

#[derive(Default)]
struct Registry {
    /// Keyed by the event marker's `TypeId`; each list is in registration order
    listeners: HashMap<TypeId, Vec<(ListenerId, ErasedListener)>>,
}

impl Registry {
    fn remove(&mut self, key: TypeId, id: ListenerId) -> bool {
        let Some(entries) = self.listeners.get_mut(&key) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.listeners.remove(&key);
        }
        removed
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    // Listeners never run under the lock, so poisoning can't leave it half-updated
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Synchronous multi-listener publish/subscribe over vocabulary `V`
///
/// Cloning yields another handle to the same listener registry.
pub struct EventBus<V: Vocabulary> {
    registry: Arc<Mutex<Registry>>,
    _vocabulary: PhantomData<fn() -> V>,
}

impl<V: Vocabulary> EventBus<V> {
    /// Create a bus with no listeners
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            _vocabulary: PhantomData,
        }
    }

    /// Register `listener` for event `E`
    ///
    /// The returned [`Subscription`] removes exactly this registration.
    pub fn on<E, F>(&self, listener: F) -> Subscription
    where
        E: Event<Vocabulary = V>,
        F: Fn(&E::Payload) + Send + Sync + 'static,
    {
        let erased: ErasedListener = Arc::new(move |payload: &dyn Any| {
            if let Some(payload) = payload.downcast_ref::<E::Payload>() {
                listener(payload);
            }
        });
        self.register::<E>(ListenerId::next(), erased)
    }

    /// Register `listener` for at most one delivery of `E`
    ///
    /// The registration removes itself before the callback runs, so even a
    /// re-entrant `emit` from inside the callback can't deliver twice.
    /// Unsubscribing before the first emission cancels it.
    pub fn once<E, F>(&self, listener: F) -> Subscription
    where
        E: Event<Vocabulary = V>,
        F: Fn(&E::Payload) + Send + Sync + 'static,
    {
        let id = ListenerId::next();
        let key = TypeId::of::<E>();
        let registry = Arc::downgrade(&self.registry);
        let fired = AtomicBool::new(false);

        let erased: ErasedListener = Arc::new(move |payload: &dyn Any| {
            if fired.swap(true, Ordering::SeqCst) {
                return;
            }
            if let Some(registry) = registry.upgrade() {
                lock(&registry).remove(key, id);
            }
            if let Some(payload) = payload.downcast_ref::<E::Payload>() {
                listener(payload);
            }
        });
        self.register::<E>(id, erased)
    }

    /// Remove a registration; unknown or already-removed ids are ignored
    pub fn off<E>(&self, id: ListenerId)
    where
        E: Event<Vocabulary = V>,
    {
        if lock(&self.registry).remove(TypeId::of::<E>(), id) {
            debug!("Removed {} listener {:?} from {} bus", E::NAME, id, V::NAME);
        }
    }

    /// Deliver `payload` to every listener currently registered for `E`
    ///
    /// Never panics because of a listener and never reports listener failures
    /// to the caller.
    pub fn emit<E>(&self, payload: E::Payload)
    where
        E: Event<Vocabulary = V>,
    {
        let snapshot: Vec<ErasedListener> = lock(&self.registry)
            .listeners
            .get(&TypeId::of::<E>())
            .map(|entries| entries.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        trace!(
            "Emitting {} on {} bus to {} listener(s)",
            E::NAME,
            V::NAME,
            snapshot.len()
        );

        for listener in snapshot {
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| listener(&payload as &dyn Any)));
            if let Err(panic) = outcome {
                let err = EventsError::ListenerPanicked {
                    vocabulary: V::NAME,
                    event: E::NAME,
                    message: panic_message(&*panic),
                };
                error!("{}", err);
            }
        }
    }

    /// Emit a payload-less event
    pub fn signal<E>(&self)
    where
        E: Event<Vocabulary = V, Payload = ()>,
    {
        self.emit::<E>(());
    }

    /// Drop every registration for every event
    pub fn remove_all_listeners(&self) {
        lock(&self.registry).listeners.clear();
        debug!("Cleared all listeners on {} bus", V::NAME);
    }

    pub fn listener_count<E>(&self) -> usize
    where
        E: Event<Vocabulary = V>,
    {
        lock(&self.registry)
            .listeners
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }

    pub fn has_listeners<E>(&self) -> bool
    where
        E: Event<Vocabulary = V>,
    {
        self.listener_count::<E>() > 0
    }

    /// Whether two handles share one registry
    pub fn same_bus(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }

    fn register<E>(&self, id: ListenerId, listener: ErasedListener) -> Subscription
    where
        E: Event<Vocabulary = V>,
    {
        let key = TypeId::of::<E>();
        lock(&self.registry)
            .listeners
            .entry(key)
            .or_default()
            .push((id, listener));
        debug!("Registered {} listener {:?} on {} bus", E::NAME, id, V::NAME);

        Subscription {
            registry: Arc::downgrade(&self.registry),
            key,
            id,
        }
    }
}

impl<V: Vocabulary> Clone for EventBus<V> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            _vocabulary: PhantomData,
        }
    }
}

impl<V: Vocabulary> Default for EventBus<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vocabulary> fmt::Debug for EventBus<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = lock(&self.registry);
        let total: usize = registry.listeners.values().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("vocabulary", &V::NAME)
            .field("events", &registry.listeners.len())
            .field("listeners", &total)
            .finish()
    }
}

/// Handle to one registration
///
/// Dropping it does not unsubscribe; call [`unsubscribe`](Self::unsubscribe).
#[derive(Clone)]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    key: TypeId,
    id: ListenerId,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove the registration; repeated calls are no-ops
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).remove(self.key, self.id);
        }
    }

    /// Whether the registration is still live
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            lock(&registry)
                .listeners
                .get(&self.key)
                .is_some_and(|entries| entries.iter().any(|(id, _)| *id == self.id))
        })
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
