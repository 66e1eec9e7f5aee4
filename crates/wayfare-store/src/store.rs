//! # Store
//!
//! The dispatch/subscribe wrapper around the composed state tree.
//!
//! ## Thread Safety
//! The tree is wrapped in `Mutex` because:
//! 1. Async operations resume on arbitrary runtime threads
//! 2. Only one dispatch may apply a transition at a time
//! 3. Transitions are pure, so holding the lock for a reduce is cheap
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store Operations                              │
//! │                                                                     │
//! │  Caller Action              Store Call             State Change     │
//! │  ─────────────              ──────────             ────────────     │
//! │                                                                     │
//! │  UI event ─────────────────► dispatch(action) ───► tree = reduce()  │
//! │                                    │                                │
//! │                                    └──► notify subscribers with a   │
//! │                                         fresh snapshot (lock        │
//! │                                         already released)           │
//! │                                                                     │
//! │  Screen mount ─────────────► subscribe(cb) ──────► (read only)      │
//! │  Screen unmount ───────────► handle.unsubscribe()                   │
//! │  Render ───────────────────► get_state() ────────► (clone)          │
//! │                                                                     │
//! │  NOTE: dispatches apply atomically with respect to each other;      │
//! │        no two dispatches interleave mid-transition.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Subscribers run after the state lock is released, so a callback may
//! itself dispatch (the nested dispatch simply runs to completion
//! first) or manage subscriptions without deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tracing::trace;

use wayfare_core::{reduce, Action, AppState};

type Callback = Arc<dyn Fn(&AppState) + Send + Sync>;
type SubscriberList = Mutex<Vec<(u64, Callback)>>;

/// The composed state tree plus its subscription mechanism.
///
/// The store is an explicitly constructed value handed to whatever owns
/// the UI lifecycle; there is no ambient global instance.
pub struct Store {
    state: Mutex<AppState>,
    // Shared with Subscription handles, which hold a Weak to it
    subscribers: Arc<SubscriberList>,
    next_subscriber_id: AtomicU64,
}

impl Store {
    /// Creates a store from an initial tree (defaults or a rehydrated
    /// snapshot).
    pub fn new(initial: AppState) -> Arc<Self> {
        Arc::new(Store {
            state: Mutex::new(initial),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_subscriber_id: AtomicU64::new(0),
        })
    }

    /// Routes the action to its slice, applies the pure transition
    /// atomically, then notifies every subscriber with the new tree.
    pub fn dispatch(&self, action: Action) {
        trace!(?action, "dispatch");

        let snapshot = {
            let mut state = self.state.lock().expect("state mutex poisoned");
            *state = reduce(&state, action);
            state.clone()
        };

        // Snapshot the subscriber list so callbacks can re-enter the
        // store without holding either lock.
        let subscribers: Vec<Callback> = {
            let subscribers = self.subscribers.lock().expect("subscriber mutex poisoned");
            subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for callback in subscribers {
            callback(&snapshot);
        }
    }

    /// Registers a callback invoked on every state change.
    ///
    /// The returned handle removes the callback when unsubscribed;
    /// dropping the handle without unsubscribing leaves the callback
    /// registered for the lifetime of the store.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .expect("subscriber mutex poisoned")
            .push((id, Arc::new(callback)));
        Subscription {
            subscribers: Arc::downgrade(&self.subscribers),
            id,
        }
    }

    /// Returns a clone of the full composed tree.
    pub fn get_state(&self) -> AppState {
        self.state.lock().expect("state mutex poisoned").clone()
    }

    /// Executes a function with read access to the tree.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let mode = store.with_state(|s| s.theme.mode);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.lock().expect("state mutex poisoned");
        f(&state)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Unsubscribe handle returned by [`Store::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    subscribers: Weak<SubscriberList>,
    id: u64,
}

impl Subscription {
    /// Removes the callback from the store's subscriber list.
    ///
    /// A no-op when the store has already been dropped.
    pub fn unsubscribe(self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers
                .lock()
                .expect("subscriber mutex poisoned")
                .retain(|(id, _)| *id != self.id);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
