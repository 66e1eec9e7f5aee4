//! # Persistence Gateway
//!
//! Selective durable snapshotting of the state tree.
//!
//! ## Persisted Subset
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  AppState                         Snapshot (durable)                │
//! │  ├── auth          ──────────────► auth                             │
//! │  ├── items              (volatile: refetched on launch)             │
//! │  ├── favourites    ──────────────► favourites                       │
//! │  ├── destinations       (volatile: fixed reference data)            │
//! │  ├── schedules          (volatile: fixed reference data)            │
//! │  ├── theme         ──────────────► theme                            │
//! │  └── users         ──────────────► users                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whitelist is the [`Snapshot`] struct itself: a slice participates
//! in persistence exactly when it has a field here, checked at compile
//! time rather than by a runtime string list.
//!
//! ## Snapshot Lifecycle
//! - **Rehydrate** (startup, before the store exists): load, verify the
//!   format version, merge into defaults. Absent, unreadable or
//!   version-mismatched snapshots fall back to defaults - the snapshot
//!   is a cache of user state, never a source of truth worth failing
//!   over.
//! - **Capture** (every state change): clone the whitelisted slices and
//!   write them back, fire-and-forget. A failed write is logged and
//!   superseded by the next change.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use wayfare_core::slices::auth::AuthState;
use wayfare_core::slices::favourites::FavouritesState;
use wayfare_core::slices::theme::ThemeState;
use wayfare_core::slices::users::UsersState;
use wayfare_core::types::Status;
use wayfare_core::AppState;

use crate::error::PersistResult;
use crate::storage::SnapshotStore;
use crate::store::{Store, Subscription};

/// Storage key of the single state snapshot.
pub const SNAPSHOT_KEY: &str = "wayfare-state";

/// Format version of the persisted snapshot.
///
/// Bumped only for incompatible reshapes; additive fields rely on serde
/// defaults instead. A mismatch drops the snapshot entirely.
const SNAPSHOT_VERSION: u32 = 1;

/// The durable subset of the state tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    version: u32,
    #[serde(default)]
    auth: AuthState,
    #[serde(default)]
    favourites: FavouritesState,
    #[serde(default)]
    theme: ThemeState,
    #[serde(default)]
    users: UsersState,
}

impl Snapshot {
    /// Clones the whitelisted slices out of the tree.
    pub fn capture(state: &AppState) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            auth: state.auth.clone(),
            favourites: state.favourites.clone(),
            theme: state.theme.clone(),
            users: state.users.clone(),
        }
    }

    /// Merges the snapshot into `defaults` as the initial tree.
    ///
    /// A persisted `Loading` status is normalized to `Idle`: the
    /// operation it described died with the previous process.
    pub fn apply(self, defaults: AppState) -> AppState {
        let mut auth = self.auth;
        if auth.status.is_loading() {
            auth.status = Status::Idle;
        }
        let mut users = self.users;
        if users.status.is_loading() {
            users.status = Status::Idle;
        }

        AppState {
            auth,
            favourites: self.favourites,
            theme: self.theme,
            users,
            ..defaults
        }
    }
}

/// Rehydrates the whitelisted slices at startup and writes them back on
/// every subsequent change.
pub struct PersistenceGateway {
    storage: Arc<dyn SnapshotStore>,
    key: String,
}

impl PersistenceGateway {
    /// Creates a gateway over the given storage backend using the
    /// default snapshot key.
    pub fn new(storage: Arc<dyn SnapshotStore>) -> Self {
        PersistenceGateway {
            storage,
            key: SNAPSHOT_KEY.to_string(),
        }
    }

    /// Loads the previous snapshot and merges it into `defaults`.
    ///
    /// Runs once, before the store is usable by the UI. Every failure
    /// path deterministically resolves to `defaults`.
    pub async fn rehydrate(&self, defaults: AppState) -> AppState {
        let payload = match self.storage.load(&self.key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(key = %self.key, "no snapshot found, starting from defaults");
                return defaults;
            }
            Err(err) => {
                warn!(key = %self.key, %err, "snapshot load failed, starting from defaults");
                return defaults;
            }
        };

        match serde_json::from_str::<Snapshot>(&payload) {
            Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => {
                debug!(key = %self.key, "snapshot rehydrated");
                snapshot.apply(defaults)
            }
            Ok(snapshot) => {
                warn!(
                    found = snapshot.version,
                    expected = SNAPSHOT_VERSION,
                    "snapshot version mismatch, dropping snapshot"
                );
                defaults
            }
            Err(err) => {
                warn!(key = %self.key, %err, "snapshot unreadable, dropping snapshot");
                defaults
            }
        }
    }

    /// Subscribes to the store and snapshots every change.
    ///
    /// Writes are spawned on the current tokio runtime and not awaited:
    /// persistence must never block a dispatch. Failures are logged and
    /// superseded by the next write.
    ///
    /// ## Panics
    /// Panics if called outside a tokio runtime.
    pub fn attach(self: Arc<Self>, store: &Arc<Store>) -> Subscription {
        let handle = tokio::runtime::Handle::current();
        store.subscribe(move |state| {
            let snapshot = Snapshot::capture(state);
            let gateway = self.clone();
            handle.spawn(async move {
                if let Err(err) = gateway.write(&snapshot).await {
                    warn!(key = %gateway.key, %err, "snapshot write failed");
                }
            });
        })
    }

    /// Serializes and saves one snapshot.
    pub async fn write(&self, snapshot: &Snapshot) -> PersistResult<()> {
        let payload = serde_json::to_string(snapshot)?;
        self.storage.save(&self.key, &payload).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
