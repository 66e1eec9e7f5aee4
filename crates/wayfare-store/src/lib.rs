//! # wayfare-store: Store & Persistence for Wayfare
//!
//! The runtime home of the composed state tree. The pure transition
//! rules live in `wayfare-core`; this crate wraps them in a
//! dispatch/subscribe [`Store`] and snapshots a whitelisted subset of
//! slices to durable storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        wayfare-store                                │
//! │                                                                     │
//! │  ┌──────────────┐   ┌──────────────────┐   ┌────────────────────┐  │
//! │  │    Store     │   │ PersistenceGate- │   │   SnapshotStore    │  │
//! │  │ (store.rs)   │   │ way (persist.rs) │   │   (storage.rs)     │  │
//! │  │              │   │                  │   │                    │  │
//! │  │ dispatch     │◄──│ subscribes and   │──►│ FileStore          │  │
//! │  │ subscribe    │   │ writes snapshots │   │ MemoryStore        │  │
//! │  │ get_state    │   │ rehydrates once  │   │ (trait seam)       │  │
//! │  └──────────────┘   └──────────────────┘   └────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Order
//! Rehydration runs **before** the store is constructed: load snapshot,
//! merge into defaults, build the store from the merged tree, then
//! attach the gateway so every subsequent change is written back.

pub mod error;
pub mod persist;
pub mod storage;
pub mod store;

pub use error::PersistError;
pub use persist::{PersistenceGateway, Snapshot, SNAPSHOT_KEY};
pub use storage::{FileStore, MemoryStore, SnapshotStore};
pub use store::{Store, Subscription};
