//! # wayfare-api: Async Operations for Wayfare
//!
//! The bridge between the pure state tree and the outside world. Each
//! operation dispatches a `Pending` lifecycle event, performs its work
//! (an HTTP call or an artificial delay), then dispatches exactly one of
//! `Fulfilled` or `Rejected` back into the store.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Operation        External work              Owning slice           │
//! │  ─────────        ─────────────              ────────────           │
//! │  login            POST /auth/login           auth                   │
//! │                   (falls back to the local                          │
//! │                    users registry)                                  │
//! │  fetch_items      GET /services              items                  │
//! │  fetch_schedules  fixed table + delay        schedules              │
//! │  register_user    validation + delay         users                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures never escape an operation: they are converted into state
//! (`status=Failed`, `error=<message>`) at the slice boundary and the
//! store remains valid and inspectable afterwards.

pub mod error;
pub mod identity;
pub mod ops;
pub mod transit;

pub use error::{ApiError, ApiResult};
pub use identity::{HttpIdentityProvider, IdentityConfig, IdentityProvider};
pub use ops::Operations;
pub use transit::{HttpTransitProvider, RouteQuery, TransitConfig, TransitProvider};
