//! # State Slices
//!
//! One module per isolated state slice. Each module exposes three things:
//!
//! - `XxxState` - the slice's subtree of the composed state
//! - `XxxAction` - a closed enum of every transition the slice accepts
//! - `reduce(&XxxState, XxxAction) -> XxxState` - the pure transition
//!   function; it builds and returns a new value and never mutates its
//!   input
//!
//! Slices that own an async operation consume its lifecycle through a
//! [`Lifecycle`](crate::types::Lifecycle) variant in their action enum:
//! `Pending` sets status=loading and clears the error, `Fulfilled` merges
//! the result per the slice's rule, `Rejected` records the reason.
//!
//! Because the action enums are closed and matched exhaustively, the
//! "unrecognized action" case of a dynamic dispatcher cannot arise: the
//! compiler proves every transition is covered.

pub mod auth;
pub mod destinations;
pub mod favourites;
pub mod items;
pub mod schedules;
pub mod theme;
pub mod users;
