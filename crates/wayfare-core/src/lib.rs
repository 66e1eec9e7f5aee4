//! # wayfare-core: Pure State Logic for Wayfare
//!
//! This crate is the **heart** of the Wayfare travel companion. It holds the
//! whole client-side state tree and every pure transition rule that mutates
//! it, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Wayfare Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                       UI Layer (external)                     │ │
//! │  │   Home ──► Explore ──► Schedules ──► Favourites ──► Profile   │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │ dispatch / subscribe / get_state  │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              wayfare-store (composed tree + gateway)          │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ wayfare-core (THIS CRATE) ★                   │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────────────┐  │ │
//! │  │   │  types  │ │  state  │ │  slices  │ │ data / validation│  │ │
//! │  │   │  Route  │ │ AppState│ │ reducers │ │ reference tables │  │ │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └──────────────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS            │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity and shared types (Route, Departure, Status, ...)
//! - [`state`] - The composed `AppState` tree and root `Action` routing
//! - [`slices`] - One module per state slice: state + actions + reducer
//! - [`data`] - Fixed reference tables (destinations, fallback routes,
//!   schedules)
//! - [`validation`] - Input validation for registration and search
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Reducers**: `reduce(state, action)` returns a new value and
//!    never touches shared state
//! 2. **Closed Actions**: every slice has an exhaustively-matched action
//!    enum - an unknown action type is unrepresentable
//! 3. **No I/O**: network calls and delays live in `wayfare-api`,
//!    durable storage in `wayfare-store`
//!
//! ## Example Usage
//!
//! ```rust
//! use wayfare_core::slices::theme::{self, ThemeAction, ThemeState};
//! use wayfare_core::types::ThemeMode;
//!
//! let state = ThemeState::default();
//! let state = theme::reduce(&state, ThemeAction::Toggle);
//! assert_eq!(state.mode, ThemeMode::Dark);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod data;
pub mod error;
pub mod slices;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use wayfare_core::AppState` instead of
// `use wayfare_core::state::AppState`.

pub use error::ValidationError;
pub use state::{reduce, Action, AppState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum accepted password length for registration.
///
/// Registration rejects shorter passwords before any async work runs.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Maximum accepted length for a destination search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Route selected in the schedules view before the user picks one.
///
/// The selected route is a plain pointer into the schedule table; it is
/// allowed to point at a route with no entries (the empty-result case).
pub const DEFAULT_SELECTED_ROUTE: types::RouteId = types::RouteId(1);
