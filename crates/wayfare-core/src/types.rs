//! # Domain Types
//!
//! Entity and shared types used throughout the Wayfare state tree.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │     Route       │   │   Departure     │   │   Destination   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (RouteId)   │   │  time           │   │  id             │   │
//! │  │  title, brand   │   │  destination    │   │  name, category │   │
//! │  │  rating, price  │   │  capacity       │   │  highlights     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │     Status      │   │   ThemeMode     │   │    Capacity     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  Idle           │   │  Light          │   │  Low            │   │
//! │  │  Loading        │   │  Dark           │   │  Medium         │   │
//! │  │  Succeeded      │   └─────────────────┘   │  High           │   │
//! │  │  Failed         │                         └─────────────────┘   │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state-resident types are `Clone + PartialEq + Serialize +
//! Deserialize` so slices can be snapshotted and compared in tests. The
//! closed enums (`Status`, `ThemeMode`, `Capacity`) make their invariants
//! unrepresentable to break: there is no way to hold a theme mode outside
//! {light, dark}, and serde rejects unknown strings at the boundary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a transport route.
///
/// Route ids come from the transit provider (or the fallback dataset) and
/// key the schedule table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct RouteId(pub u32);

impl RouteId {
    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a point-of-interest destination.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct DestinationId(pub u32);

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Async Status
// =============================================================================

/// Lifecycle status of a slice's most recent async operation.
///
/// ## Transitions
/// `Idle → Loading → {Succeeded, Failed}`. A new operation restarts the
/// cycle at `Loading`; the status is never cleared back to `Idle` by a
/// completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No operation has run yet.
    #[default]
    Idle,
    /// An operation is in flight.
    Loading,
    /// The last operation completed successfully.
    Succeeded,
    /// The last operation failed; the slice's `error` holds the reason.
    Failed,
}

impl Status {
    /// True while an operation is in flight.
    #[inline]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }
}

// =============================================================================
// Async Lifecycle Event
// =============================================================================

/// One of the three lifecycle events an async operation dispatches.
///
/// The owning slice consumes these through a fixed three-case match:
/// `Pending` before the work starts, then exactly one of `Fulfilled` or
/// `Rejected`. The rejection payload is the human-readable reason shown
/// by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    /// Emitted before the underlying work starts.
    Pending,
    /// Emitted on success with the operation's result.
    Fulfilled(T),
    /// Emitted on failure with the most specific available message.
    Rejected(String),
}

// =============================================================================
// Theme
// =============================================================================

/// The UI colour scheme. Exactly one of two values at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode. Applying twice is the identity.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

// =============================================================================
// Transport Routes
// =============================================================================

/// A transport route or service shown on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Route {
    /// Unique identifier within the current list.
    pub id: RouteId,

    /// Display title, e.g. "Route 15".
    pub title: String,

    /// Longer description, e.g. the endpoints of the service.
    pub description: String,

    /// Operator brand, e.g. "TfL".
    pub brand: String,

    /// Small image URL for list rows.
    pub thumbnail: String,

    /// Larger image URLs for the details screen.
    pub images: Vec<String>,

    /// Aggregate rating out of 5.
    pub rating: f32,

    /// Display price, already formatted with its currency ("£1.75").
    pub price: String,
}

// =============================================================================
// Schedules
// =============================================================================

/// Relative occupancy of a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Capacity {
    Low,
    Medium,
    High,
}

/// A single departure in a route's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Departure {
    /// Departure time as shown ("06:30").
    pub time: String,

    /// Terminal destination of this departure.
    pub destination: String,

    /// Journey duration as shown ("12 mins").
    pub duration: String,

    /// Expected occupancy.
    pub capacity: Capacity,
}

// =============================================================================
// Destinations
// =============================================================================

/// A point of interest in the explore view.
///
/// Destinations are a fixed reference dataset; search filters over
/// `name`, `category` and `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub category: String,
    /// Distance from the city centre, as shown ("2.1 km").
    pub distance: String,
    pub description: String,
    /// Hero image URL.
    pub image: String,
    /// Aggregate rating out of 5.
    pub rating: f32,
    /// Approximate visitor count, as shown ("15K+").
    pub visitors: String,
    /// Short feature tags ("WiFi", "Shops", ...).
    pub highlights: Vec<String>,
}

// =============================================================================
// Users & Sessions
// =============================================================================

/// A locally registered account.
///
/// The password is kept verbatim because the local registry doubles as
/// the offline login fallback; nothing ever leaves the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Timestamp-derived identifier assigned at registration.
    pub id: i64,
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar URL, when the identity provider supplies one.
    pub image: Option<String>,
}

impl From<&Credential> for UserProfile {
    /// Builds the profile a locally registered user signs in with.
    fn from(cred: &Credential) -> Self {
        UserProfile {
            id: cred.id,
            username: cred.username.clone(),
            email: cred.email.clone(),
            first_name: cred.first_name.clone(),
            last_name: cred.last_name.clone(),
            image: None,
        }
    }
}

/// An authenticated session.
///
/// ## Invariant
/// A profile exists exactly when tokens exist: the auth slice stores
/// `Option<Session>`, so "user without token" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
