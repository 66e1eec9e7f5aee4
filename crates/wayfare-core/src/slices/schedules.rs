//! # Schedules Slice
//!
//! Timetables keyed by route id plus the route currently selected in the
//! schedules view.
//!
//! The table starts preloaded with the fixed reference timetable; a
//! fetch inserts (or refreshes) the entry for its route. The selected
//! route is a plain pointer and may reference a route with no entries -
//! the UI renders that as an empty schedule, not an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::data::reference_schedules;
use crate::types::{Departure, Lifecycle, RouteId, Status};
use crate::DEFAULT_SELECTED_ROUTE;

/// Schedules-view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SchedulesState {
    /// Departures per route.
    pub schedules: BTreeMap<RouteId, Vec<Departure>>,

    /// Route whose schedule the view shows.
    pub selected_route: RouteId,

    /// Lifecycle status of the most recent fetch.
    pub status: Status,

    /// True while a fetch is in flight.
    pub loading: bool,

    /// Why the most recent fetch failed.
    pub error: Option<String>,
}

impl Default for SchedulesState {
    fn default() -> Self {
        SchedulesState {
            schedules: reference_schedules(),
            selected_route: DEFAULT_SELECTED_ROUTE,
            status: Status::Idle,
            loading: false,
            error: None,
        }
    }
}

impl SchedulesState {
    /// Departures for the selected route; empty when the route has none.
    pub fn selected_departures(&self) -> &[Departure] {
        self.schedules
            .get(&self.selected_route)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Transitions accepted by the schedules slice.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulesAction {
    /// Reassigns the selection pointer. No validation: the id may have
    /// no entries.
    SetSelectedRoute(RouteId),

    /// Lifecycle of a schedule fetch for one route.
    Fetch {
        route: RouteId,
        lifecycle: Lifecycle<Vec<Departure>>,
    },
}

/// Pure transition function for [`SchedulesState`].
pub fn reduce(state: &SchedulesState, action: SchedulesAction) -> SchedulesState {
    match action {
        SchedulesAction::SetSelectedRoute(route) => SchedulesState {
            selected_route: route,
            ..state.clone()
        },
        SchedulesAction::Fetch { lifecycle, route } => match lifecycle {
            Lifecycle::Pending => SchedulesState {
                status: Status::Loading,
                loading: true,
                error: None,
                ..state.clone()
            },
            Lifecycle::Fulfilled(departures) => {
                let mut schedules = state.schedules.clone();
                schedules.insert(route, departures);
                SchedulesState {
                    schedules,
                    status: Status::Succeeded,
                    loading: false,
                    ..state.clone()
                }
            }
            Lifecycle::Rejected(reason) => SchedulesState {
                status: Status::Failed,
                loading: false,
                error: Some(reason),
                ..state.clone()
            },
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capacity;

    #[test]
    fn test_default_is_preloaded_with_reference_table() {
        let state = SchedulesState::default();
        assert_eq!(state.selected_route, DEFAULT_SELECTED_ROUTE);
        assert!(!state.selected_departures().is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_set_selected_route_accepts_unknown_routes() {
        let state = reduce(
            &SchedulesState::default(),
            SchedulesAction::SetSelectedRoute(RouteId(999)),
        );
        assert_eq!(state.selected_route, RouteId(999));
        // Empty-result case, not an error
        assert!(state.selected_departures().is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fetch_lifecycle_inserts_into_table() {
        let state = SchedulesState::default();
        let route = RouteId(42);

        let pending = reduce(
            &state,
            SchedulesAction::Fetch {
                route,
                lifecycle: Lifecycle::Pending,
            },
        );
        assert!(pending.loading);
        assert_eq!(pending.status, Status::Loading);

        let departures = vec![Departure {
            time: "09:00".to_string(),
            destination: "Oxford Street".to_string(),
            duration: "10 mins".to_string(),
            capacity: Capacity::Medium,
        }];
        let fulfilled = reduce(
            &pending,
            SchedulesAction::Fetch {
                route,
                lifecycle: Lifecycle::Fulfilled(departures.clone()),
            },
        );
        assert!(!fulfilled.loading);
        assert_eq!(fulfilled.status, Status::Succeeded);
        assert_eq!(fulfilled.schedules[&route], departures);
        // Preloaded entries survive the merge
        assert!(fulfilled.schedules.contains_key(&RouteId(1)));
    }

    #[test]
    fn test_fetch_rejected_records_error() {
        let state = reduce(
            &SchedulesState::default(),
            SchedulesAction::Fetch {
                route: RouteId(1),
                lifecycle: Lifecycle::Rejected("timer failed".to_string()),
            },
        );
        assert_eq!(state.status, Status::Failed);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("timer failed"));
    }
}
