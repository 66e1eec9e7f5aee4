//! # Composed State Tree
//!
//! The single state tree aggregating every slice, and the root action
//! type that routes a transition to the slice owning it.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Dispatch Path                               │
//! │                                                                     │
//! │  Action::Theme(Toggle)                                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  reduce(&AppState, action)     ◄── exhaustive match on the slice    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  theme::reduce(&state.theme, Toggle)                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  new AppState { theme: <new>, ..untouched slices cloned }           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The routing is itself a pure function; the store (in `wayfare-store`)
//! owns locking and subscriber notification.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::slices::{auth, destinations, favourites, items, schedules, theme, users};

/// The composed state tree.
///
/// Created once at store initialization from defaults (or a rehydrated
/// snapshot) and replaced wholesale by every dispatch; no caller ever
/// mutates it in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppState {
    pub auth: auth::AuthState,
    pub items: items::ItemsState,
    pub favourites: favourites::FavouritesState,
    pub destinations: destinations::DestinationsState,
    pub schedules: schedules::SchedulesState,
    pub theme: theme::ThemeState,
    pub users: users::UsersState,
}

/// The closed set of every transition the tree accepts.
///
/// Each variant wraps one slice's action enum; routing is an exhaustive
/// match, so adding a slice without wiring it here is a compile error.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(auth::AuthAction),
    Items(items::ItemsAction),
    Favourites(favourites::FavouritesAction),
    Destinations(destinations::DestinationsAction),
    Schedules(schedules::SchedulesAction),
    Theme(theme::ThemeAction),
    Users(users::UsersAction),
}

/// Routes an action to its owning slice and returns the new tree.
///
/// Slices not addressed by the action are carried over unchanged.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::Auth(action) => AppState {
            auth: auth::reduce(&state.auth, action),
            ..state.clone()
        },
        Action::Items(action) => AppState {
            items: items::reduce(&state.items, action),
            ..state.clone()
        },
        Action::Favourites(action) => AppState {
            favourites: favourites::reduce(&state.favourites, action),
            ..state.clone()
        },
        Action::Destinations(action) => AppState {
            destinations: destinations::reduce(&state.destinations, action),
            ..state.clone()
        },
        Action::Schedules(action) => AppState {
            schedules: schedules::reduce(&state.schedules, action),
            ..state.clone()
        },
        Action::Theme(action) => AppState {
            theme: theme::reduce(&state.theme, action),
            ..state.clone()
        },
        Action::Users(action) => AppState {
            users: users::reduce(&state.users, action),
            ..state.clone()
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::favourites::FavouritesAction;
    use crate::slices::theme::ThemeAction;
    use crate::types::{Route, RouteId, ThemeMode};

    fn route(id: u32, title: &str) -> Route {
        Route {
            id: RouteId(id),
            title: title.to_string(),
            description: String::new(),
            brand: String::new(),
            thumbnail: String::new(),
            images: Vec::new(),
            rating: 0.0,
            price: String::new(),
        }
    }

    #[test]
    fn test_routing_touches_only_the_addressed_slice() {
        let initial = AppState::default();
        let state = reduce(&initial, Action::Theme(ThemeAction::Toggle));

        assert_eq!(state.theme.mode, ThemeMode::Dark);
        assert_eq!(state.auth, initial.auth);
        assert_eq!(state.items, initial.items);
        assert_eq!(state.favourites, initial.favourites);
        assert_eq!(state.destinations, initial.destinations);
        assert_eq!(state.schedules, initial.schedules);
        assert_eq!(state.users, initial.users);
    }

    #[test]
    fn test_favourite_add_twice_remove_once_scenario() {
        let mut state = AppState::default();
        assert!(state.favourites.items.is_empty());

        state = reduce(
            &state,
            Action::Favourites(FavouritesAction::Add(route(1, "Product 1"))),
        );
        assert_eq!(state.favourites.items.len(), 1);

        state = reduce(
            &state,
            Action::Favourites(FavouritesAction::Add(route(1, "Product 1"))),
        );
        assert_eq!(state.favourites.items.len(), 1);

        state = reduce(&state, Action::Favourites(FavouritesAction::Remove(RouteId(1))));
        assert!(state.favourites.items.is_empty());
    }

    #[test]
    fn test_reduce_never_mutates_its_input() {
        let initial = AppState::default();
        let snapshot = initial.clone();
        let _ = reduce(&initial, Action::Theme(ThemeAction::Toggle));
        assert_eq!(initial, snapshot);
    }
}
