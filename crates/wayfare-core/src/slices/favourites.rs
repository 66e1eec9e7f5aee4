//! # Favourites Slice
//!
//! Routes the user has starred. Kept as an insertion-ordered sequence
//! that never contains two entries with the same id; membership is
//! checked by linear scan, which is plenty for a hand-curated list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Route, RouteId};

/// Favourited routes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FavouritesState {
    /// Favourited routes in the order they were added.
    pub items: Vec<Route>,
}

impl FavouritesState {
    /// True when the route is already favourited.
    pub fn contains(&self, id: RouteId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// Transitions accepted by the favourites slice.
#[derive(Debug, Clone, PartialEq)]
pub enum FavouritesAction {
    /// Appends the route unless one with the same id is present.
    Add(Route),

    /// Removes the route with the given id; no-op if absent.
    Remove(RouteId),
}

/// Pure transition function for [`FavouritesState`].
pub fn reduce(state: &FavouritesState, action: FavouritesAction) -> FavouritesState {
    match action {
        FavouritesAction::Add(route) => {
            if state.contains(route.id) {
                state.clone()
            } else {
                let mut items = state.items.clone();
                items.push(route);
                FavouritesState { items }
            }
        }
        FavouritesAction::Remove(id) => FavouritesState {
            items: state
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_add_favourite() {
        let state = reduce(
            &FavouritesState::default(),
            FavouritesAction::Add(route(1, "Product 1")),
        );
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, RouteId(1));
    }

    #[test]
    fn test_add_favourite_is_idempotent() {
        let state = reduce(
            &FavouritesState::default(),
            FavouritesAction::Add(route(1, "Product 1")),
        );
        let again = reduce(&state, FavouritesAction::Add(route(1, "Product 1")));
        assert_eq!(again.items.len(), 1);
        assert_eq!(again, state);
    }

    #[test]
    fn test_remove_favourite_inverts_add() {
        let before = reduce(
            &FavouritesState::default(),
            FavouritesAction::Add(route(7, "Route 7")),
        );
        let added = reduce(&before, FavouritesAction::Add(route(1, "Product 1")));
        let removed = reduce(&added, FavouritesAction::Remove(RouteId(1)));
        assert_eq!(removed, before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let state = reduce(
            &FavouritesState::default(),
            FavouritesAction::Add(route(1, "Product 1")),
        );
        let after = reduce(&state, FavouritesAction::Remove(RouteId(99)));
        assert_eq!(after, state);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut state = FavouritesState::default();
        for id in [3, 1, 2] {
            state = reduce(&state, FavouritesAction::Add(route(id, "r")));
        }
        let ids: Vec<u32> = state.items.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
