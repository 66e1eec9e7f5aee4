//! # Destinations Slice
//!
//! The explore view: a fixed points-of-interest table, a favourites id
//! list, and a derived search view.
//!
//! ## Search Semantics
//! `Search(query)` stores the query verbatim and recomputes
//! `search_results` as every destination whose name, category or
//! description contains the query case-insensitively. The recomputation
//! is deterministic in (query, destinations), so the results never go
//! stale against the fixed table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::data::reference_destinations;
use crate::types::{Destination, DestinationId};

/// Explore-view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DestinationsState {
    /// The fixed reference table.
    pub destinations: Vec<Destination>,

    /// Favourited destination ids, insertion-ordered, no duplicates.
    pub favorite_destinations: Vec<DestinationId>,

    /// The current search query, as typed.
    pub search: String,

    /// Destinations matching `search`, in table order.
    pub search_results: Vec<Destination>,

    /// Reserved for a future remote destination source.
    pub loading: bool,
}

impl Default for DestinationsState {
    fn default() -> Self {
        DestinationsState {
            destinations: reference_destinations(),
            favorite_destinations: Vec::new(),
            search: String::new(),
            search_results: Vec::new(),
            loading: false,
        }
    }
}

/// Transitions accepted by the destinations slice.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationsAction {
    /// Stores the query and recomputes the filtered view.
    Search(String),

    /// Resets the query and the results to empty.
    ClearSearch,

    /// Adds a destination id to the favourites list; no-op on duplicate.
    AddFavorite(DestinationId),

    /// Removes a destination id from the favourites list; no-op if absent.
    RemoveFavorite(DestinationId),
}

/// True when the destination matches the lowercased needle.
fn matches(destination: &Destination, needle: &str) -> bool {
    destination.name.to_lowercase().contains(needle)
        || destination.category.to_lowercase().contains(needle)
        || destination.description.to_lowercase().contains(needle)
}

/// Pure transition function for [`DestinationsState`].
pub fn reduce(state: &DestinationsState, action: DestinationsAction) -> DestinationsState {
    match action {
        DestinationsAction::Search(query) => {
            let needle = query.to_lowercase();
            let search_results = state
                .destinations
                .iter()
                .filter(|d| matches(d, &needle))
                .cloned()
                .collect();
            DestinationsState {
                search: query,
                search_results,
                ..state.clone()
            }
        }
        DestinationsAction::ClearSearch => DestinationsState {
            search: String::new(),
            search_results: Vec::new(),
            ..state.clone()
        },
        DestinationsAction::AddFavorite(id) => {
            if state.favorite_destinations.contains(&id) {
                state.clone()
            } else {
                let mut favorite_destinations = state.favorite_destinations.clone();
                favorite_destinations.push(id);
                DestinationsState {
                    favorite_destinations,
                    ..state.clone()
                }
            }
        }
        DestinationsAction::RemoveFavorite(id) => DestinationsState {
            favorite_destinations: state
                .favorite_destinations
                .iter()
                .filter(|&&fav| fav != id)
                .copied()
                .collect(),
            ..state.clone()
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
