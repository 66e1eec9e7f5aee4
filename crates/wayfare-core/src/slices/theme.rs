//! # Theme Slice
//!
//! Light/dark colour scheme. The mode is a closed enum, so the slice is
//! always in exactly one of the two values.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ThemeMode;

/// Theme state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

/// Transitions accepted by the theme slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Flips light and dark.
    Toggle,

    /// Sets the mode explicitly.
    Set(ThemeMode),
}

/// Pure transition function for [`ThemeState`].
pub fn reduce(state: &ThemeState, action: ThemeAction) -> ThemeState {
    match action {
        ThemeAction::Toggle => ThemeState {
            mode: state.mode.toggled(),
        },
        ThemeAction::Set(mode) => ThemeState { mode },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_light_to_dark() {
        let state = reduce(
            &ThemeState {
                mode: ThemeMode::Light,
            },
            ThemeAction::Toggle,
        );
        assert_eq!(state.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let initial = ThemeState {
            mode: ThemeMode::Dark,
        };
        let state = reduce(&reduce(&initial, ThemeAction::Toggle), ThemeAction::Toggle);
        assert_eq!(state, initial);
    }

    #[test]
    fn test_set_theme_explicitly() {
        let state = reduce(&ThemeState::default(), ThemeAction::Set(ThemeMode::Dark));
        assert_eq!(state.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_initial_state_is_light() {
        assert_eq!(ThemeState::default().mode, ThemeMode::Light);
    }
}
