//! # Auth Slice
//!
//! Session state for the signed-in user.
//!
//! ## State Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  AuthState                                                          │
//! │  ├── session: Option<Session>   profile + tokens, or logged out     │
//! │  ├── status:  Status            lifecycle of the last login         │
//! │  └── error:   Option<String>    reason the last login failed        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! The profile and the tokens travel together inside [`Session`], so a
//! user without an access token (or the reverse) is unrepresentable.
//! `Logout` drops the whole session in one move; `status` deliberately
//! keeps its last value so the login form can still show the outcome of
//! the previous attempt.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Lifecycle, Session, Status, UserProfile};

/// Authentication state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthState {
    /// The active session, or `None` when logged out.
    pub session: Option<Session>,

    /// Lifecycle status of the most recent login attempt.
    pub status: Status,

    /// Why the most recent login attempt failed.
    pub error: Option<String>,
}

impl AuthState {
    /// The signed-in profile, if any.
    #[inline]
    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The current access token, if any.
    #[inline]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    /// True when a session is present.
    #[inline]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Transitions accepted by the auth slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    /// Lifecycle of the login operation.
    Login(Lifecycle<Session>),

    /// Clears the session unconditionally. Status is not reset.
    Logout,

    /// Replaces the profile of the current session; no-op when logged
    /// out, which keeps the profile-iff-token invariant intact.
    SetUser(UserProfile),
}

/// Pure transition function for [`AuthState`].
pub fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::Logout => AuthState {
            session: None,
            ..state.clone()
        },
        AuthAction::SetUser(profile) => match &state.session {
            Some(session) => AuthState {
                session: Some(Session {
                    user: profile,
                    ..session.clone()
                }),
                ..state.clone()
            },
            None => state.clone(),
        },
        AuthAction::Login(Lifecycle::Pending) => AuthState {
            session: state.session.clone(),
            status: Status::Loading,
            error: None,
        },
        AuthAction::Login(Lifecycle::Fulfilled(session)) => AuthState {
            session: Some(session),
            status: Status::Succeeded,
            error: None,
        },
        AuthAction::Login(Lifecycle::Rejected(reason)) => AuthState {
            session: state.session.clone(),
            status: Status::Failed,
            error: Some(reason),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(username: &str) -> Session {
        Session {
            user: UserProfile {
                id: 1,
                username: username.to_string(),
                email: format!("{username}@example.com"),
                first_name: username.to_string(),
                last_name: "User".to_string(),
                image: None,
            },
            access_token: "token-abc".to_string(),
            refresh_token: "refresh-abc".to_string(),
        }
    }

    #[test]
    fn test_default_state() {
        let state = AuthState::default();
        assert!(state.session.is_none());
        assert_eq!(state.status, Status::Idle);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_logout_clears_session_but_not_status() {
        let state = AuthState {
            session: Some(session("test")),
            status: Status::Succeeded,
            error: None,
        };

        let state = reduce(&state, AuthAction::Logout);
        assert!(state.user().is_none());
        assert!(state.access_token().is_none());
        assert_eq!(state.status, Status::Succeeded);
    }

    #[test]
    fn test_login_pending_sets_loading_and_clears_error() {
        let state = AuthState {
            session: None,
            status: Status::Failed,
            error: Some("previous failure".to_string()),
        };

        let state = reduce(&state, AuthAction::Login(Lifecycle::Pending));
        assert_eq!(state.status, Status::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_login_fulfilled_installs_session() {
        let state = reduce(
            &AuthState::default(),
            AuthAction::Login(Lifecycle::Fulfilled(session("ada"))),
        );
        assert_eq!(state.status, Status::Succeeded);
        assert!(state.is_logged_in());
        assert_eq!(state.user().unwrap().username, "ada");
        assert_eq!(state.access_token(), Some("token-abc"));
    }

    #[test]
    fn test_login_rejected_records_error_and_keeps_user_null() {
        let state = reduce(
            &AuthState::default(),
            AuthAction::Login(Lifecycle::Rejected("Invalid credentials".to_string())),
        );
        assert_eq!(state.status, Status::Failed);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(state.user().is_none());
    }

    #[test]
    fn test_set_user_replaces_profile_only_when_logged_in() {
        let logged_in = AuthState {
            session: Some(session("ada")),
            status: Status::Succeeded,
            error: None,
        };
        let replacement = UserProfile {
            id: 2,
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            image: None,
        };

        let state = reduce(&logged_in, AuthAction::SetUser(replacement.clone()));
        assert_eq!(state.user().unwrap().username, "grace");
        // Tokens survive a profile replacement
        assert_eq!(state.access_token(), Some("token-abc"));

        let logged_out = reduce(&AuthState::default(), AuthAction::SetUser(replacement));
        assert!(logged_out.session.is_none());
    }
}
