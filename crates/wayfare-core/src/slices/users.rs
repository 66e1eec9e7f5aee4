//! # Users Slice
//!
//! Locally registered accounts, unique by username. The registry doubles
//! as the offline login fallback: when the identity provider is
//! unreachable, the login operation scans it for a matching credential
//! pair.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Credential, Lifecycle, Status};

/// Registered-users state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UsersState {
    /// Registered accounts in registration order, unique by username.
    pub registered: Vec<Credential>,

    /// Lifecycle status of the most recent registration.
    pub status: Status,

    /// Why the most recent registration failed.
    pub error: Option<String>,
}

impl UsersState {
    /// True when the username is already registered.
    pub fn is_registered(&self, username: &str) -> bool {
        self.registered.iter().any(|c| c.username == username)
    }

    /// Finds the credential matching a (username, password) pair.
    pub fn find_credentials(&self, username: &str, password: &str) -> Option<&Credential> {
        self.registered
            .iter()
            .find(|c| c.username == username && c.password == password)
    }
}

/// Transitions accepted by the users slice.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersAction {
    /// Appends the credential iff its username is not yet registered.
    AddUser(Credential),

    /// Lifecycle of the registration operation.
    Register(Lifecycle<Credential>),
}

/// Appends `credential` unless its username is taken.
fn push_unique(registered: &[Credential], credential: Credential) -> Vec<Credential> {
    if registered.iter().any(|c| c.username == credential.username) {
        registered.to_vec()
    } else {
        let mut registered = registered.to_vec();
        registered.push(credential);
        registered
    }
}

/// Pure transition function for [`UsersState`].
pub fn reduce(state: &UsersState, action: UsersAction) -> UsersState {
    match action {
        UsersAction::AddUser(credential) => UsersState {
            registered: push_unique(&state.registered, credential),
            ..state.clone()
        },
        UsersAction::Register(Lifecycle::Pending) => UsersState {
            registered: state.registered.clone(),
            status: Status::Loading,
            error: None,
        },
        UsersAction::Register(Lifecycle::Fulfilled(credential)) => UsersState {
            registered: push_unique(&state.registered, credential),
            status: Status::Succeeded,
            error: None,
        },
        UsersAction::Register(Lifecycle::Rejected(reason)) => UsersState {
            registered: state.registered.clone(),
            status: Status::Failed,
            error: Some(reason),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
