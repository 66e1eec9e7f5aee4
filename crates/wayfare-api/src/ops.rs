//! # Async Operations
//!
//! The four named operations driving the state tree, each following the
//! same lifecycle: dispatch `Pending`, do the work, dispatch exactly one
//! of `Fulfilled` or `Rejected`.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  login(username, password)                                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  dispatch Auth::Login(Pending)                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  POST /auth/login ── success ──► Fulfilled(session)                 │
//! │       │                                                             │
//! │       └─ failure ─► scan local users registry                       │
//! │               │                                                     │
//! │               ├─ match ──► synthesize session ──► Fulfilled         │
//! │               │                                                     │
//! │               └─ none ───► Rejected(most specific message)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale Completions
//! There is no cancellation: in-flight work always runs to completion.
//! Login and the route-list fetch therefore carry a monotonic sequence
//! ticket; a completion whose ticket is no longer the newest is dropped
//! before dispatch, so re-invoking an operation can never be overwritten
//! by an older invocation finishing late (last-initiated-wins). Schedule
//! fetches carry their route id in the action instead, which makes
//! interleaved fetches for different routes commute.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use wayfare_core::slices::auth::AuthAction;
use wayfare_core::slices::items::ItemsAction;
use wayfare_core::slices::schedules::SchedulesAction;
use wayfare_core::slices::users::UsersAction;
use wayfare_core::types::{Credential, Lifecycle, RouteId, Session, UserProfile};
use wayfare_core::validation::{validate_registration, RegistrationInput};
use wayfare_core::{data, Action};
use wayfare_store::Store;

use crate::error::ApiError;
use crate::identity::IdentityProvider;
use crate::transit::{RouteQuery, TransitProvider};

/// Artificial latency of the schedule lookup.
pub const SCHEDULE_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Artificial latency of registration.
pub const REGISTRATION_DELAY: Duration = Duration::from_millis(500);

// =============================================================================
// Stale-Completion Guard
// =============================================================================

/// Monotonic sequence guard for a racy operation.
///
/// `begin` issues a ticket and makes it the newest; `is_current` checks
/// a ticket against the newest at completion time.
#[derive(Debug, Default)]
struct OpGuard {
    seq: AtomicU64,
}

impl OpGuard {
    fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }
}

// =============================================================================
// Operations
// =============================================================================

/// The async operation layer.
///
/// Holds the dependency-injected store and provider seams; one instance
/// is shared by whatever owns the UI lifecycle.
pub struct Operations {
    store: Arc<Store>,
    identity: Arc<dyn IdentityProvider>,
    transit: Arc<dyn TransitProvider>,
    login_guard: OpGuard,
    items_guard: OpGuard,
}

impl Operations {
    pub fn new(
        store: Arc<Store>,
        identity: Arc<dyn IdentityProvider>,
        transit: Arc<dyn TransitProvider>,
    ) -> Self {
        Operations {
            store,
            identity,
            transit,
            login_guard: OpGuard::default(),
            items_guard: OpGuard::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Login
    // -------------------------------------------------------------------------

    /// Attempts remote authentication, falling back to the local users
    /// registry when the provider is unreachable or rejects the
    /// credentials.
    pub async fn login(&self, username: &str, password: &str) {
        let ticket = self.login_guard.begin();
        self.store
            .dispatch(Action::Auth(AuthAction::Login(Lifecycle::Pending)));

        let outcome = self.try_login(username, password).await;

        if !self.login_guard.is_current(ticket) {
            debug!(username, ticket, "stale login completion dropped");
            return;
        }

        let event = match outcome {
            Ok(session) => Lifecycle::Fulfilled(session),
            Err(message) => {
                warn!(username, %message, "login failed");
                Lifecycle::Rejected(message)
            }
        };
        self.store.dispatch(Action::Auth(AuthAction::Login(event)));
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<Session, String> {
        let remote_err = match self.identity.login(username, password).await {
            Ok(session) => {
                info!(username, "remote login succeeded");
                return Ok(session);
            }
            Err(err) => err,
        };
        debug!(username, %remote_err, "remote login failed, checking local registry");

        let local = self
            .store
            .with_state(|s| s.users.find_credentials(username, password).cloned());
        match local {
            Some(credential) => {
                info!(username, "local registry login succeeded");
                Ok(synthesize_session(&credential))
            }
            // The provider's message is more specific than "not found
            // locally": surface it
            None => Err(remote_err.to_string()),
        }
    }

    // -------------------------------------------------------------------------
    // Route List
    // -------------------------------------------------------------------------

    /// Fetches the transit-route list. On rejection the items slice
    /// substitutes the fixed fallback dataset.
    pub async fn fetch_items(&self, query: RouteQuery) {
        let ticket = self.items_guard.begin();
        self.store
            .dispatch(Action::Items(ItemsAction::Fetch(Lifecycle::Pending)));

        let outcome = self.transit.fetch_routes(&query).await;

        if !self.items_guard.is_current(ticket) {
            debug!(ticket, "stale route-list completion dropped");
            return;
        }

        let event = match outcome {
            Ok(routes) => {
                info!(count = routes.len(), "route list fetched");
                Lifecycle::Fulfilled(routes)
            }
            Err(err) => {
                warn!(%err, "route list fetch failed, slice falls back");
                Lifecycle::Rejected(err.to_string())
            }
        };
        self.store.dispatch(Action::Items(ItemsAction::Fetch(event)));
    }

    // -------------------------------------------------------------------------
    // Schedules
    // -------------------------------------------------------------------------

    /// Resolves the schedule for one route from the fixed reference
    /// table after an artificial delay. Unknown routes resolve to an
    /// empty sequence, not an error.
    pub async fn fetch_schedules(&self, route: RouteId) {
        self.store.dispatch(Action::Schedules(SchedulesAction::Fetch {
            route,
            lifecycle: Lifecycle::Pending,
        }));

        tokio::time::sleep(SCHEDULE_FETCH_DELAY).await;

        let departures = data::reference_schedules()
            .remove(&route)
            .unwrap_or_default();
        debug!(%route, count = departures.len(), "schedule resolved");

        self.store.dispatch(Action::Schedules(SchedulesAction::Fetch {
            route,
            lifecycle: Lifecycle::Fulfilled(departures),
        }));
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Validates and registers a new local account. The credential id
    /// derives from the current timestamp.
    pub async fn register_user(&self, input: RegistrationInput) {
        self.store
            .dispatch(Action::Users(UsersAction::Register(Lifecycle::Pending)));

        if let Err(err) = validate_registration(&input) {
            let err = ApiError::from(err);
            warn!(username = %input.username, %err, "registration rejected");
            self.store.dispatch(Action::Users(UsersAction::Register(
                Lifecycle::Rejected(err.to_string()),
            )));
            return;
        }

        tokio::time::sleep(REGISTRATION_DELAY).await;

        let credential = Credential {
            first_name: input.username.clone(),
            last_name: "User".to_string(),
            id: chrono::Utc::now().timestamp_millis(),
            username: input.username,
            password: input.password,
            email: input.email,
        };
        info!(username = %credential.username, "user registered");
        self.store.dispatch(Action::Users(UsersAction::Register(
            Lifecycle::Fulfilled(credential),
        )));
    }
}

/// Builds the session a locally registered user signs in with.
fn synthesize_session(credential: &Credential) -> Session {
    Session {
        user: UserProfile::from(credential),
        access_token: format!("local-{}", Uuid::new_v4()),
        refresh_token: format!("local-refresh-{}", Uuid::new_v4()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;
    use wayfare_core::types::Status;
    use wayfare_core::AppState;

    use crate::error::ApiResult;
    use crate::identity::IdentityProvider;

    // -------------------------------------------------------------------------
    // Stubs
    // -------------------------------------------------------------------------

    /// Always fails, the way an unreachable provider would.
    struct FailingIdentity;

    #[async_trait]
    impl IdentityProvider for FailingIdentity {
        async fn login(&self, _username: &str, _password: &str) -> ApiResult<Session> {
            Err(ApiError::Auth("Invalid credentials".to_string()))
        }
    }

    /// First call blocks until released then fails; second call
    /// succeeds immediately. Used to force an out-of-order completion.
    struct RacingIdentity {
        calls: AtomicUsize,
        release: Notify,
    }

    impl RacingIdentity {
        fn new() -> Self {
            RacingIdentity {
                calls: AtomicUsize::new(0),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for RacingIdentity {
        async fn login(&self, username: &str, _password: &str) -> ApiResult<Session> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.release.notified().await;
                return Err(ApiError::Auth("Invalid credentials".to_string()));
            }
            Ok(Session {
                user: UserProfile {
                    id: 7,
                    username: username.to_string(),
                    email: format!("{username}@example.com"),
                    first_name: username.to_string(),
                    last_name: "User".to_string(),
                    image: None,
                },
                access_token: "remote-token".to_string(),
                refresh_token: "remote-refresh".to_string(),
            })
        }
    }

    struct FailingTransit;

    #[async_trait]
    impl TransitProvider for FailingTransit {
        async fn fetch_routes(&self, _query: &RouteQuery) -> ApiResult<Vec<wayfare_core::types::Route>> {
            Err(ApiError::BadResponse("boom".to_string()))
        }
    }

    struct StaticTransit(Vec<wayfare_core::types::Route>);

    #[async_trait]
    impl TransitProvider for StaticTransit {
        async fn fetch_routes(&self, _query: &RouteQuery) -> ApiResult<Vec<wayfare_core::types::Route>> {
            Ok(self.0.clone())
        }
    }

    fn ops_with(
        identity: Arc<dyn IdentityProvider>,
        transit: Arc<dyn TransitProvider>,
    ) -> (Arc<Store>, Operations) {
        let store = Store::new(AppState::default());
        let ops = Operations::new(store.clone(), identity, transit);
        (store, ops)
    }

    fn registered_store_input() -> RegistrationInput {
        RegistrationInput {
            username: "ada".to_string(),
            password: "lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Login
    // -------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_login_falls_back_to_local_registry() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.register_user(registered_store_input()).await;
        assert_eq!(store.get_state().users.status, Status::Succeeded);

        ops.login("ada", "lovelace").await;

        let auth = store.get_state().auth;
        assert_eq!(auth.status, Status::Succeeded);
        let user = auth.user().expect("local fallback should sign in");
        assert_eq!(user.username, "ada");
        assert!(auth.access_token().unwrap().starts_with("local-"));
    }

    #[tokio::test]
    async fn test_login_rejects_with_provider_message_when_no_local_match() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.login("nobody", "wrong").await;

        let auth = store.get_state().auth;
        assert_eq!(auth.status, Status::Failed);
        assert!(auth.user().is_none());
        assert_eq!(auth.error.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_stale_login_completion_is_dropped() {
        let identity = Arc::new(RacingIdentity::new());
        let (store, ops) = ops_with(identity.clone(), Arc::new(FailingTransit));

        // The first login blocks inside the provider; the second runs to
        // completion, then the first is released and finishes late.
        tokio::join!(ops.login("stale", "pw"), async {
            ops.login("fresh", "pw").await;
            identity.release.notify_one();
        });

        let auth = store.get_state().auth;
        assert_eq!(auth.status, Status::Succeeded);
        assert_eq!(auth.user().unwrap().username, "fresh");
        // The stale rejection did not overwrite the fresh session
        assert!(auth.error.is_none());
    }

    // -------------------------------------------------------------------------
    // Route List
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_fetch_items_success_replaces_list() {
        let routes = vec![wayfare_core::types::Route {
            id: RouteId(1),
            title: "Route 15".to_string(),
            description: String::new(),
            brand: "TfL".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
            rating: 4.8,
            price: "£1.75".to_string(),
        }];
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(StaticTransit(routes)));

        ops.fetch_items(RouteQuery::default()).await;

        let items = store.get_state().items;
        assert_eq!(items.status, Status::Succeeded);
        assert_eq!(items.list.len(), 1);
        assert_eq!(items.list[0].title, "Route 15");
    }

    #[tokio::test]
    async fn test_fetch_items_failure_keeps_ui_populated() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.fetch_items(RouteQuery::default()).await;

        let items = store.get_state().items;
        assert_eq!(items.status, Status::Failed);
        assert!(items.error.is_some());
        // Fallback dataset substituted by the slice
        assert!(!items.list.is_empty());
    }

    // -------------------------------------------------------------------------
    // Schedules
    // -------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_fetch_schedules_resolves_known_route() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.fetch_schedules(RouteId(2)).await;

        let schedules = store.get_state().schedules;
        assert_eq!(schedules.status, Status::Succeeded);
        assert!(!schedules.loading);
        assert!(!schedules.schedules[&RouteId(2)].is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_schedules_unknown_route_is_empty_not_error() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.fetch_schedules(RouteId(999)).await;

        let schedules = store.get_state().schedules;
        assert_eq!(schedules.status, Status::Succeeded);
        assert!(schedules.schedules[&RouteId(999)].is_empty());
        assert!(schedules.error.is_none());
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_register_user_appends_credential() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.register_user(registered_store_input()).await;

        let users = store.get_state().users;
        assert_eq!(users.status, Status::Succeeded);
        assert_eq!(users.registered.len(), 1);
        let cred = &users.registered[0];
        assert_eq!(cred.username, "ada");
        assert_eq!(cred.first_name, "ada");
        assert_eq!(cred.last_name, "User");
        assert!(cred.id > 0);
    }

    #[tokio::test]
    async fn test_register_user_short_password_rejected() {
        let (store, ops) = ops_with(Arc::new(FailingIdentity), Arc::new(FailingTransit));

        ops.register_user(RegistrationInput {
            username: "ada".to_string(),
            password: "abc".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await;

        let users = store.get_state().users;
        assert_eq!(users.status, Status::Failed);
        assert!(users.registered.is_empty());
        assert_eq!(
            users.error.as_deref(),
            Some("password must be at least 4 characters")
        );
    }
}
