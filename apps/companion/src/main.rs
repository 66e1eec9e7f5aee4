//! # Wayfare Companion - Headless Application Shell
//!
//! The dependency-injection owner of the state core. A UI host would do
//! exactly this wiring and then hand `store` + `ops` to its screens;
//! this shell instead drives one demonstration pass over the operations
//! so the whole stack is exercised end to end.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Application Startup                            │
//! │                                                                     │
//! │  1. Initialize Logging ───────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                            │
//! │     • Default: INFO, can be overridden with RUST_LOG                │
//! │                                                                     │
//! │  2. Determine Data Directory ─────────────────────────────────────► │
//! │     • Linux: ~/.local/share/wayfare-companion                       │
//! │     • macOS: ~/Library/Application Support/com.wayfare.companion    │
//! │     • Override: WAYFARE_DATA_PATH                                   │
//! │                                                                     │
//! │  3. Rehydrate Persisted State ────────────────────────────────────► │
//! │     • auth / favourites / theme / users slices only                 │
//! │     • absent or unreadable snapshot → declared defaults             │
//! │                                                                     │
//! │  4. Build Store & Attach Gateway ─────────────────────────────────► │
//! │     • every state change is snapshotted fire-and-forget             │
//! │                                                                     │
//! │  5. Construct Providers & Drive Operations ───────────────────────► │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

use wayfare_api::{
    HttpIdentityProvider, HttpTransitProvider, IdentityConfig, Operations, RouteQuery,
    TransitConfig,
};
use wayfare_core::slices::destinations::DestinationsAction;
use wayfare_core::slices::schedules::SchedulesAction;
use wayfare_core::slices::theme::ThemeAction;
use wayfare_core::{Action, AppState, DEFAULT_SELECTED_ROUTE};
use wayfare_store::{FileStore, PersistenceGateway, Snapshot, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting Wayfare companion");

    // Durable storage under the platform data dir
    let data_dir = get_data_dir()?;
    info!(?data_dir, "Data directory determined");
    let storage = Arc::new(FileStore::new(&data_dir));
    let gateway = Arc::new(PersistenceGateway::new(storage));

    // Rehydrate BEFORE the store exists so the first render already
    // sees persisted auth/favourites/theme/users
    let initial = gateway.rehydrate(AppState::default()).await;
    let store = Store::new(initial);
    let _persist_sub = gateway.clone().attach(&store);
    info!(
        logged_in = store.with_state(|s| s.auth.is_logged_in()),
        theme = ?store.with_state(|s| s.theme.mode),
        favourites = store.with_state(|s| s.favourites.items.len()),
        "State rehydrated"
    );

    // Providers + operation layer
    let ops = Operations::new(
        store.clone(),
        Arc::new(HttpIdentityProvider::new(identity_config_from_env())),
        Arc::new(HttpTransitProvider::new(transit_config_from_env())),
    );

    // Optional login, driven by environment credentials
    if let (Ok(username), Ok(password)) = (
        std::env::var("WAYFARE_USERNAME"),
        std::env::var("WAYFARE_PASSWORD"),
    ) {
        ops.login(&username, &password).await;
        let auth = store.with_state(|s| s.auth.clone());
        match auth.user() {
            Some(user) => info!(username = %user.username, "Signed in"),
            None => warn!(error = ?auth.error, "Login failed"),
        }
    }

    // Route list (falls back to the fixed dataset when the provider is
    // unreachable or unconfigured)
    ops.fetch_items(RouteQuery::default()).await;
    let items = store.with_state(|s| s.items.clone());
    info!(status = ?items.status, count = items.list.len(), "Route list ready");

    // Destination search
    store.dispatch(Action::Destinations(DestinationsAction::Search(
        "station".to_string(),
    )));
    let hits = store.with_state(|s| s.destinations.search_results.len());
    info!(query = "station", hits, "Destination search");

    // Schedules for the default route
    store.dispatch(Action::Schedules(SchedulesAction::SetSelectedRoute(
        DEFAULT_SELECTED_ROUTE,
    )));
    ops.fetch_schedules(DEFAULT_SELECTED_ROUTE).await;
    let departures = store.with_state(|s| s.schedules.selected_departures().len());
    info!(route = %DEFAULT_SELECTED_ROUTE, departures, "Schedule ready");

    // Theme toggle survives restarts via the snapshot
    store.dispatch(Action::Theme(ThemeAction::Toggle));
    info!(theme = ?store.with_state(|s| s.theme.mode), "Theme toggled");

    // Attached writes are fire-and-forget; flush one final snapshot
    // explicitly before exiting
    gateway
        .write(&Snapshot::capture(&store.get_state()))
        .await?;
    info!("Final snapshot written, goodbye");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=wayfare=trace` - Trace the wayfare crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wayfare=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the snapshot directory based on the platform.
///
/// ## Development Override
/// Set `WAYFARE_DATA_PATH` to use a custom directory.
fn get_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("WAYFARE_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "wayfare", "companion")
        .ok_or("Could not determine app data directory")?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Identity provider configuration from environment, with defaults.
fn identity_config_from_env() -> IdentityConfig {
    let mut config = IdentityConfig::default();

    if let Ok(raw) = std::env::var("WAYFARE_IDENTITY_URL") {
        match Url::parse(&raw) {
            Ok(url) => config.base_url = url,
            Err(err) => warn!(%raw, %err, "Ignoring invalid WAYFARE_IDENTITY_URL"),
        }
    }

    config
}

/// Transit provider configuration from environment, with defaults.
///
/// ## Environment Variables
/// - `WAYFARE_TRANSIT_API_KEY` - provider API key
/// - `WAYFARE_TRANSIT_APP_ID` - provider application id
/// - `WAYFARE_BOUNDING_BOX` - search area override
fn transit_config_from_env() -> TransitConfig {
    let mut config = TransitConfig::default();

    if let Ok(key) = std::env::var("WAYFARE_TRANSIT_API_KEY") {
        config.api_key = key;
    }
    if let Ok(app_id) = std::env::var("WAYFARE_TRANSIT_APP_ID") {
        config.app_id = app_id;
    }
    if let Ok(bounding_box) = std::env::var("WAYFARE_BOUNDING_BOX") {
        config.bounding_box = bounding_box;
    }

    config
}
