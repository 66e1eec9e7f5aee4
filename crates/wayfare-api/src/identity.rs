//! # Identity Provider Client
//!
//! Remote authentication against an external identity provider.
//!
//! ## Wire Contract
//! ```text
//! POST {base}/auth/login
//! { "username": "...", "password": "...", "expiresInMins": 60 }
//!
//! 200 → { "accessToken": "...", "refreshToken": "...", ...profile }
//! 4xx → { "message": "Invalid credentials" }
//! ```
//!
//! The trait seam exists so the login operation can be exercised with
//! stub providers; the HTTP implementation is the only production one.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use wayfare_core::types::{Session, UserProfile};

use crate::error::{ApiError, ApiResult};

/// Session lifetime requested from the provider, in minutes.
const SESSION_EXPIRES_MINS: u32 = 60;

/// Identity provider endpoint configuration.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the provider, e.g. `https://dummyjson.com`.
    pub base_url: Url,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            base_url: Url::parse("https://dummyjson.com").expect("static URL is valid"),
        }
    }
}

/// Remote authentication seam.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Attempts remote authentication, returning a full session on
    /// success.
    async fn login(&self, username: &str, password: &str) -> ApiResult<Session>;
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    expires_in_mins: u32,
}

/// Successful login payload: tokens plus the profile, flattened.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    refresh_token: String,
    id: i64,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    #[serde(default)]
    image: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(res: LoginResponse) -> Self {
        Session {
            user: UserProfile {
                id: res.id,
                username: res.username,
                email: res.email,
                first_name: res.first_name,
                last_name: res.last_name,
                image: res.image,
            },
            access_token: res.access_token,
            refresh_token: res.refresh_token,
        }
    }
}

/// Error payload the provider returns on rejected credentials.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Production identity provider client.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: Client,
    config: IdentityConfig,
}

impl HttpIdentityProvider {
    pub fn new(config: IdentityConfig) -> Self {
        HttpIdentityProvider {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        let endpoint = self.config.base_url.join("auth/login")?;

        let response = self
            .client
            .post(endpoint)
            .json(&LoginRequest {
                username,
                password,
                expires_in_mins: SESSION_EXPIRES_MINS,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let payload: LoginResponse = response.json().await?;
            return Ok(payload.into());
        }

        // Prefer the provider's own message; fall back to the status
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("login failed with status {status}"));
        Err(ApiError::Auth(message))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
