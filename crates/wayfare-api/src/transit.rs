//! # Transit Provider Client
//!
//! Route-list retrieval from an external transport-data provider.
//!
//! ## Wire Contract
//! ```text
//! GET {base}/services.json
//!     ?api_key=...&app_id=...
//!     &bounding_box=<sw_lng,sw_lat,ne_lng,ne_lat>
//!     &service_type=bus
//!
//! 200 → { "services": [ { "service_number": "15", "operator": "TfL",
//!                          "description": "...", "fare": "£1.75" }, ... ] }
//! ```
//!
//! Provider records are sparse; the mapping fills gaps with the same
//! defaults the UI was designed around, so a half-described service
//! still renders as a complete card.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use wayfare_core::types::{Route, RouteId};

use crate::error::ApiResult;

/// Stock photo used for services the provider does not illustrate.
const ROUTE_PHOTO: &str = "https://images.unsplash.com/photo-1570125909232-eb263c188f7e";

/// Transit provider endpoint configuration.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// Base URL of the provider, e.g. `https://api.transportapi.com/v3/uk/`.
    pub base_url: Url,

    /// Provider API key.
    pub api_key: String,

    /// Provider application id.
    pub app_id: String,

    /// Search area as `sw_lng,sw_lat,ne_lng,ne_lat`.
    pub bounding_box: String,
}

impl Default for TransitConfig {
    /// Defaults to the London area; credentials must be supplied by the
    /// caller (environment overrides in the app shell).
    fn default() -> Self {
        TransitConfig {
            base_url: Url::parse("https://api.transportapi.com/v3/uk/")
                .expect("static URL is valid"),
            api_key: String::new(),
            app_id: String::new(),
            bounding_box: "-0.5,51.3,0.0,51.6".to_string(),
        }
    }
}

/// Optional parameters of a route-list fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    /// Transport mode, e.g. "bus" or "train". Defaults to "bus".
    pub mode: Option<String>,

    /// Origin filter, forwarded verbatim when present.
    pub from: Option<String>,

    /// Destination filter, forwarded verbatim when present.
    pub to: Option<String>,
}

/// Route-list retrieval seam.
#[async_trait]
pub trait TransitProvider: Send + Sync {
    /// Fetches the current route list.
    async fn fetch_routes(&self, query: &RouteQuery) -> ApiResult<Vec<Route>>;
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ServicesResponse {
    #[serde(default)]
    services: Vec<ServiceRecord>,
}

/// One service as the provider describes it. Every field is optional on
/// the wire.
#[derive(Debug, Deserialize)]
struct ServiceRecord {
    service_number: Option<String>,
    name: Option<String>,
    description: Option<String>,
    operator: Option<String>,
    fare: Option<String>,
}

impl ServiceRecord {
    /// Converts a provider record into a display-ready route.
    fn into_route(self, index: usize) -> Route {
        let operator = self.operator.unwrap_or_else(|| "Transport UK".to_string());
        let title = match (&self.service_number, self.name) {
            (Some(number), _) => format!("Route {number}"),
            (None, Some(name)) => name,
            (None, None) => format!("Service {}", index + 1),
        };
        let description = self
            .description
            .unwrap_or_else(|| format!("{operator} - Bus Service"));

        Route {
            id: RouteId(index as u32),
            title,
            description,
            brand: operator,
            thumbnail: format!("{ROUTE_PHOTO}?w=80&h=80&fit=crop"),
            images: vec![format!("{ROUTE_PHOTO}?w=400&h=300&fit=crop")],
            rating: 4.5,
            price: self.fare.unwrap_or_else(|| "£1.75".to_string()),
        }
    }
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Production transit provider client.
#[derive(Debug, Clone)]
pub struct HttpTransitProvider {
    client: Client,
    config: TransitConfig,
}

impl HttpTransitProvider {
    pub fn new(config: TransitConfig) -> Self {
        HttpTransitProvider {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TransitProvider for HttpTransitProvider {
    async fn fetch_routes(&self, query: &RouteQuery) -> ApiResult<Vec<Route>> {
        let endpoint = self.config.base_url.join("services.json")?;

        let service_type = query.mode.as_deref().unwrap_or("bus");
        let mut params = vec![
            ("api_key", self.config.api_key.as_str()),
            ("app_id", self.config.app_id.as_str()),
            ("bounding_box", self.config.bounding_box.as_str()),
            ("service_type", service_type),
        ];
        if let Some(from) = query.from.as_deref() {
            params.push(("from", from));
        }
        if let Some(to) = query.to.as_deref() {
            params.push(("to", to));
        }

        let response = self
            .client
            .get(endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let payload: ServicesResponse = response.json().await?;
        Ok(payload
            .services
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_route(index))
            .collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_record_fills_defaults() {
        let record = ServiceRecord {
            service_number: None,
            name: None,
            description: None,
            operator: None,
            fare: None,
        };
        let route = record.into_route(0);
        assert_eq!(route.title, "Service 1");
        assert_eq!(route.brand, "Transport UK");
        assert_eq!(route.price, "£1.75");
        assert!(!route.thumbnail.is_empty());
    }

    #[test]
    fn test_service_number_wins_over_name() {
        let record = ServiceRecord {
            service_number: Some("15".to_string()),
            name: Some("Victoria Flyer".to_string()),
            description: Some("Victoria Station to Oxford Street".to_string()),
            operator: Some("TfL".to_string()),
            fare: Some("£1.90".to_string()),
        };
        let route = record.into_route(3);
        assert_eq!(route.title, "Route 15");
        assert_eq!(route.id, RouteId(3));
        assert_eq!(route.brand, "TfL");
        assert_eq!(route.price, "£1.90");
    }

    #[test]
    fn test_services_payload_parses_with_missing_fields() {
        let payload = r#"{
            "services": [
                { "service_number": "42", "operator": "TfL" },
                { "name": "Thames Clipper" }
            ]
        }"#;
        let parsed: ServicesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.services.len(), 2);

        let routes: Vec<Route> = parsed
            .services
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_route(i))
            .collect();
        assert_eq!(routes[0].title, "Route 42");
        assert_eq!(routes[1].title, "Thames Clipper");
    }

    #[test]
    fn test_empty_payload_is_no_services() {
        let parsed: ServicesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.services.is_empty());
    }
}
