//! # Reference Data
//!
//! Fixed datasets backing the explore and schedules views, plus the
//! fallback route list substituted when the transit provider is
//! unreachable.
//!
//! ## Why Fixed Tables?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Destinations  - curated points of interest; no remote source       │
//! │  Schedules     - timetable keyed by route id; served after a short  │
//! │                  artificial delay to mimic a remote call            │
//! │  Fallback      - shown when FetchItems rejects, so the home screen  │
//! │                  is never empty (availability over accuracy)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The raw rows are const tables; the public constructors materialize
//! them into owned domain values.

use std::collections::BTreeMap;

use crate::types::{Capacity, Departure, Destination, DestinationId, Route, RouteId};

// =============================================================================
// Destinations
// =============================================================================

/// (id, name, category, distance, description, image, rating, visitors, highlights)
#[allow(clippy::type_complexity)]
const DESTINATION_ROWS: &[(
    u32,
    &str,
    &str,
    &str,
    &str,
    &str,
    f32,
    &str,
    &[&str],
)] = &[
    (
        1,
        "Victoria Station",
        "Railway Station",
        "2.1 km",
        "Major railway and coach station in central London",
        "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad",
        4.6,
        "15K+",
        &["WiFi", "Shops", "Restaurants", "Parking"],
    ),
    (
        2,
        "London Bridge Station",
        "Railway Station",
        "1.8 km",
        "Historic railway station in Southeast London",
        "https://images.unsplash.com/photo-1543832923-44667a44c804",
        4.5,
        "12K+",
        &["WiFi", "Shopping Centre", "Restaurants", "Toilets"],
    ),
    (
        3,
        "Covent Garden",
        "Shopping & Culture",
        "0.5 km",
        "Famous market with shops, restaurants & street performers",
        "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad",
        4.7,
        "45K+",
        &["Market", "Restaurants", "Street Art", "Museums"],
    ),
    (
        4,
        "Big Ben & Parliament",
        "Historical Landmark",
        "1.2 km",
        "Iconic parliament building and clock tower",
        "https://images.unsplash.com/photo-1486299267070-83823f5448dd",
        4.8,
        "50K+",
        &["Tours", "Photography", "History", "Guided Walks"],
    ),
    (
        5,
        "Tower of London",
        "Historical Site",
        "3.4 km",
        "Medieval fortress and museum with Crown Jewels",
        "https://images.unsplash.com/photo-1520986606214-8b456906c813",
        4.9,
        "38K+",
        &["Museums", "History", "Crown Jewels", "Tours"],
    ),
    (
        6,
        "British Museum",
        "Museum",
        "1.5 km",
        "World-famous museum with art & historical artifacts",
        "https://images.unsplash.com/photo-1555854877-bab0e564b8d5",
        4.7,
        "41K+",
        &["Art", "History", "Free Entry", "Guided Tours"],
    ),
    (
        7,
        "Oxford Street",
        "Shopping",
        "2.0 km",
        "Major shopping street with hundreds of stores",
        "https://images.unsplash.com/photo-1458442310124-dde6edb43d10",
        4.4,
        "60K+",
        &["Shopping", "Brands", "Restaurants", "Entertainment"],
    ),
    (
        8,
        "Trafalgar Square",
        "Public Square",
        "1.3 km",
        "Historic public space with fountains & galleries",
        "https://images.unsplash.com/photo-1529655683826-aba9b3e77383",
        4.6,
        "30K+",
        &["Photography", "Events", "Street Performers", "Galleries"],
    ),
    (
        9,
        "Manchester Piccadilly",
        "Railway Station",
        "335 km",
        "Main railway station in Manchester city centre",
        "https://images.unsplash.com/photo-1519832979-6fa011b87667",
        4.5,
        "25K+",
        &["WiFi", "Shops", "Restaurants", "City Access"],
    ),
    (
        10,
        "Manchester Cathedral",
        "Historical Landmark",
        "336 km",
        "Medieval cathedral in the heart of Manchester",
        "https://images.unsplash.com/photo-1518709766631-a6a7f45921c3",
        4.7,
        "18K+",
        &["History", "Architecture", "Tours", "Events"],
    ),
    (
        11,
        "Birmingham New Street",
        "Railway Station",
        "190 km",
        "Major railway hub in Birmingham city centre",
        "https://images.unsplash.com/photo-1474487548417-781cb71495f3",
        4.4,
        "22K+",
        &["Shopping", "WiFi", "Restaurants", "Transport Links"],
    ),
    (
        12,
        "Edinburgh Waverley",
        "Railway Station",
        "665 km",
        "Historic railway station in Edinburgh city centre",
        "https://images.unsplash.com/photo-1555881400-74d7acaacd8b",
        4.6,
        "19K+",
        &["Historic Building", "WiFi", "City Views", "Shopping"],
    ),
];

/// The fixed points-of-interest table backing the explore view.
pub fn reference_destinations() -> Vec<Destination> {
    DESTINATION_ROWS
        .iter()
        .map(
            |&(id, name, category, distance, description, image, rating, visitors, highlights)| {
                Destination {
                    id: DestinationId(id),
                    name: name.to_string(),
                    category: category.to_string(),
                    distance: distance.to_string(),
                    description: description.to_string(),
                    image: format!("{image}?w=400&h=300&fit=crop"),
                    rating,
                    visitors: visitors.to_string(),
                    highlights: highlights.iter().map(|h| h.to_string()).collect(),
                }
            },
        )
        .collect()
}

// =============================================================================
// Fallback Routes
// =============================================================================

/// (id, title, description, brand, photo, rating, price)
const FALLBACK_ROUTE_ROWS: &[(u32, &str, &str, &str, &str, f32, &str)] = &[
    (
        1,
        "Route 15",
        "Victoria Station to Oxford Street via Marble Arch",
        "TfL",
        "https://images.unsplash.com/photo-1570125909232-eb263c188f7e",
        4.8,
        "£1.75",
    ),
    (
        2,
        "Route 42",
        "King's Road to Elephant & Castle via London Bridge",
        "TfL",
        "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957",
        4.6,
        "£1.75",
    ),
    (
        3,
        "Route 87",
        "Marble Arch to Clapham Common via Victoria Station",
        "TfL",
        "https://images.unsplash.com/photo-1581262177000-8c2e6d5a0de7",
        4.5,
        "£1.75",
    ),
    (
        4,
        "District Line",
        "Victoria Station to Tower of London - Underground Metro Service",
        "TfL",
        "https://images.unsplash.com/photo-1530482054429-cc491f61333b",
        4.7,
        "£1.90",
    ),
    (
        5,
        "Avanti West Coast",
        "London Euston to Manchester Piccadilly - High-speed train service",
        "Avanti",
        "https://images.unsplash.com/photo-1474487548417-781cb71495f3",
        4.6,
        "£45.00",
    ),
    (
        6,
        "LNER",
        "London King's Cross to Edinburgh Waverley - East Coast Main Line",
        "LNER",
        "https://images.unsplash.com/photo-1520986606214-8b456906c813",
        4.8,
        "£65.00",
    ),
];

/// The fixed route list substituted when the transit provider fails.
///
/// Trades accuracy for availability: the home screen always has content.
pub fn fallback_routes() -> Vec<Route> {
    FALLBACK_ROUTE_ROWS
        .iter()
        .map(|&(id, title, description, brand, photo, rating, price)| Route {
            id: RouteId(id),
            title: title.to_string(),
            description: description.to_string(),
            brand: brand.to_string(),
            thumbnail: format!("{photo}?w=80&h=80&fit=crop"),
            images: vec![format!("{photo}?w=400&h=300&fit=crop")],
            rating,
            price: price.to_string(),
        })
        .collect()
}

// =============================================================================
// Schedules
// =============================================================================

/// (route id, destination, duration, [(time, capacity)])
#[allow(clippy::type_complexity)]
const SCHEDULE_ROWS: &[(u32, &str, &str, &[(&str, Capacity)])] = &[
    (
        1,
        "Victoria Station",
        "12 mins",
        &[
            ("06:30", Capacity::High),
            ("06:45", Capacity::Medium),
            ("07:00", Capacity::High),
            ("07:15", Capacity::High),
            ("07:30", Capacity::Medium),
            ("07:45", Capacity::Low),
            ("08:00", Capacity::High),
            ("08:15", Capacity::High),
        ],
    ),
    (
        2,
        "Elephant & Castle",
        "18 mins",
        &[
            ("06:15", Capacity::Medium),
            ("06:45", Capacity::High),
            ("07:15", Capacity::Low),
            ("07:45", Capacity::High),
            ("08:15", Capacity::Medium),
            ("08:45", Capacity::High),
        ],
    ),
    (
        3,
        "Clapham Common",
        "24 mins",
        &[
            ("06:00", Capacity::High),
            ("06:30", Capacity::Medium),
            ("07:00", Capacity::High),
            ("07:30", Capacity::Low),
            ("08:00", Capacity::High),
        ],
    ),
];

/// The fixed timetable keyed by route id.
///
/// Routes outside this table simply have no entries; a schedule lookup
/// for them resolves to an empty sequence, not an error.
pub fn reference_schedules() -> BTreeMap<RouteId, Vec<Departure>> {
    SCHEDULE_ROWS
        .iter()
        .map(|&(route, destination, duration, departures)| {
            let departures = departures
                .iter()
                .map(|&(time, capacity)| Departure {
                    time: time.to_string(),
                    destination: destination.to_string(),
                    duration: duration.to_string(),
                    capacity,
                })
                .collect();
            (RouteId(route), departures)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_destination_ids_are_unique() {
        let dests = reference_destinations();
        let ids: BTreeSet<_> = dests.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), dests.len());
        assert!(!dests.is_empty());
    }

    #[test]
    fn test_fallback_route_ids_are_unique() {
        let routes = fallback_routes();
        let ids: BTreeSet<_> = routes.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), routes.len());
        assert!(!routes.is_empty());
    }

    #[test]
    fn test_schedule_table_shape() {
        let schedules = reference_schedules();
        // Route 1 is the default selection and must have entries
        assert!(!schedules[&RouteId(1)].is_empty());
        // Every departure on a route shares its destination
        for departures in schedules.values() {
            assert!(!departures.is_empty());
            let dest = &departures[0].destination;
            assert!(departures.iter().all(|d| &d.destination == dest));
        }
        // Unknown routes are simply absent
        assert!(!schedules.contains_key(&RouteId(999)));
    }
}
