use crate::error::NavError;
use crate::models::{Amenity, NavigationRoute, Notification, Station};
use indexmap::IndexMap;
use std::sync::OnceLock;

const STATIONS_JSON: &str = include_str!("../data/stations.json");
const ROUTES_JSON: &str = include_str!("../data/routes.json");
const NOTIFICATIONS_JSON: &str = include_str!("../data/notifications.json");

/// Read-only lookup over the seed stations, routes and notifications.
///
/// Iteration order is seed order; the nearest-station search relies on it
/// for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: IndexMap<String, Station>,
    routes: IndexMap<String, Vec<NavigationRoute>>,
    notifications: Vec<Notification>,
}

impl StationRegistry {
    /// Parse the embedded seed tables
    ///
    /// # Errors
    ///
    /// Returns an error if any seed file fails to parse
    pub fn load() -> Result<Self, NavError> {
        Self::from_json(STATIONS_JSON, ROUTES_JSON, NOTIFICATIONS_JSON)
    }

    /// Build a registry from JSON strings in the seed layout
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to parse or a station id is duplicated
    pub fn from_json(stations: &str, routes: &str, notifications: &str) -> Result<Self, NavError> {
        let station_list: Vec<Station> = serde_json::from_str(stations)?;
        let routes: IndexMap<String, Vec<NavigationRoute>> = serde_json::from_str(routes)?;
        let notifications: Vec<Notification> = serde_json::from_str(notifications)?;

        let mut stations = IndexMap::with_capacity(station_list.len());
        for station in station_list {
            let id = station.id.clone();
            if stations.insert(id.clone(), station).is_some() {
                return Err(NavError::SeedData(format!("duplicate station id: {id}")));
            }
        }

        Ok(Self { stations, routes, notifications })
    }

    #[must_use]
    pub fn get_station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Routes for a station; empty for unknown ids
    #[must_use]
    pub fn get_routes(&self, station_id: &str) -> &[NavigationRoute] {
        match self.routes.get(station_id) {
            Some(routes) => routes,
            None => &[],
        }
    }

    #[must_use]
    pub fn get_station_list(&self) -> Vec<&Station> {
        self.stations.values().collect()
    }

    /// Resolve a station and one of its routes
    ///
    /// # Errors
    ///
    /// Returns `StationNotFound` or `RouteNotFound` for unknown ids
    pub fn find_route(&self, station_id: &str, route_id: &str) -> Result<(&Station, &NavigationRoute), NavError> {
        let station = self
            .get_station(station_id)
            .ok_or_else(|| NavError::StationNotFound(station_id.to_string()))?;
        let route = self
            .get_routes(station_id)
            .iter()
            .find(|r| r.id == route_id)
            .ok_or_else(|| NavError::RouteNotFound {
                station_id: station_id.to_string(),
                route_id: route_id.to_string(),
            })?;
        Ok((station, route))
    }

    /// Resolve a station and one of its amenities
    ///
    /// # Errors
    ///
    /// Returns `StationNotFound` or `AmenityNotFound` for unknown ids
    pub fn find_amenity(&self, station_id: &str, amenity_id: &str) -> Result<(&Station, &Amenity), NavError> {
        let station = self
            .get_station(station_id)
            .ok_or_else(|| NavError::StationNotFound(station_id.to_string()))?;
        let amenity = station
            .get_amenity(amenity_id)
            .ok_or_else(|| NavError::AmenityNotFound {
                station_id: station_id.to_string(),
                amenity_id: amenity_id.to_string(),
            })?;
        Ok((station, amenity))
    }

    /// Route leading to an amenity, chosen by keyword in the amenity name.
    ///
    /// Falls back to the ticket route, then to the station's first route.
    #[must_use]
    pub fn route_for_amenity(&self, station_id: &str, amenity: &Amenity) -> Option<&NavigationRoute> {
        let name = amenity.name.to_lowercase();
        let kind = [
            ("ticket", "ticket"),
            ("platform", "platform"),
            ("wait", "waiting"),
            ("wash", "washroom"),
            ("food", "food"),
        ]
        .into_iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or("ticket", |(_, kind)| kind);

        let routes = self.get_routes(station_id);
        let by_id = |suffix: &str| {
            let id = format!("{station_id}-{suffix}");
            routes.iter().find(|r| r.id == id)
        };
        by_id(kind).or_else(|| by_id("ticket")).or_else(|| routes.first())
    }

    /// Stations whose name, city or code contains `query` (case-insensitive)
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Station> {
        self.stations.values().filter(|s| s.matches_query(query)).collect()
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}

static REGISTRY: OnceLock<Result<StationRegistry, NavError>> = OnceLock::new();

/// Process-wide registry, parsed on first access
///
/// # Errors
///
/// Returns the seed parse error if the embedded data is invalid
pub fn registry() -> Result<&'static StationRegistry, NavError> {
    REGISTRY
        .get_or_init(StationRegistry::load)
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> StationRegistry {
        StationRegistry::load().expect("seed data should parse")
    }

    #[test]
    fn test_seed_loads_in_order() {
        let registry = seed();
        let ids: Vec<&str> = registry.get_station_list().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["chennai-central", "central", "southern", "egmore"]);
    }

    #[test]
    fn test_every_station_has_routes() {
        let registry = seed();
        for station in registry.get_station_list() {
            assert!(!registry.get_routes(&station.id).is_empty(), "{} has no routes", station.id);
        }
    }

    #[test]
    fn test_get_routes_unknown_station() {
        assert!(seed().get_routes("atlantis").is_empty());
    }

    #[test]
    fn test_find_route() {
        let registry = seed();
        let (station, route) = registry
            .find_route("egmore", "egmore-platform")
            .expect("route exists");
        assert_eq!(station.code, "MS");
        assert_eq!(route.waypoints.len(), 3);
        assert_eq!(route.steps.len(), 4);
    }

    #[test]
    fn test_find_route_errors() {
        let registry = seed();
        assert!(matches!(
            registry.find_route("atlantis", "x"),
            Err(NavError::StationNotFound(_))
        ));
        assert!(matches!(
            registry.find_route("central", "central-lounge"),
            Err(NavError::RouteNotFound { .. })
        ));
    }

    #[test]
    fn test_find_amenity() {
        let registry = seed();
        let (_, amenity) = registry.find_amenity("southern", "b1").expect("amenity exists");
        assert_eq!(amenity.name, "Drinking Water");
        assert!(matches!(
            registry.find_amenity("southern", "a1"),
            Err(NavError::AmenityNotFound { .. })
        ));
    }

    #[test]
    fn test_route_for_amenity() {
        let registry = seed();
        let station = registry.get_station("chennai-central").expect("station");
        let route_id = |amenity_id: &str| {
            let amenity = station.get_amenity(amenity_id).expect("amenity");
            registry
                .route_for_amenity(&station.id, amenity)
                .map(|r| r.id.clone())
        };
        for amenity in &station.amenities {
            assert!(registry.route_for_amenity(&station.id, amenity).is_some());
        }
        let washroom = station
            .amenities
            .iter()
            .find(|a| a.name.to_lowercase().contains("wash"))
            .expect("seed has a washroom");
        assert_eq!(route_id(&washroom.id).as_deref(), Some("chennai-central-washroom"));
    }

    #[test]
    fn test_route_for_amenity_falls_back() {
        let registry = seed();
        let (_, amenity) = registry.find_amenity("southern", "b1").expect("amenity exists");
        // "Drinking Water" has no matching keyword and southern has no ticket route
        let route = registry.route_for_amenity("southern", amenity).expect("fallback route");
        assert_eq!(route.id, "southern-food");
        assert!(registry.route_for_amenity("atlantis", amenity).is_none());
    }

    #[test]
    fn test_search() {
        let registry = seed();
        assert_eq!(registry.search("chennai").len(), 3);
        assert_eq!(registry.search("CNT").len(), 1);
        assert_eq!(registry.search("").len(), 4);
        assert!(registry.search("kolkata").is_empty());
    }

    #[test]
    fn test_notifications() {
        let registry = seed();
        assert_eq!(registry.notifications().len(), 4);
        assert_eq!(registry.unread_count(), 2);
    }

    #[test]
    fn test_duplicate_station_rejected() {
        let station = r#"{"id":"x","name":"X","code":"X","city":"C","state":"S","crowd_level":"low"}"#;
        let stations = format!("[{station},{station}]");
        let result = StationRegistry::from_json(&stations, "{}", "[]");
        assert!(matches!(result, Err(NavError::SeedData(_))));
    }

    #[test]
    fn test_global_registry() {
        let registry = registry().expect("seed data should parse");
        assert!(registry.get_station("central").is_some());
    }
}
