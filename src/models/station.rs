use serde::{Deserialize, Serialize};
use super::amenity::Amenity;
use super::train::Train;

/// Congestion indicator shared by stations, amenities and ticket queues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CrowdLevel::Low => "Not Crowded",
            CrowdLevel::Medium => "Moderate",
            CrowdLevel::High => "Crowded",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            CrowdLevel::Low => "status-badge badge-low",
            CrowdLevel::Medium => "status-badge badge-medium",
            CrowdLevel::High => "status-badge badge-high",
        }
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_train: Option<Train>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueInfo {
    pub total: u32,
    pub average_wait_time: String,
    pub status: CrowdLevel,
    pub queue_percentage: f64,
    pub last_updated: String,
}

impl QueueInfo {
    /// Fill ratio for the queue bar, clamped to 0-100
    #[must_use]
    pub fn bar_percentage(&self) -> f64 {
        self.queue_percentage.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketCounter {
    pub name: String,
    pub current_queue: QueueInfo,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub code: String,
    pub city: String,
    pub state: String,
    pub crowd_level: CrowdLevel,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub ticket_counters: Vec<TicketCounter>,
    #[serde(default)]
    pub upcoming_trains: Vec<Train>,
}

impl Station {
    #[must_use]
    pub fn get_amenity(&self, amenity_id: &str) -> Option<&Amenity> {
        self.amenities.iter().find(|a| a.id == amenity_id)
    }

    #[must_use]
    pub fn get_platform(&self, number: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.number == number)
    }

    /// Case-insensitive match against name, city or station code
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.city.to_lowercase().contains(&query)
            || self.code.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> Station {
        Station {
            id: "test".to_string(),
            name: "Test Junction".to_string(),
            code: "TJN".to_string(),
            city: "Madurai".to_string(),
            state: "Tamil Nadu".to_string(),
            crowd_level: CrowdLevel::Low,
            is_favorite: false,
            coordinates: None,
            amenities: Vec::new(),
            platforms: vec![Platform { number: 2, current_train: None }],
            ticket_counters: Vec::new(),
            upcoming_trains: Vec::new(),
        }
    }

    #[test]
    fn test_crowd_level_labels() {
        assert_eq!(CrowdLevel::Low.label(), "Not Crowded");
        assert_eq!(CrowdLevel::Medium.label(), "Moderate");
        assert_eq!(CrowdLevel::High.label(), "Crowded");
    }

    #[test]
    fn test_crowd_level_deserializes_lowercase() {
        let level: CrowdLevel = serde_json::from_str("\"medium\"").expect("valid crowd level");
        assert_eq!(level, CrowdLevel::Medium);
        assert!(serde_json::from_str::<CrowdLevel>("\"Medium\"").is_err());
    }

    #[test]
    fn test_matches_query_name_city_code() {
        let station = sample_station();
        assert!(station.matches_query("junction"));
        assert!(station.matches_query("MADURAI"));
        assert!(station.matches_query("tjn"));
        assert!(station.matches_query("   "));
        assert!(!station.matches_query("mumbai"));
    }

    #[test]
    fn test_get_platform() {
        let station = sample_station();
        assert!(station.get_platform(2).is_some());
        assert!(station.get_platform(1).is_none());
    }

    #[test]
    fn test_queue_bar_percentage_clamped() {
        let mut queue = QueueInfo {
            total: 3,
            average_wait_time: "2 minutes".to_string(),
            status: CrowdLevel::Low,
            queue_percentage: 140.0,
            last_updated: "now".to_string(),
        };
        assert_eq!(queue.bar_percentage(), 100.0);
        queue.queue_percentage = -5.0;
        assert_eq!(queue.bar_percentage(), 0.0);
    }
}
