use serde::{Deserialize, Serialize};
use super::station::CrowdLevel;

/// Symbolic amenity icon, resolved to a glyph by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmenityIcon {
    User,
    Users,
    CreditCard,
    Clock,
    Package,
    Coffee,
    Info,
    MapPin,
    Droplet,
    Globe,
    HelpCircle,
}

impl AmenityIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            AmenityIcon::User => "🚻",
            AmenityIcon::Users => "🧳",
            AmenityIcon::CreditCard => "💳",
            AmenityIcon::Clock => "🕒",
            AmenityIcon::Package => "📦",
            AmenityIcon::Coffee => "☕",
            AmenityIcon::Info => "ℹ️",
            AmenityIcon::MapPin => "📍",
            AmenityIcon::Droplet => "💧",
            AmenityIcon::Globe => "🌐",
            AmenityIcon::HelpCircle => "⛑️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub icon: AmenityIcon,
    pub crowd_level: CrowdLevel,
    pub location: String,
    pub details: String,
    /// Relative, human-readable time ("10 minutes ago")
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_name() {
        let icon: AmenityIcon = serde_json::from_str("\"CreditCard\"").expect("known icon");
        assert_eq!(icon, AmenityIcon::CreditCard);
        assert_eq!(icon.glyph(), "💳");
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        assert!(serde_json::from_str::<AmenityIcon>("\"Rocket\"").is_err());
    }
}
