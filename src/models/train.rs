use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Train number as printed on the ticket, not necessarily numeric
    pub number: String,
    pub name: String,
    pub destination: String,
    pub platform: u32,
    #[serde(with = "hhmm_serde")]
    pub arrival_time: NaiveTime,
    #[serde(default, with = "option_hhmm_serde", skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<NaiveTime>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    pub last_updated: String,
}

impl Train {
    /// Status text and delay are independent fields; either one marks the train late
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        self.delay.is_some_and(|d| d > 0) || self.status.starts_with("Delayed")
    }

    #[must_use]
    pub fn arrival_label(&self) -> String {
        self.arrival_time.format(TIME_FORMAT).to_string()
    }

    #[must_use]
    pub fn departure_label(&self) -> Option<String> {
        self.departure_time.map(|t| t.format(TIME_FORMAT).to_string())
    }
}

const TIME_FORMAT: &str = "%H:%M";

mod hhmm_serde {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(super::TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, super::TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod option_hhmm_serde {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(super::TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| NaiveTime::parse_from_str(&s, super::TIME_FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
