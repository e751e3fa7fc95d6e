use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The bookable slots shown on the calendar page.
///
/// Deserializes through `FromStr`, so every entry point accepts the same spellings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AppointmentTime {
    #[serde(rename = "10 a.m.")]
    Ten,
    #[serde(rename = "11 a.m.")]
    Eleven,
    #[serde(rename = "12 p.m.")]
    Twelve,
    // Stored with a leading space; existing rows depend on it.
    #[serde(rename = " 1 p.m.")]
    One,
}

impl AppointmentTime {
    pub const ALL: [AppointmentTime; 4] = [
        AppointmentTime::Ten,
        AppointmentTime::Eleven,
        AppointmentTime::Twelve,
        AppointmentTime::One,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentTime::Ten => "10 a.m.",
            AppointmentTime::Eleven => "11 a.m.",
            AppointmentTime::Twelve => "12 p.m.",
            AppointmentTime::One => " 1 p.m.",
        }
    }
}

impl fmt::Display for AppointmentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().trim_start())
    }
}

impl FromStr for AppointmentTime {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AppointmentTime::ALL
            .into_iter()
            .find(|t| t.as_str().trim_start() == trimmed)
            .ok_or_else(|| anyhow::anyhow!("invalid appointment time: {s:?}"))
    }
}

impl<'de> Deserialize<'de> for AppointmentTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub day: String,
    pub time: AppointmentTime,
    pub notes: String,
}
