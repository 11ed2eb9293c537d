use crate::constants::{DEFAULT_TIME_OF_DAY, DEFAULT_WEATHER_SEVERITY};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightState::Red => write!(f, "red"),
            LightState::Yellow => write!(f, "yellow"),
            LightState::Green => write!(f, "green"),
        }
    }
}

/// One snapshot of intersection conditions. Values outside the nominal
/// ranges are accepted; the membership functions saturate at 0/1.
#[derive(Copy, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficReading {
    /// Vehicles per minute, nominally 0-50.
    pub car_density: f64,
    /// Pedestrians per minute, nominally 0-25.
    pub pedestrian_count: f64,
    /// Hour on the 24-hour clock, nominally 0-23.
    pub time_of_day: f64,
    /// Severity scale, 1 (clear) to 5 (severe).
    pub weather_severity: f64,
}

impl TrafficReading {
    pub fn new(
        car_density: f64,
        pedestrian_count: f64,
        time_of_day: f64,
        weather_severity: f64,
    ) -> Self {
        Self {
            car_density,
            pedestrian_count,
            time_of_day,
            weather_severity,
        }
    }
}

// Caller-side fallbacks for fields the user left unset.
impl Default for TrafficReading {
    fn default() -> Self {
        Self {
            car_density: 0.0,
            pedestrian_count: 0.0,
            time_of_day: DEFAULT_TIME_OF_DAY,
            weather_severity: DEFAULT_WEATHER_SEVERITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecommendation {
    pub light: LightState,
    pub duration_seconds: u32,
    pub recommendation: String,
}
