pub const DEFAULT_TIME_OF_DAY: f64 = 12.0;
pub const DEFAULT_WEATHER_SEVERITY: f64 = 1.0;

pub const MIN_GREEN_SECONDS: u32 = 15;
pub const MAX_GREEN_SECONDS: u32 = 90;

// Fixed base added after rule aggregation, and the fallback when no rule fires.
pub const BASE_GREEN_SECONDS: f64 = 25.0;
pub const FALLBACK_GREEN_SECONDS: f64 = 30.0;

// Rush hour is a crisp window: 07:00-09:00 and 17:00-19:00 inclusive.
pub const MORNING_RUSH: (f64, f64) = (7.0, 9.0);
pub const EVENING_RUSH: (f64, f64) = (17.0, 19.0);

pub mod rule_weights {
    /// Low traffic, low pedestrians: short green.
    pub const QUIET: f64 = 20.0;
    /// High traffic, low pedestrians: long green.
    pub const VEHICLE_SURGE: f64 = 55.0;
    /// Low traffic, high pedestrians: medium green.
    pub const CROSSING_SURGE: f64 = 35.0;
    /// High traffic, high pedestrians: very long green.
    pub const SATURATED: f64 = 70.0;
    /// Flat rush-hour bump.
    pub const RUSH_HOUR: f64 = 15.0;
    /// Flat bad-weather bump.
    pub const BAD_WEATHER: f64 = 10.0;
}
