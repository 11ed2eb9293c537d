use crate::constants::{EVENING_RUSH, MORNING_RUSH};
use crate::types::TrafficReading;
use serde::Serialize;

/// Degrees of membership in [0,1] for every linguistic category.
///
/// The medium/normal/good degrees are carried for display and logging but
/// feed no rule; only the fields used by `rules::fire` influence timing.
#[derive(Copy, Debug, Clone, PartialEq, Serialize)]
pub struct Memberships {
    pub low_car_density: f64,
    pub medium_car_density: f64,
    pub high_car_density: f64,
    pub low_pedestrians: f64,
    pub medium_pedestrians: f64,
    pub high_pedestrians: f64,
    pub rush_hour: f64,
    pub normal_time: f64,
    pub good_weather: f64,
    pub bad_weather: f64,
}

pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn in_window(hour: f64, window: (f64, f64)) -> bool {
    hour >= window.0 && hour <= window.1
}

/// Crisp rush-hour indicator: 1.0 inside either window, 0.0 outside.
pub fn rush_hour_degree(hour: f64) -> f64 {
    if in_window(hour, MORNING_RUSH) || in_window(hour, EVENING_RUSH) {
        1.0
    } else {
        0.0
    }
}

pub fn fuzzify(reading: &TrafficReading) -> Memberships {
    let d = reading.car_density;
    let p = reading.pedestrian_count;
    let w = reading.weather_severity;

    let rush_hour = rush_hour_degree(reading.time_of_day);

    Memberships {
        low_car_density: clamp01((20.0 - d) / 20.0),
        medium_car_density: clamp01(if d <= 20.0 { d / 20.0 } else { (40.0 - d) / 20.0 }),
        high_car_density: clamp01((d - 20.0) / 30.0),
        low_pedestrians: clamp01((10.0 - p) / 10.0),
        medium_pedestrians: clamp01(if p <= 10.0 { p / 10.0 } else { (20.0 - p) / 10.0 }),
        high_pedestrians: clamp01((p - 10.0) / 15.0),
        rush_hour,
        normal_time: 1.0 - rush_hour,
        good_weather: clamp01((3.0 - w) / 2.0),
        bad_weather: clamp01((w - 2.0) / 3.0),
    }
}
