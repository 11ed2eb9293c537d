use crate::constants::{
    BASE_GREEN_SECONDS, FALLBACK_GREEN_SECONDS, MAX_GREEN_SECONDS, MIN_GREEN_SECONDS,
};
use crate::membership::{fuzzify, Memberships};
use crate::rules::{fire, RULE_COUNT};
use crate::types::{LightState, SignalRecommendation, TrafficReading};
use log::debug;

pub const WEATHER_SAFETY_SUFFIX: &str =
    " Weather conditions require extended timing for safety.";

/// Compute the recommended light state, green duration, and advisory text
/// for one reading. Pure and total: any finite inputs yield a result, and
/// identical inputs yield identical output.
pub fn evaluate(reading: &TrafficReading) -> SignalRecommendation {
    let memberships = fuzzify(reading);
    debug!("membership degrees: {:?}", memberships);

    let strengths = fire(&memberships);
    debug!("rule strengths: {:?}", strengths);

    let duration_seconds = defuzzify(&strengths);
    let (light, mut recommendation) = decide(reading, &memberships, duration_seconds);

    if reading.weather_severity > 3.0 {
        recommendation.push_str(WEATHER_SAFETY_SUFFIX);
    }

    SignalRecommendation {
        light,
        duration_seconds,
        recommendation,
    }
}

// Aggregation divides by the fixed rule count, not by total_weight;
// total_weight only gates the no-rule fallback. Kept as-is to match the
// reference controller's observable output.
fn defuzzify(strengths: &[f64; RULE_COUNT]) -> u32 {
    let total_weight: f64 = strengths.iter().map(|s| s.abs()).sum();
    let green = if total_weight > 0.0 {
        strengths.iter().sum::<f64>() / RULE_COUNT as f64 + BASE_GREEN_SECONDS
    } else {
        FALLBACK_GREEN_SECONDS
    };

    (green.round() as i64).clamp(MIN_GREEN_SECONDS as i64, MAX_GREEN_SECONDS as i64) as u32
}

// Priority order matters: heavy vehicle traffic wins over pedestrian
// pressure, which wins over the quiet-intersection short cycle.
fn decide(
    reading: &TrafficReading,
    memberships: &Memberships,
    duration_seconds: u32,
) -> (LightState, String) {
    let cars = reading.car_density;
    let pedestrians = reading.pedestrian_count;

    if cars > 30.0 || (memberships.rush_hour > 0.5 && cars > 15.0) {
        (
            LightState::Green,
            format!(
                "Heavy traffic detected. Extended green light recommended for {} seconds.",
                duration_seconds
            ),
        )
    } else if pedestrians > 15.0 {
        (
            LightState::Green,
            format!(
                "High pedestrian activity. Balanced green light timing of {} seconds.",
                duration_seconds
            ),
        )
    } else if cars < 5.0 && pedestrians < 3.0 {
        (
            LightState::Red,
            format!(
                "Low traffic detected. Short green cycle of {} seconds is sufficient.",
                duration_seconds
            ),
        )
    } else {
        (
            LightState::Yellow,
            format!(
                "Moderate traffic conditions. Standard green light duration of {} seconds.",
                duration_seconds
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_at(d: f64, p: f64, t: f64, w: f64) -> SignalRecommendation {
        evaluate(&TrafficReading::new(d, p, t, w))
    }

    #[test]
    fn deterministic() {
        let reading = TrafficReading::new(25.0, 8.0, 8.0, 2.0);
        assert_eq!(evaluate(&reading), evaluate(&reading));
    }

    #[test]
    fn duration_always_within_bounds() {
        for d in [-50.0, 0.0, 5.0, 20.0, 35.0, 50.0, 500.0] {
            for p in [-10.0, 0.0, 3.0, 10.0, 25.0, 100.0] {
                for t in [-1.0, 0.0, 8.0, 12.0, 18.0, 23.0, 30.0] {
                    for w in [0.0, 1.0, 3.0, 5.0, 9.0] {
                        let rec = evaluate_at(d, p, t, w);
                        assert!(
                            (MIN_GREEN_SECONDS..=MAX_GREEN_SECONDS)
                                .contains(&rec.duration_seconds),
                            "duration {} out of bounds for ({}, {}, {}, {})",
                            rec.duration_seconds,
                            d,
                            p,
                            t,
                            w
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn dense_traffic_always_goes_green() {
        for p in [0.0, 5.0, 20.0] {
            for t in [3.0, 8.0, 18.0] {
                for w in [1.0, 5.0] {
                    assert_eq!(evaluate_at(31.0, p, t, w).light, LightState::Green);
                }
            }
        }
    }

    #[test]
    fn rush_hour_with_moderate_traffic_goes_green() {
        let rec = evaluate_at(25.0, 8.0, 8.0, 2.0);
        assert_eq!(rec.light, LightState::Green);
        assert_eq!(rec.duration_seconds, 29);
        assert_eq!(
            rec.recommendation,
            "Heavy traffic detected. Extended green light recommended for 29 seconds."
        );
    }

    #[test]
    fn empty_intersection_goes_red_with_short_cycle() {
        let rec = evaluate_at(0.0, 0.0, 12.0, 1.0);
        assert_eq!(rec.light, LightState::Red);
        assert_eq!(rec.duration_seconds, 28);
        assert_eq!(
            rec.recommendation,
            "Low traffic detected. Short green cycle of 28 seconds is sufficient."
        );
    }

    #[test]
    fn pedestrian_surge_goes_green() {
        let rec = evaluate_at(10.0, 20.0, 12.0, 1.0);
        assert_eq!(rec.light, LightState::Green);
        assert_eq!(rec.duration_seconds, 28);
        assert_eq!(
            rec.recommendation,
            "High pedestrian activity. Balanced green light timing of 28 seconds."
        );
    }

    #[test]
    fn moderate_conditions_go_yellow_with_weather_warning() {
        let rec = evaluate_at(10.0, 5.0, 12.0, 5.0);
        assert_eq!(rec.light, LightState::Yellow);
        assert_eq!(rec.duration_seconds, 28);
        assert_eq!(
            rec.recommendation,
            "Moderate traffic conditions. Standard green light duration of 28 seconds. \
             Weather conditions require extended timing for safety."
        );
    }

    #[test]
    fn no_fired_rule_falls_back_to_thirty_seconds() {
        // d=20 and p=10 zero out every density/pedestrian degree pair,
        // midday is off rush hour, and severity 1 zeroes bad_weather.
        let rec = evaluate_at(20.0, 10.0, 12.0, 1.0);
        assert_eq!(rec.duration_seconds, 30);
        assert_eq!(rec.light, LightState::Yellow);
    }

    #[test]
    fn weather_suffix_iff_severity_above_three() {
        for w in [1.0, 2.0, 3.0] {
            let rec = evaluate_at(10.0, 5.0, 12.0, w);
            assert!(
                !rec.recommendation.ends_with(WEATHER_SAFETY_SUFFIX.trim_start()),
                "unexpected suffix at severity {}",
                w
            );
        }
        for w in [3.01, 4.0, 5.0, 9.0] {
            let rec = evaluate_at(10.0, 5.0, 12.0, w);
            assert!(
                rec.recommendation.ends_with(WEATHER_SAFETY_SUFFIX.trim_start()),
                "missing suffix at severity {}",
                w
            );
        }
    }

    #[test]
    fn default_reading_is_the_quiet_midday_case() {
        let rec = evaluate(&TrafficReading::default());
        assert_eq!(rec.light, LightState::Red);
        assert_eq!(rec.duration_seconds, 28);
    }
}
