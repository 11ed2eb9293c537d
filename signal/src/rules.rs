use crate::constants::rule_weights;
use crate::membership::Memberships;

pub const RULE_COUNT: usize = 6;

/// Fire the rule base: each strength is min-conjunction of two degrees
/// scaled by the rule's fixed weight.
pub fn fire(m: &Memberships) -> [f64; RULE_COUNT] {
    [
        m.low_car_density.min(m.low_pedestrians) * rule_weights::QUIET,
        m.high_car_density.min(m.low_pedestrians) * rule_weights::VEHICLE_SURGE,
        m.low_car_density.min(m.high_pedestrians) * rule_weights::CROSSING_SURGE,
        m.high_car_density.min(m.high_pedestrians) * rule_weights::SATURATED,
        m.rush_hour * rule_weights::RUSH_HOUR,
        m.bad_weather * rule_weights::BAD_WEATHER,
    ]
}
