//! Unit cost computation
//!
//! Health is priced linearly; range, move and power each compound per
//! point; a surcharge applies to units that pair reach with hitting power.
//! The total is rounded up to a whole point.

use crate::core::config::CostModel;
use crate::engine::abilities::Ability;
use crate::unit::UnitStats;

/// Linear stat cost
pub fn simple_cost(value: u32, factor: f64) -> f64 {
    f64::from(value) * factor
}

/// Compounding stat cost: each point costs `exponent` times more than
/// the previous one
pub fn exponential_cost(value: u32, factor: f64, exponent: f64) -> f64 {
    f64::from(value) * factor * exponent.powi(value as i32 - 1)
}

/// Total evaluated cost of a statline with its resolved abilities
pub fn total_cost(stats: &UnitStats, abilities: &[Ability], model: &CostModel) -> u32 {
    let health_cost = simple_cost(stats.health, model.health_factor);
    let range_cost = exponential_cost(stats.range, model.range_factor, model.range_exponent);
    let move_cost = exponential_cost(stats.movement, model.move_factor, model.move_exponent);
    let power_cost = exponential_cost(stats.power, model.power_factor, model.power_exponent);

    let synergy_bonus = (f64::from(stats.range) * model.range_factor)
        * (f64::from(stats.power) * model.power_factor)
        * model.synergy_factor;

    let ability_cost: f64 = abilities.iter().map(|a| a.cost).sum();

    (health_cost + range_cost + move_cost + power_cost + synergy_bonus + ability_cost).ceil()
        as u32
}
