//! Balance configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use crate::unit::rank::Rank;
use serde::{Deserialize, Serialize};

/// Tuning constants for the unit cost model
///
/// These values have been tuned so that a well-rounded mid-tier unit lands
/// around 10-15 points. Changing them shifts the whole rank ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost per point of health (linear)
    ///
    /// Health scales linearly: stacking health is never punished, making
    /// durable units the cheapest way to spend points.
    pub health_factor: f64,

    /// Base cost per point of range
    pub range_factor: f64,
    /// Per-point growth applied to range cost
    ///
    /// Range compounds: each extra point of range costs more than the
    /// last, so long-reach units get expensive quickly.
    pub range_exponent: f64,

    /// Base cost per point of move
    pub move_factor: f64,
    /// Per-point growth applied to move cost
    pub move_exponent: f64,

    /// Base cost per point of power
    pub power_factor: f64,
    /// Per-point growth applied to power cost
    ///
    /// Power has the steepest curve of the three exponential stats:
    /// raw damage is the most efficient stat in play.
    pub power_exponent: f64,

    /// Multiplier on the range-cost x power-cost product
    ///
    /// Units that are both long-ranged and hard-hitting are worth more
    /// than the sum of their parts; this surcharge accounts for that.
    pub synergy_factor: f64,

    /// Upper cost bound of each rank band, from Trooper to Champion.
    /// Anything above the last ceiling is Paragon.
    pub rank_ceilings: [u32; 4],
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            health_factor: 1.0,
            range_factor: 2.0,
            range_exponent: 1.1,
            move_factor: 1.0,
            move_exponent: 1.1,
            power_factor: 3.0,
            power_exponent: 1.2,
            synergy_factor: 0.1,
            rank_ceilings: [8, 14, 20, 25],
        }
    }
}

impl CostModel {
    /// Classify a total cost into a rank band
    pub fn classify(&self, cost: u32) -> Rank {
        let [trooper, veteran, elite, champion] = self.rank_ceilings;
        match cost {
            c if c <= trooper => Rank::Trooper,
            c if c <= veteran => Rank::Veteran,
            c if c <= elite => Rank::Elite,
            c if c <= champion => Rank::Champion,
            _ => Rank::Paragon,
        }
    }
}

/// Process-wide squad and unit budgets, loaded once and read-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Rank-point price of fielding one unit of each rank,
    /// indexed Trooper..Paragon
    pub rank_point_costs: [u32; 5],

    /// Maximum number of members in a squad
    pub max_squad_size: usize,

    /// Ceiling on the sum of a squad's members' rank-point prices
    pub max_squad_rank_points: u32,

    /// Ceiling on a single unit's evaluated cost, enforced at
    /// authoring time rather than squad time
    pub max_unit_cost: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            rank_point_costs: [1, 3, 6, 10, 15],
            max_squad_size: 6,
            max_squad_rank_points: 30,
            max_unit_cost: 30,
        }
    }
}

impl Limits {
    /// Rank-point price of fielding one unit of the given rank
    pub fn rank_points(&self, rank: Rank) -> u32 {
        self.rank_point_costs[rank as usize]
    }
}
