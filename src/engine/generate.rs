//! Random unit and squad generation
//!
//! Generation is a hill climb: start from the baseline statline, raise
//! archetype-weighted stats one point at a time (occasionally picking up
//! an ability from the archetype's pool), and back off any step that
//! overshoots the cost ceiling or the requested rank.

use crate::core::config::{CostModel, Limits};
use crate::core::error::{BarracksError, Result};
use crate::engine::abilities::{Ability, AbilityCatalog};
use crate::engine::cost::total_cost;
use crate::engine::Evaluation;
use crate::unit::stats::{MAX_ABILITIES, MAX_STAT};
use crate::unit::{Rank, UnitStats, RANKS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stat-bias label used as a generation hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Balanced,
    Tank,
    Sniper,
    Skirmisher,
    Bruiser,
    GlassCannon,
}

pub const ARCHETYPES: [Archetype; 6] = [
    Archetype::Balanced,
    Archetype::Tank,
    Archetype::Sniper,
    Archetype::Skirmisher,
    Archetype::Bruiser,
    Archetype::GlassCannon,
];

/// Relative odds of raising each stat on a generation round, plus the
/// percent chance of drafting an ability instead of nothing
#[derive(Debug, Clone, Copy)]
pub struct StatWeights {
    pub health: u32,
    pub range: u32,
    pub movement: u32,
    pub power: u32,
    pub ability: u32,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Balanced => "balanced",
            Archetype::Tank => "tank",
            Archetype::Sniper => "sniper",
            Archetype::Skirmisher => "skirmisher",
            Archetype::Bruiser => "bruiser",
            Archetype::GlassCannon => "glasscannon",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "balanced" => Ok(Archetype::Balanced),
            "tank" => Ok(Archetype::Tank),
            "sniper" => Ok(Archetype::Sniper),
            "skirmisher" => Ok(Archetype::Skirmisher),
            "bruiser" => Ok(Archetype::Bruiser),
            "glasscannon" => Ok(Archetype::GlassCannon),
            _ => Err(BarracksError::UnknownArchetype(s.to_string())),
        }
    }

    pub fn weights(&self) -> StatWeights {
        match self {
            Archetype::Balanced => StatWeights {
                health: 25,
                range: 25,
                movement: 25,
                power: 25,
                ability: 30,
            },
            Archetype::Tank => StatWeights {
                health: 60,
                range: 10,
                movement: 15,
                power: 15,
                ability: 20,
            },
            Archetype::Sniper => StatWeights {
                health: 15,
                range: 40,
                movement: 15,
                power: 30,
                ability: 35,
            },
            Archetype::Skirmisher => StatWeights {
                health: 20,
                range: 20,
                movement: 40,
                power: 20,
                ability: 30,
            },
            Archetype::Bruiser => StatWeights {
                health: 35,
                range: 15,
                movement: 20,
                power: 30,
                ability: 25,
            },
            Archetype::GlassCannon => StatWeights {
                health: 10,
                range: 30,
                movement: 15,
                power: 45,
                ability: 40,
            },
        }
    }

    /// Abilities this archetype may draft during generation
    pub fn ability_pool(&self) -> &'static [&'static str] {
        match self {
            Archetype::Balanced => {
                &["00000-charge", "00001-energy-trait", "00002-defensive-stance"]
            }
            Archetype::Tank => &["00002-defensive-stance"],
            Archetype::Sniper => &["00001-energy-trait"],
            Archetype::Skirmisher => &["00000-charge"],
            Archetype::Bruiser => &["00000-charge", "00002-defensive-stance"],
            Archetype::GlassCannon => &["00001-energy-trait"],
        }
    }

    /// Bundled card image matching the archetype's look
    pub fn preset_image(&self) -> &'static str {
        match self {
            Archetype::Tank => "templar_knight.png",
            Archetype::Bruiser => "orc_warrior.png",
            Archetype::Sniper => "elven_archer.png",
            Archetype::Skirmisher => "orc_javelin.png",
            Archetype::GlassCannon => "fire_mage.png",
            Archetype::Balanced => "templar_knight.png",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit produced by the generator, stats plus the evaluation that
/// certified them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedUnit {
    #[serde(flatten)]
    pub stats: UnitStats,
    pub cost: u32,
    pub rank: Rank,
    pub archetype: Archetype,
}

enum Step {
    Health,
    Range,
    Movement,
    Power,
}

fn choose_weighted_stat<R: Rng>(
    rng: &mut R,
    weights: &StatWeights,
    stats: &UnitStats,
) -> Option<Step> {
    // Stats at the authoring cap are out of the running
    let candidates = [
        (Step::Health, weights.health, stats.health),
        (Step::Range, weights.range, stats.range),
        (Step::Movement, weights.movement, stats.movement),
        (Step::Power, weights.power, stats.power),
    ];
    let open: Vec<_> = candidates
        .into_iter()
        .filter(|(_, _, value)| *value < MAX_STAT)
        .collect();
    let total: u32 = open.iter().map(|(_, w, _)| w).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for (step, weight, _) in open {
        if roll < weight {
            return Some(step);
        }
        roll -= weight;
    }
    None
}

fn apply_step(stats: &mut UnitStats, step: &Step, delta: i64) {
    let target = match step {
        Step::Health => &mut stats.health,
        Step::Range => &mut stats.range,
        Step::Movement => &mut stats.movement,
        Step::Power => &mut stats.power,
    };
    *target = (*target as i64 + delta) as u32;
}

fn evaluate(stats: &UnitStats, abilities: &[Ability], model: &CostModel) -> Evaluation {
    let cost = total_cost(stats, abilities, model);
    Evaluation {
        rank: model.classify(cost),
        cost,
    }
}

/// Generate a random unit targeting the requested rank with the
/// archetype's stat bias.
///
/// Not deterministic across calls (reroll UX); deterministic for a fixed
/// RNG state.
pub fn random_unit<R: Rng>(
    rng: &mut R,
    target_rank: Rank,
    archetype: Archetype,
    catalog: &AbilityCatalog,
    model: &CostModel,
    limits: &Limits,
) -> Result<GeneratedUnit> {
    let weights = archetype.weights();

    let mut pool: Vec<Ability> = archetype
        .ability_pool()
        .iter()
        .filter_map(|id| catalog.get(&(*id).into()).ok().cloned())
        .collect();
    let mut chosen: Vec<Ability> = Vec::new();

    let mut stats = UnitStats::baseline();
    let mut evaluation = evaluate(&stats, &chosen, model);

    let max_rounds = limits.max_unit_cost as usize * 4;
    let mut round = 0;

    while evaluation.rank != target_rank {
        round += 1;
        if round > max_rounds {
            return Err(BarracksError::GenerationFailed(format!(
                "no {} {} statline found within {} rounds",
                target_rank, archetype, max_rounds
            )));
        }

        let step = choose_weighted_stat(rng, &weights, &stats);
        if let Some(step) = &step {
            apply_step(&mut stats, step, 1);
        }

        let mut drafted = false;
        if !pool.is_empty()
            && chosen.len() < MAX_ABILITIES
            && rng.gen_range(0..100) < weights.ability
        {
            let index = rng.gen_range(0..pool.len());
            chosen.push(pool.remove(index));
            drafted = true;
        }

        if step.is_none() && !drafted {
            // Every stat capped and no ability drafted this round
            continue;
        }

        let candidate = evaluate(&stats, &chosen, model);
        if candidate.cost > limits.max_unit_cost || candidate.rank > target_rank {
            // Overshot: back the round out
            if let Some(step) = &step {
                apply_step(&mut stats, step, -1);
            }
            if drafted {
                let ability = chosen.pop().ok_or_else(|| {
                    BarracksError::GenerationFailed("ability backoff underflow".into())
                })?;
                pool.push(ability);
            }
            continue;
        }

        evaluation = candidate;
    }

    stats.abilities = chosen.iter().map(|a| a.id.clone()).collect();
    tracing::debug!(
        rank = %evaluation.rank,
        cost = evaluation.cost,
        %archetype,
        rounds = round,
        "generated unit"
    );

    Ok(GeneratedUnit {
        stats,
        cost: evaluation.cost,
        rank: evaluation.rank,
        archetype,
    })
}

/// Generate a full squad's worth of units: keep fielding random
/// affordable ranks until the size or rank-point budget runs out.
pub fn random_squad<R: Rng>(
    rng: &mut R,
    catalog: &AbilityCatalog,
    model: &CostModel,
    limits: &Limits,
) -> Result<Vec<GeneratedUnit>> {
    let mut squad = Vec::new();
    let mut remaining = limits.max_squad_rank_points;

    while squad.len() < limits.max_squad_size {
        let affordable: Vec<Rank> = RANKS
            .into_iter()
            .filter(|&r| limits.rank_points(r) <= remaining)
            .collect();
        if affordable.is_empty() {
            break;
        }

        let rank = affordable[rng.gen_range(0..affordable.len())];
        let archetype = ARCHETYPES[rng.gen_range(0..ARCHETYPES.len())];

        let unit = random_unit(rng, rank, archetype, catalog, model, limits)?;
        remaining -= limits.rank_points(unit.rank);
        squad.push(unit);
    }

    Ok(squad)
}
