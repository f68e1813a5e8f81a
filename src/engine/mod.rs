//! Evaluation engine boundary
//!
//! Everything that turns raw stats into a rank/cost classification sits
//! behind [`EvaluationEngine`]. Editors and the squad validator depend on
//! the trait, not on a concrete engine, so the ruleset can be swapped or
//! mocked at the seam.

pub mod abilities;
pub mod cost;
pub mod generate;
pub mod ruleset;

pub use abilities::{Ability, AbilityCatalog, LocalizedAbility, Text};
pub use generate::{Archetype, GeneratedUnit, ARCHETYPES};
pub use ruleset::RulesetEngine;

use crate::core::config::Limits;
use crate::core::error::Result;
use crate::core::types::Locale;
use crate::unit::{Rank, UnitStats};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Derived classification of a statline
///
/// Never persisted: recomputed from stats on demand so it can never go
/// stale after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub rank: Rank,
    pub cost: u32,
}

/// The async boundary to the evaluation engine
///
/// `evaluate_unit` is deterministic for fixed stats. Generation calls may
/// fail; callers must leave their prior state untouched on failure and
/// must not assume a retry will succeed.
#[async_trait]
pub trait EvaluationEngine: Send + Sync {
    /// Classify a statline into a rank and point cost
    async fn evaluate_unit(&self, stats: &UnitStats) -> Result<Evaluation>;

    /// Produce a random unit consistent with the requested rank and
    /// archetype bias
    async fn generate_unit(&self, rank: Rank, archetype: Archetype) -> Result<GeneratedUnit>;

    /// Produce a full squad's worth of units in one call
    async fn generate_squad(&self) -> Result<Vec<GeneratedUnit>>;

    /// The ability catalog projected into a locale
    async fn available_abilities(&self, locale: Locale) -> Result<Vec<LocalizedAbility>>;

    /// Process-wide budgets, loaded once
    fn limits(&self) -> &Limits;
}
