//! The shipped evaluation engine

use crate::core::config::{CostModel, Limits};
use crate::core::error::Result;
use crate::core::types::Locale;
use crate::engine::abilities::{AbilityCatalog, LocalizedAbility};
use crate::engine::cost::total_cost;
use crate::engine::generate::{random_squad, random_unit, Archetype, GeneratedUnit};
use crate::engine::{Evaluation, EvaluationEngine};
use crate::unit::{Rank, UnitStats};
use async_trait::async_trait;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;

/// Evaluation engine backed by the built-in cost model and ability catalog
///
/// Evaluation is pure; only the generators draw from the RNG, which lives
/// behind a lock so the engine can be shared across tasks.
pub struct RulesetEngine {
    catalog: AbilityCatalog,
    model: CostModel,
    limits: Limits,
    rng: Mutex<ChaCha8Rng>,
}

impl RulesetEngine {
    /// Engine with the built-in catalog, default tuning and OS-seeded RNG
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: AbilityCatalog::builtin()?,
            model: CostModel::default(),
            limits: Limits::default(),
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        })
    }

    /// Engine with a fixed RNG seed, for reproducible generation
    pub fn with_seed(seed: u64) -> Result<Self> {
        Ok(Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            ..Self::new()?
        })
    }

    /// Replace the budgets (used by balance experiments and tests)
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the cost model tuning
    pub fn with_model(mut self, model: CostModel) -> Self {
        self.model = model;
        self
    }

    pub fn catalog(&self) -> &AbilityCatalog {
        &self.catalog
    }

    /// Synchronous evaluation core shared by the trait impl and the
    /// generators
    pub fn evaluate_stats(&self, stats: &UnitStats) -> Result<Evaluation> {
        let abilities = self.catalog.resolve(&stats.abilities)?;
        let cost = total_cost(stats, &abilities, &self.model);
        Ok(Evaluation {
            rank: self.model.classify(cost),
            cost,
        })
    }
}

#[async_trait]
impl EvaluationEngine for RulesetEngine {
    async fn evaluate_unit(&self, stats: &UnitStats) -> Result<Evaluation> {
        self.evaluate_stats(stats)
    }

    async fn generate_unit(&self, rank: Rank, archetype: Archetype) -> Result<GeneratedUnit> {
        let mut rng = self.rng.lock().await;
        random_unit(
            &mut *rng,
            rank,
            archetype,
            &self.catalog,
            &self.model,
            &self.limits,
        )
    }

    async fn generate_squad(&self) -> Result<Vec<GeneratedUnit>> {
        let mut rng = self.rng.lock().await;
        random_squad(&mut *rng, &self.catalog, &self.model, &self.limits)
    }

    async fn available_abilities(&self, locale: Locale) -> Result<Vec<LocalizedAbility>> {
        Ok(self.catalog.localized(locale))
    }

    fn limits(&self) -> &Limits {
        &self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluation_is_deterministic_per_stats() {
        let engine = RulesetEngine::new().unwrap();
        let mut stats = UnitStats::baseline();
        stats.add_ability("00000-charge".into());

        let first = engine.evaluate_unit(&stats).await.unwrap();
        let second = engine.evaluate_unit(&stats).await.unwrap();
        assert_eq!(first, second);
        // Baseline 8 plus the charge ability at 3
        assert_eq!(first.cost, 11);
        assert_eq!(first.rank, Rank::Veteran);
    }

    #[tokio::test]
    async fn test_unknown_ability_is_rejected() {
        let engine = RulesetEngine::new().unwrap();
        let mut stats = UnitStats::baseline();
        stats.abilities.push("not-a-real-ability".into());
        assert!(engine.evaluate_unit(&stats).await.is_err());
    }

    #[tokio::test]
    async fn test_seeded_engines_generate_identically() {
        let a = RulesetEngine::with_seed(5).unwrap();
        let b = RulesetEngine::with_seed(5).unwrap();
        let left = a.generate_unit(Rank::Elite, Archetype::Sniper).await.unwrap();
        let right = b.generate_unit(Rank::Elite, Archetype::Sniper).await.unwrap();
        assert_eq!(left, right);
    }

    #[tokio::test]
    async fn test_abilities_listing_localizes() {
        let engine = RulesetEngine::new().unwrap();
        let en = engine.available_abilities(Locale::EnEn).await.unwrap();
        assert_eq!(en.len(), 3);
        assert_eq!(en[2].label, "Defensive stance");
    }
}
