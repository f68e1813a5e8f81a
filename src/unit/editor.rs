//! Unit authoring
//!
//! A draft is always editable; validity only gates the save action. The
//! evaluation is recomputed after every stat edit and cleared in the
//! meantime, so a stale rank/cost can never gate a save.

use crate::core::config::Limits;
use crate::core::error::Result;
use crate::core::types::{AbilityId, UnitId};
use crate::engine::{Archetype, Evaluation, EvaluationEngine};
use crate::unit::{ImageRef, Rank, Unit, UnitStats};

/// An in-progress unit being created or edited
#[derive(Debug, Clone)]
pub struct UnitDraft {
    id: UnitId,
    pub name: String,
    pub image: ImageRef,
    stats: UnitStats,
    evaluation: Option<Evaluation>,
}

impl UnitDraft {
    /// Blank draft with the baseline statline
    pub fn new() -> Self {
        Self {
            id: UnitId::new(),
            name: String::new(),
            image: ImageRef::default(),
            stats: UnitStats::baseline(),
            evaluation: None,
        }
    }

    /// Draft editing an existing unit in place (same id)
    pub fn edit(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            name: unit.name.clone(),
            image: unit.image.clone(),
            stats: unit.stats.clone(),
            evaluation: None,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Mutate the statline. Clears the cached evaluation: rank and cost
    /// are unknown until the next `evaluate`.
    pub fn update_stats(&mut self, edit: impl FnOnce(&mut UnitStats)) {
        edit(&mut self.stats);
        self.evaluation = None;
    }

    pub fn add_ability(&mut self, id: AbilityId) -> bool {
        let added = self.stats.add_ability(id);
        if added {
            self.evaluation = None;
        }
        added
    }

    pub fn remove_ability(&mut self, id: &AbilityId) -> bool {
        let removed = self.stats.remove_ability(id);
        if removed {
            self.evaluation = None;
        }
        removed
    }

    /// Recompute the draft's evaluation from its current stats
    pub async fn evaluate<E>(&mut self, engine: &E) -> Result<Evaluation>
    where
        E: EvaluationEngine + ?Sized,
    {
        let evaluation = engine.evaluate_unit(&self.stats).await?;
        self.evaluation = Some(evaluation);
        Ok(evaluation)
    }

    /// The evaluation of the current stats, if one has been computed
    /// since the last edit
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Whether the save action is enabled.
    ///
    /// Requires a well-formed statline, a non-empty name and a current
    /// evaluation within the unit cost ceiling. An over-cost draft stays
    /// fully editable; only saving is blocked.
    pub fn can_save(&self, limits: &Limits) -> bool {
        let name_ok = !self.name.trim().is_empty();
        let cost_ok = self
            .evaluation
            .map_or(false, |e| e.cost <= limits.max_unit_cost);
        name_ok && self.stats.is_well_formed() && cost_ok
    }

    /// Replace the whole draft from a generated unit ("reroll").
    ///
    /// On engine failure the draft is left untouched; no partial state is
    /// committed.
    pub async fn reroll<E>(&mut self, engine: &E, rank: Rank, archetype: Archetype) -> Result<()>
    where
        E: EvaluationEngine + ?Sized,
    {
        let generated = engine.generate_unit(rank, archetype).await?;

        self.name = format!("{} {}", generated.rank, generated.archetype);
        if let Some(first) = self.name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        self.image = ImageRef::Preset(generated.archetype.preset_image().to_string());
        self.stats = generated.stats;
        self.evaluation = Some(Evaluation {
            rank: generated.rank,
            cost: generated.cost,
        });
        Ok(())
    }

    /// Freeze the draft into a unit for the roster
    pub fn finish(&self) -> Unit {
        Unit {
            id: self.id,
            name: self.name.trim().to_string(),
            image: self.image.clone(),
            stats: self.stats.clone(),
        }
    }
}

impl Default for UnitDraft {
    fn default() -> Self {
        Self::new()
    }
}
