//! Raw combat attributes a unit is evaluated on

use crate::core::types::AbilityId;
use serde::{Deserialize, Serialize};

/// Lowest value a stat can take in the authoring form
pub const MIN_STAT: u32 = 1;
/// Highest value a stat can take in the authoring form
pub const MAX_STAT: u32 = 10;
/// A unit carries at most this many abilities
pub const MAX_ABILITIES: usize = 2;

/// Raw combat attributes of a unit
///
/// Stats are what the evaluation engine sees; everything else on a unit
/// (name, image) is presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub health: u32,
    pub range: u32,
    #[serde(rename = "move")]
    pub movement: u32,
    pub power: u32,
    /// Ordered, no duplicates, at most [`MAX_ABILITIES`]
    #[serde(default)]
    pub abilities: Vec<AbilityId>,
}

impl UnitStats {
    /// Baseline 1/1/1/1 statline with no abilities
    pub fn baseline() -> Self {
        Self {
            health: MIN_STAT,
            range: MIN_STAT,
            movement: MIN_STAT,
            power: MIN_STAT,
            abilities: Vec::new(),
        }
    }

    /// Form-boundary validation: every stat in authoring range, ability
    /// list within size and free of duplicates.
    ///
    /// Malformed stats are caught here and never reach the evaluation
    /// engine or the squad validator.
    pub fn is_well_formed(&self) -> bool {
        let stats_ok = [self.health, self.range, self.movement, self.power]
            .iter()
            .all(|&s| (MIN_STAT..=MAX_STAT).contains(&s));

        let abilities_ok = self.abilities.len() <= MAX_ABILITIES
            && self
                .abilities
                .iter()
                .enumerate()
                .all(|(i, id)| !self.abilities[..i].contains(id));

        stats_ok && abilities_ok
    }

    /// Add an ability id if there is room and it is not already present.
    /// Returns whether the ability was added.
    pub fn add_ability(&mut self, id: AbilityId) -> bool {
        if self.abilities.len() >= MAX_ABILITIES || self.abilities.contains(&id) {
            return false;
        }
        self.abilities.push(id);
        true
    }

    pub fn remove_ability(&mut self, id: &AbilityId) -> bool {
        let before = self.abilities.len();
        self.abilities.retain(|a| a != id);
        self.abilities.len() < before
    }
}

impl Default for UnitStats {
    fn default() -> Self {
        Self::baseline()
    }
}
