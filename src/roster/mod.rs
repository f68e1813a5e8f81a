//! Ordered repositories for units and squads
//!
//! Identity is by id in both: saving under an existing id replaces the
//! entry in place, so repeated saves never duplicate.

use crate::core::types::{SquadId, UnitId};
use crate::squad::Squad;
use crate::unit::{ImageRef, Unit, UnitStats};

/// The player's authored units, in authoring order
#[derive(Debug, Clone, Default)]
pub struct UnitRoster {
    units: Vec<Unit>,
}

impl UnitRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: Vec<Unit>) -> Self {
        Self { units }
    }

    /// Roster seeded with the starter units shipped with the game
    pub fn with_defaults() -> Self {
        let make = |name: &str, health, range, movement, power, image: &str| {
            Unit::new(
                name,
                ImageRef::Preset(image.to_string()),
                UnitStats {
                    health,
                    range,
                    movement,
                    power,
                    abilities: Vec::new(),
                },
            )
        };

        Self {
            units: vec![
                make("Templier", 2, 1, 1, 1, "templar_knight.png"),
                make("Archer elfe", 1, 2, 1, 2, "elven_archer.png"),
                make("Sorcier crépusculaire", 1, 3, 2, 3, "fire_mage.png"),
                make("Guerrier orc", 3, 1, 1, 3, "orc_warrior.png"),
            ],
        }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Insert or replace by id, keeping position on replace
    pub fn upsert(&mut self, unit: Unit) {
        match self.units.iter_mut().find(|u| u.id == unit.id) {
            Some(slot) => *slot = unit,
            None => self.units.push(unit),
        }
    }

    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        let index = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(index))
    }
}

/// The player's saved squads, in save order
#[derive(Debug, Clone, Default)]
pub struct SquadRoster {
    squads: Vec<Squad>,
}

impl SquadRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_squads(squads: Vec<Squad>) -> Self {
        Self { squads }
    }

    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    pub fn len(&self) -> usize {
        self.squads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squads.is_empty()
    }

    pub fn get(&self, id: SquadId) -> Option<&Squad> {
        self.squads.iter().find(|s| s.id == id)
    }

    /// Insert or replace by id; saving the same squad twice keeps a
    /// single entry
    pub fn upsert(&mut self, squad: Squad) {
        match self.squads.iter_mut().find(|s| s.id == squad.id) {
            Some(slot) => *slot = squad,
            None => self.squads.push(squad),
        }
    }

    pub fn remove(&mut self, id: SquadId) -> Option<Squad> {
        let index = self.squads.iter().position(|s| s.id == id)?;
        Some(self.squads.remove(index))
    }

    /// Cascade for a deleted roster unit: drop its snapshots from every
    /// squad. Returns the total number of members removed.
    pub fn purge_source(&mut self, source_id: UnitId) -> usize {
        self.squads
            .iter_mut()
            .map(|s| s.purge_source(source_id))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squad::SquadMember;

    #[test]
    fn test_default_roster_is_seeded() {
        let roster = UnitRoster::with_defaults();
        assert_eq!(roster.len(), 4);
        assert!(roster.units().iter().all(|u| u.has_valid_name()));
        assert!(roster.units().iter().all(|u| u.stats.is_well_formed()));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut roster = UnitRoster::with_defaults();
        let mut edited = roster.units()[1].clone();
        edited.name = "Tireuse d'élite".to_string();

        roster.upsert(edited.clone());
        assert_eq!(roster.len(), 4);
        // Position preserved
        assert_eq!(roster.units()[1], edited);
    }

    #[test]
    fn test_squad_upsert_is_idempotent() {
        let mut roster = SquadRoster::new();
        let squad = Squad::new("Avant-garde");
        roster.upsert(squad.clone());
        roster.upsert(squad.clone());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_purge_source_spans_squads() {
        let units = UnitRoster::with_defaults();
        let knight = &units.units()[0];
        let archer = &units.units()[1];

        let mut with_knight = Squad::new("A");
        with_knight.members.push(SquadMember::snapshot(knight));
        with_knight.members.push(SquadMember::snapshot(archer));

        let mut without_knight = Squad::new("B");
        without_knight.members.push(SquadMember::snapshot(archer));

        let mut squads = SquadRoster::new();
        squads.upsert(with_knight);
        squads.upsert(without_knight);

        assert_eq!(squads.purge_source(knight.id), 1);
        // Only the squad that contained the knight changed
        assert_eq!(squads.squads()[0].members.len(), 1);
        assert_eq!(squads.squads()[1].members.len(), 1);
    }
}
