//! Player session - rosters plus persistence
//!
//! The session owns the in-memory rosters and writes them through to
//! storage after every mutation. Persistence failures are logged and
//! swallowed: the in-memory state stays authoritative for the session
//! and the user simply retries the action.

use crate::core::config::Limits;
use crate::core::types::{SquadId, UnitId};
use crate::roster::{SquadRoster, UnitRoster};
use crate::squad::{Squad, SquadWorkbench};
use crate::storage::Storage;
use crate::unit::Unit;

/// One player's barracks: their units, their squads, and where both are
/// kept between sessions
pub struct Barracks<S: Storage> {
    units: UnitRoster,
    squads: SquadRoster,
    store: S,
    limits: Limits,
}

impl<S: Storage> Barracks<S> {
    /// Load a session from storage, seeding the default units on first
    /// run. A failed load is treated as a first run.
    pub fn open(store: S, limits: Limits) -> Self {
        let units = match store.load_units() {
            Ok(Some(units)) => UnitRoster::from_units(units),
            Ok(None) => {
                tracing::info!("first run, seeding default units");
                UnitRoster::with_defaults()
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load units, starting from defaults");
                UnitRoster::with_defaults()
            }
        };

        let squads = match store.load_squads() {
            Ok(Some(squads)) => SquadRoster::from_squads(squads),
            Ok(None) => SquadRoster::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to load squads, starting empty");
                SquadRoster::new()
            }
        };

        tracing::info!(
            units = units.len(),
            squads = squads.len(),
            "barracks session opened"
        );

        Self {
            units,
            squads,
            store,
            limits,
        }
    }

    pub fn units(&self) -> &UnitRoster {
        &self.units
    }

    pub fn squads(&self) -> &SquadRoster {
        &self.squads
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Create or update a unit
    pub fn save_unit(&mut self, unit: Unit) {
        self.units.upsert(unit);
        self.persist_units();
    }

    /// Delete a unit and cascade: every squad loses its snapshots of it,
    /// and no other squad is touched
    pub fn delete_unit(&mut self, id: UnitId) -> bool {
        let removed = self.units.remove(id).is_some();
        if !removed {
            return false;
        }
        let purged = self.squads.purge_source(id);
        if purged > 0 {
            tracing::info!(unit = %id, members = purged, "cascaded unit delete into squads");
            self.persist_squads();
        }
        self.persist_units();
        true
    }

    /// Persist a squad handed out by [`SquadWorkbench::submit`]
    pub fn save_squad(&mut self, squad: Squad) {
        self.squads.upsert(squad);
        self.persist_squads();
    }

    pub fn delete_squad(&mut self, id: SquadId) -> bool {
        let removed = self.squads.remove(id).is_some();
        if removed {
            self.persist_squads();
        }
        removed
    }

    /// Workbench for a new squad
    pub fn new_squad(&self) -> SquadWorkbench {
        SquadWorkbench::new(self.limits.clone())
    }

    /// Workbench editing a copy of a stored squad
    pub fn edit_squad(&self, id: SquadId) -> Option<SquadWorkbench> {
        self.squads
            .get(id)
            .map(|squad| SquadWorkbench::edit(squad.clone(), self.limits.clone()))
    }

    fn persist_units(&self) {
        if let Err(error) = self.store.save_units(self.units.units()) {
            tracing::warn!(%error, "failed to persist units, in-memory state kept");
        }
    }

    fn persist_squads(&self) {
        if let Err(error) = self.store.save_squads(self.squads.squads()) {
            tracing::warn!(%error, "failed to persist squads, in-memory state kept");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{BarracksError, Result};
    use crate::storage::MemoryStore;

    /// Storage whose writes always fail, for the degraded-persistence path
    struct BrokenStore;

    impl Storage for BrokenStore {
        fn load_units(&self) -> Result<Option<Vec<Unit>>> {
            Err(BarracksError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk on fire",
            )))
        }
        fn save_units(&self, _: &[Unit]) -> Result<()> {
            Err(BarracksError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk on fire",
            )))
        }
        fn load_squads(&self) -> Result<Option<Vec<Squad>>> {
            Ok(None)
        }
        fn save_squads(&self, _: &[Squad]) -> Result<()> {
            Err(BarracksError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk on fire",
            )))
        }
    }

    #[test]
    fn test_first_run_seeds_defaults() {
        let session = Barracks::open(MemoryStore::new(), Limits::default());
        assert_eq!(session.units().len(), 4);
        assert!(session.squads().is_empty());
    }

    #[test]
    fn test_persistence_failure_keeps_memory_authoritative() {
        let mut session = Barracks::open(BrokenStore, Limits::default());
        let before = session.units().len();

        let unit = session.units().units()[0].clone();
        let id = unit.id;
        session.save_unit(unit);
        assert_eq!(session.units().len(), before);

        // Deleting still works in memory despite the failing store
        assert!(session.delete_unit(id));
        assert_eq!(session.units().len(), before - 1);
    }

    #[test]
    fn test_reopen_restores_saved_state() {
        let store = MemoryStore::new();
        let knight_id = {
            let mut session = Barracks::open(&store, Limits::default());
            let id = session.units().units()[0].id;
            session.delete_unit(id);
            session.units().units()[0].id
        };

        let session = Barracks::open(&store, Limits::default());
        assert_eq!(session.units().len(), 3);
        assert_eq!(session.units().units()[0].id, knight_id);
    }
}
