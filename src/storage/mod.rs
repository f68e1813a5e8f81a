//! Persistence collaborator
//!
//! Storage is local to the client and single-writer within a session, so
//! the interface is a plain synchronous seam: one document per
//! collection. A missing document means first run.

use crate::core::error::Result;
use crate::squad::Squad;
use crate::unit::Unit;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Where units and squads are durably kept between sessions
pub trait Storage {
    /// `None` on first run (nothing stored yet)
    fn load_units(&self) -> Result<Option<Vec<Unit>>>;
    fn save_units(&self, units: &[Unit]) -> Result<()>;
    /// `None` on first run
    fn load_squads(&self) -> Result<Option<Vec<Squad>>>;
    fn save_squads(&self, squads: &[Squad]) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn load_units(&self) -> Result<Option<Vec<Unit>>> {
        (**self).load_units()
    }

    fn save_units(&self, units: &[Unit]) -> Result<()> {
        (**self).save_units(units)
    }

    fn load_squads(&self) -> Result<Option<Vec<Squad>>> {
        (**self).load_squads()
    }

    fn save_squads(&self, squads: &[Squad]) -> Result<()> {
        (**self).save_squads(squads)
    }
}

/// JSON documents in a directory: `units.json` and `squads.json`
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load_doc<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save_doc<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for JsonStore {
    fn load_units(&self) -> Result<Option<Vec<Unit>>> {
        self.load_doc("units.json")
    }

    fn save_units(&self, units: &[Unit]) -> Result<()> {
        self.save_doc("units.json", &units)
    }

    fn load_squads(&self) -> Result<Option<Vec<Squad>>> {
        self.load_doc("squads.json")
    }

    fn save_squads(&self, squads: &[Squad]) -> Result<()> {
        self.save_doc("squads.json", &squads)
    }
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    units: Mutex<Option<Vec<Unit>>>,
    squads: Mutex<Option<Vec<Squad>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn load_units(&self) -> Result<Option<Vec<Unit>>> {
        Ok(self.units.lock().map_err(poisoned)?.clone())
    }

    fn save_units(&self, units: &[Unit]) -> Result<()> {
        *self.units.lock().map_err(poisoned)? = Some(units.to_vec());
        Ok(())
    }

    fn load_squads(&self) -> Result<Option<Vec<Squad>>> {
        Ok(self.squads.lock().map_err(poisoned)?.clone())
    }

    fn save_squads(&self, squads: &[Squad]) -> Result<()> {
        *self.squads.lock().map_err(poisoned)? = Some(squads.to_vec());
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> crate::core::error::BarracksError {
    std::io::Error::new(std::io::ErrorKind::Other, "storage lock poisoned").into()
}
