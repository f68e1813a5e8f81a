//! Squads - named, ordered collections of unit snapshots

pub mod validator;
pub mod workbench;

pub use validator::{RankTally, SquadReview, SquadViolation};
pub use workbench::SquadWorkbench;

use crate::core::types::{MemberId, SquadId, UnitId};
use crate::unit::{ImageRef, Unit, UnitStats};
use serde::{Deserialize, Serialize};

/// A unit placed in a squad
///
/// A full snapshot, not a reference: editing the source unit later does
/// not change members already placed. `source_id` only serves the cascade
/// when the source unit is deleted from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadMember {
    pub id: MemberId,
    pub source_id: UnitId,
    pub name: String,
    pub image: ImageRef,
    #[serde(flatten)]
    pub stats: UnitStats,
}

impl SquadMember {
    /// Snapshot a roster unit under a fresh squad-local identity
    pub fn snapshot(unit: &Unit) -> Self {
        Self {
            id: MemberId::new(),
            source_id: unit.id,
            name: unit.name.clone(),
            image: unit.image.clone(),
            stats: unit.stats.clone(),
        }
    }
}

/// A named squad owning copies of its units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub id: SquadId,
    pub name: String,
    pub members: Vec<SquadMember>,
}

impl Squad {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SquadId::new(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Drop every member snapshotted from the given roster unit.
    /// Returns how many were removed.
    pub fn purge_source(&mut self, source_id: UnitId) -> usize {
        let before = self.members.len();
        self.members.retain(|m| m.source_id != source_id);
        before - self.members.len()
    }
}
