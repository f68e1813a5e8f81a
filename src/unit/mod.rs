//! User-authored combat units

pub mod editor;
pub mod rank;
pub mod stats;

pub use rank::{Rank, RANKS};
pub use stats::UnitStats;

use crate::core::types::UnitId;
use serde::{Deserialize, Serialize};

/// Where a unit's card image comes from.
///
/// A unit either points at one of the shipped preset images or carries an
/// uploaded payload (a data URL produced by the front-end), never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// File name of a bundled preset image
    Preset(String),
    /// Uploaded image payload (base64 data URL)
    Upload(String),
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::Preset("templar_knight.png".to_string())
    }
}

/// A user-authored unit: stats plus identity and presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub image: ImageRef,
    #[serde(flatten)]
    pub stats: UnitStats,
}

impl Unit {
    pub fn new(name: impl Into<String>, image: ImageRef, stats: UnitStats) -> Self {
        Self {
            id: UnitId::new(),
            name: name.into(),
            image,
            stats,
        }
    }

    /// A unit name must be non-empty after trimming
    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
