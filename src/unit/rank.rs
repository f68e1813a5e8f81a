//! Rank ladder - the ordered tiers units are classified into

use crate::core::error::{BarracksError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered unit tier, from cheapest to most elite
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Trooper,
    Veteran,
    Elite,
    Champion,
    Paragon,
}

/// All ranks in ascending order
pub const RANKS: [Rank; 5] = [
    Rank::Trooper,
    Rank::Veteran,
    Rank::Elite,
    Rank::Champion,
    Rank::Paragon,
];

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Trooper => "trooper",
            Rank::Veteran => "veteran",
            Rank::Elite => "elite",
            Rank::Champion => "champion",
            Rank::Paragon => "paragon",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "trooper" => Ok(Rank::Trooper),
            "veteran" => Ok(Rank::Veteran),
            "elite" => Ok(Rank::Elite),
            "champion" => Ok(Rank::Champion),
            "paragon" => Ok(Rank::Paragon),
            _ => Err(BarracksError::UnknownRank(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
