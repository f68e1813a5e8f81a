//! Barracks - squad composition and unit evaluation for Escarmouche

pub mod core;
pub mod engine;
pub mod roster;
pub mod session;
pub mod squad;
pub mod storage;
pub mod unit;

pub use crate::core::{BarracksError, CostModel, Limits, Result};
pub use engine::{EvaluationEngine, RulesetEngine};
pub use session::Barracks;
