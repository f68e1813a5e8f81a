pub mod config;
pub mod error;
pub mod types;

pub use config::{CostModel, Limits};
pub use error::{BarracksError, Result};
