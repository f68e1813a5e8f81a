use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarracksError {
    #[error("Invalid statline: {0}")]
    InvalidStats(String),

    #[error("Unknown ability: '{0}'")]
    UnknownAbility(String),

    #[error("Unknown rank: '{0}'")]
    UnknownRank(String),

    #[error("Unknown archetype: '{0}'")]
    UnknownArchetype(String),

    #[error("Squad is full ({max} members)")]
    SquadFull { max: usize },

    #[error("Squad cannot be submitted: {0}")]
    SquadRejected(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Ability catalog error: {0}")]
    CatalogError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BarracksError>;
