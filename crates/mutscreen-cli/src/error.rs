use mutscreen::core::io::msa::MsaError;
use mutscreen::core::io::scores::ScoreError;
use mutscreen::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Alignment error: {0}")]
    Alignment(#[from] MsaError),

    #[error("Score table error: {0}")]
    Scores(#[from] ScoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
