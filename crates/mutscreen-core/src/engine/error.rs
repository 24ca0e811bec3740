use thiserror::Error;

use crate::core::io::fasta::FastaError;
use crate::core::matrices::MatrixError;
use crate::core::models::sequence::SequenceError;

/// Consolidated error type for the screening engine and workflow.
///
/// Every variant is fatal; nothing here is retried. Callers receive the
/// first failure and no partial catalog.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid position '{value}': {reason}")]
    InvalidPosition { value: String, reason: String },

    #[error("Invalid preserve flag '{0}': expected 'True' or 'False'")]
    InvalidPolicy(String),

    #[error("Unknown input kind '{0}': expected 'protein' or 'nucleotide'")]
    UnknownInputKind(String),

    #[error("{needed} position subsets requested, exceeding the ceiling of {ceiling}")]
    TooManyCombinations { needed: u128, ceiling: u64 },

    #[error("Duplicate mutant name '{0}' in catalog")]
    DuplicateMutantName(String),

    #[error("Substitution matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("FASTA input error: {0}")]
    Fasta(#[from] FastaError),

    #[error("Catalog export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
