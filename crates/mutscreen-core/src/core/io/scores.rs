//! Parsers for the evolutionary scorer's output tables.
//!
//! The scorer writes a whitespace-separated table with a header line and
//! double-quoted row labels. In mutant mode each row is one mutant name
//! and its combined score; in screening mode each row is one amino acid
//! and a score per sequence position, with `NA` marking positions the
//! scorer could not evaluate.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::models::sequence::AminoAcid;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed score table: {0}")]
    Malformed(String),
}

/// Per-mutant combined scores, ordered ascending by score (most
/// stabilizing predictions first).
#[derive(Debug, Clone, PartialEq)]
pub struct MutantScores {
    entries: Vec<(String, f64)>,
}

impl MutantScores {
    pub fn parse(text: &str) -> Result<Self, ScoreError> {
        let mut entries = Vec::new();
        for line in text.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let name = tokens
                .next()
                .ok_or_else(|| ScoreError::Malformed("empty score row".to_string()))?
                .trim_matches('"')
                .to_string();
            let raw = tokens.next().ok_or_else(|| {
                ScoreError::Malformed(format!("row '{}' carries no score", name))
            })?;
            let score: f64 = raw
                .parse()
                .map_err(|_| ScoreError::Malformed(format!("'{}' is not a score", raw)))?;
            entries.push((name, score));
        }
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(Self { entries })
    }

    pub fn read_file(path: &Path) -> Result<Self, ScoreError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Entries sorted ascending by score.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, score)| score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Screening-mode score grid: one row per amino acid, one column per
/// sequence position. `NA` cells are stored as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMatrix {
    residues: Vec<AminoAcid>,
    scores: Vec<Vec<f64>>,
}

impl ScreenMatrix {
    pub fn parse(text: &str) -> Result<Self, ScoreError> {
        let mut residues = Vec::new();
        let mut scores: Vec<Vec<f64>> = Vec::new();
        for line in text.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let label = tokens
                .next()
                .ok_or_else(|| ScoreError::Malformed("empty score row".to_string()))?
                .trim_matches('"');
            let residue = match label.as_bytes() {
                [symbol] => *symbol,
                _ => {
                    return Err(ScoreError::Malformed(format!(
                        "row label '{}' is not a single residue",
                        label
                    )));
                }
            };
            let row: Vec<f64> = tokens
                .map(|token| {
                    if token == "NA" {
                        Ok(0.0)
                    } else {
                        token.parse::<f64>().map_err(|_| {
                            ScoreError::Malformed(format!("'{}' is not a score", token))
                        })
                    }
                })
                .collect::<Result<_, _>>()?;
            if let Some(first) = scores.first()
                && first.len() != row.len()
            {
                return Err(ScoreError::Malformed(format!(
                    "row '{}' spans {} positions, expected {}",
                    residue as char,
                    row.len(),
                    first.len()
                )));
            }
            residues.push(residue);
            scores.push(row);
        }
        Ok(Self { residues, scores })
    }

    pub fn read_file(path: &Path) -> Result<Self, ScoreError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    /// Number of scored sequence positions.
    pub fn positions(&self) -> usize {
        self.scores.first().map_or(0, Vec::len)
    }

    /// Score of placing `residue` at 0-based `position`.
    pub fn score(&self, residue: AminoAcid, position: usize) -> Option<f64> {
        let row = self.residues.iter().position(|&r| r == residue)?;
        self.scores[row].get(position).copied()
    }
}
