use super::sequence::{AminoAcid, DnaSequence, ProteinSequence, is_valid_residue};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents errors from decoding mutant names back into edits.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NameParseError {
    #[error("Empty edit token")]
    EmptyToken,

    #[error("Malformed edit token '{0}': expected <wild><1-based position><replacement>")]
    MalformedToken(String),

    #[error("Edit token '{0}' carries position 0; positions are 1-based")]
    ZeroPosition(String),
}

/// A single point substitution: wild-type residue, 0-based position, replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edit {
    pub wild: AminoAcid,
    pub position: usize,
    pub replacement: AminoAcid,
}

impl Edit {
    /// Renders the canonical edit token, e.g. `M1L` for a substitution of the
    /// first residue. Positions are 1-based in the token.
    pub fn token(&self) -> String {
        format!(
            "{}{}{}",
            self.wild as char,
            self.position + 1,
            self.replacement as char
        )
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for Edit {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(NameParseError::EmptyToken);
        }
        if bytes.len() < 3 {
            return Err(NameParseError::MalformedToken(s.to_string()));
        }
        let wild = bytes[0];
        let replacement = bytes[bytes.len() - 1];
        if !is_valid_residue(wild) || !is_valid_residue(replacement) {
            return Err(NameParseError::MalformedToken(s.to_string()));
        }
        let digits = &s[1..s.len() - 1];
        let position_1b: usize = digits
            .parse()
            .map_err(|_| NameParseError::MalformedToken(s.to_string()))?;
        if position_1b == 0 {
            return Err(NameParseError::ZeroPosition(s.to_string()));
        }
        Ok(Self {
            wild,
            position: position_1b - 1,
            replacement,
        })
    }
}

/// A generated mutant: its canonical name, the edits that produced it, and the
/// materialized sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutant {
    /// Comma-joined edit tokens, ordered by ascending position, no trailing separator.
    pub name: String,
    pub edits: Vec<Edit>,
    pub protein: ProteinSequence,
    /// Present only for nucleotide input.
    pub nucleotide: Option<DnaSequence>,
}

impl Mutant {
    /// Builds the canonical name for a list of edits already ordered by position.
    pub fn canonical_name(edits: &[Edit]) -> String {
        let tokens: Vec<String> = edits.iter().map(Edit::token).collect();
        tokens.join(",")
    }

    /// Decodes a canonical mutant name into its edit list.
    pub fn parse_name(name: &str) -> Result<Vec<Edit>, NameParseError> {
        name.split(',').map(Edit::from_str).collect()
    }
}
