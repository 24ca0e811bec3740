//! Amino-acid substitution matrices.
//!
//! Eight standard matrices (five BLOSUM, three PAM) are embedded into the
//! binary as NCBI flat-format text and parsed on load. Only the lower
//! triangle of each table is read; the upper triangle is mirrored from it,
//! so a loaded matrix is symmetric by construction.
//!
//! Score lookups are explicit: asking for a symbol the matrix does not
//! carry is an error, never a silent default.

pub mod ranking;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::models::sequence::AminoAcid;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("unknown substitution matrix '{0}'")]
    UnknownMatrix(String),
    #[error("symbol '{symbol}' is not in the {matrix} alphabet")]
    UnknownKey { symbol: char, matrix: MatrixName },
    #[error("'{symbol}' has {available} ranked candidate(s), but substituent selection needs at least two")]
    InsufficientCandidates { symbol: char, available: usize },
    #[error("malformed {name} table: {reason}")]
    Malformed { name: MatrixName, reason: String },
}

/// The supported substitution matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixName {
    Blosum45,
    Blosum50,
    Blosum62,
    Blosum80,
    Blosum90,
    Pam30,
    Pam90,
    Pam250,
}

impl MatrixName {
    pub const ALL: [MatrixName; 8] = [
        MatrixName::Blosum45,
        MatrixName::Blosum50,
        MatrixName::Blosum62,
        MatrixName::Blosum80,
        MatrixName::Blosum90,
        MatrixName::Pam30,
        MatrixName::Pam90,
        MatrixName::Pam250,
    ];

    fn table(self) -> &'static str {
        match self {
            MatrixName::Blosum45 => include_str!("../../../data/matrices/BLOSUM45.txt"),
            MatrixName::Blosum50 => include_str!("../../../data/matrices/BLOSUM50.txt"),
            MatrixName::Blosum62 => include_str!("../../../data/matrices/BLOSUM62.txt"),
            MatrixName::Blosum80 => include_str!("../../../data/matrices/BLOSUM80.txt"),
            MatrixName::Blosum90 => include_str!("../../../data/matrices/BLOSUM90.txt"),
            MatrixName::Pam30 => include_str!("../../../data/matrices/PAM30.txt"),
            MatrixName::Pam90 => include_str!("../../../data/matrices/PAM90.txt"),
            MatrixName::Pam250 => include_str!("../../../data/matrices/PAM250.txt"),
        }
    }
}

impl fmt::Display for MatrixName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixName::Blosum45 => "Blosum45",
            MatrixName::Blosum50 => "Blosum50",
            MatrixName::Blosum62 => "Blosum62",
            MatrixName::Blosum80 => "Blosum80",
            MatrixName::Blosum90 => "Blosum90",
            MatrixName::Pam30 => "Pam30",
            MatrixName::Pam90 => "Pam90",
            MatrixName::Pam250 => "Pam250",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MatrixName {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatrixError::UnknownMatrix(s.to_string()))
    }
}

/// A loaded, symmetric substitution matrix.
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    name: MatrixName,
    alphabet: Vec<AminoAcid>,
    scores: Vec<Vec<f64>>,
}

impl SubstitutionMatrix {
    /// Loads one of the embedded matrices.
    pub fn load(name: MatrixName) -> Result<Self, MatrixError> {
        let matrix = Self::parse(name, name.table())?;
        tracing::debug!(
            matrix = %name,
            symbols = matrix.alphabet.len(),
            "Loaded substitution matrix"
        );
        Ok(matrix)
    }

    fn parse(name: MatrixName, text: &str) -> Result<Self, MatrixError> {
        let malformed = |reason: String| MatrixError::Malformed { name, reason };

        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| malformed("missing header row".to_string()))?;
        let alphabet: Vec<AminoAcid> = header
            .split_whitespace()
            .map(|token| match token.as_bytes() {
                [symbol] => Ok(*symbol),
                _ => Err(malformed(format!("header symbol '{}' is not a single byte", token))),
            })
            .collect::<Result<_, _>>()?;
        let size = alphabet.len();
        if size < 2 {
            return Err(malformed(format!("alphabet has only {} symbol(s)", size)));
        }

        let mut grid = vec![vec![0.0_f64; size]; size];
        let mut parsed_rows = 0;
        for (row, line) in lines.enumerate() {
            if row >= size {
                return Err(malformed(format!("more than {} data rows", size)));
            }
            let mut tokens = line.split_whitespace();
            let label = tokens
                .next()
                .ok_or_else(|| malformed(format!("data row {} is empty", row + 1)))?;
            if label.as_bytes() != [alphabet[row]] {
                return Err(malformed(format!(
                    "row {} is labeled '{}', expected '{}'",
                    row + 1,
                    label,
                    alphabet[row] as char
                )));
            }
            let values: Vec<f64> = tokens
                .map(|token| {
                    token
                        .parse::<f64>()
                        .map_err(|_| malformed(format!("'{}' is not a score", token)))
                })
                .collect::<Result<_, _>>()?;
            if values.len() != size {
                return Err(malformed(format!(
                    "row '{}' has {} scores, expected {}",
                    label,
                    values.len(),
                    size
                )));
            }
            grid[row] = values;
            parsed_rows += 1;
        }
        if parsed_rows != size {
            return Err(malformed(format!(
                "found {} data rows, expected {}",
                parsed_rows, size
            )));
        }

        // Mirror the lower triangle over the diagonal.
        let mut scores = vec![vec![0.0_f64; size]; size];
        for i in 0..size {
            for j in 0..=i {
                scores[i][j] = grid[i][j];
                scores[j][i] = grid[i][j];
            }
        }

        Ok(Self {
            name,
            alphabet,
            scores,
        })
    }

    pub fn name(&self) -> MatrixName {
        self.name
    }

    /// The symbols carried by this matrix, in table order.
    pub fn alphabet(&self) -> &[AminoAcid] {
        &self.alphabet
    }

    pub fn contains(&self, symbol: AminoAcid) -> bool {
        self.alphabet.contains(&symbol)
    }

    fn index_of(&self, symbol: AminoAcid) -> Result<usize, MatrixError> {
        self.alphabet
            .iter()
            .position(|&s| s == symbol)
            .ok_or(MatrixError::UnknownKey {
                symbol: symbol as char,
                matrix: self.name,
            })
    }

    /// Looks up the substitution score for a pair of symbols.
    pub fn score(&self, a: AminoAcid, b: AminoAcid) -> Result<f64, MatrixError> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.scores[i][j])
    }
}
