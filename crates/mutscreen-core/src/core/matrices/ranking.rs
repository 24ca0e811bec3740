//! Score-ordered ranking of substituent candidates.
//!
//! A ranking is a total order over the matrix alphabet: candidates are
//! sorted by substitution score against the wild-type residue, with ties
//! broken by symbol byte order so identical inputs always produce the
//! identical ranking. The substituent for a position is always the
//! second-ranked candidate; under descending order the top-ranked entry is
//! the wild-type residue itself, so index 1 is its closest neighbor.

use super::{MatrixError, SubstitutionMatrix};
use crate::core::models::sequence::AminoAcid;

/// Symbols that can never be written into a mutant: the wildcard and stop.
const EXCLUDED_CANDIDATES: [AminoAcid; 2] = [b'X', b'*'];

/// Orientation of the candidate ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RankDirection {
    /// Highest-scoring candidates first (conservative substitutions).
    #[default]
    Descending,
    /// Lowest-scoring candidates first (disruptive substitutions).
    Ascending,
}

impl SubstitutionMatrix {
    /// Ranks every eligible candidate against `aa`.
    pub fn rank(
        &self,
        aa: AminoAcid,
        direction: RankDirection,
    ) -> Result<Vec<(AminoAcid, f64)>, MatrixError> {
        let mut ranked = Vec::with_capacity(self.alphabet().len());
        for &candidate in self.alphabet() {
            if EXCLUDED_CANDIDATES.contains(&candidate) {
                continue;
            }
            ranked.push((candidate, self.score(aa, candidate)?));
        }
        ranked.sort_by(|a, b| match direction {
            RankDirection::Descending => b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)),
            RankDirection::Ascending => a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)),
        });
        Ok(ranked)
    }

    /// Selects the substituent for `aa`: the second-ranked candidate.
    pub fn select_substituent(
        &self,
        aa: AminoAcid,
        direction: RankDirection,
    ) -> Result<AminoAcid, MatrixError> {
        let ranked = self.rank(aa, direction)?;
        if ranked.len() < 2 {
            return Err(MatrixError::InsufficientCandidates {
                symbol: aa as char,
                available: ranked.len(),
            });
        }
        Ok(ranked[1].0)
    }
}
