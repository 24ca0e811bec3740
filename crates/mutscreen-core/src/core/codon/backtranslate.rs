//! Codon choice for writing an amino acid substitution back into a nucleotide
//! sequence.

use super::synonymous_codons;
use crate::core::models::sequence::{AminoAcid, Codon, SequenceError};

/// Strategy for picking one synonymous codon for a substituted amino acid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodonPolicy {
    /// Choose the synonymous codon requiring the fewest nucleotide changes
    /// from the original triplet; ties broken by the codon table's listed
    /// order. This is the documented contract.
    #[default]
    MinimumEditDistance,
    /// Reproduce the historical implementation, whose comparison loop
    /// degenerates to always selecting the last codon listed for the amino
    /// acid, regardless of similarity to the original triplet. Offered only
    /// for output-compatibility with historical runs.
    LegacyLastEntry,
}

fn hamming(a: &Codon, b: &[u8]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Selects the codon that realizes `replacement` at a position whose original
/// triplet is `original`, under the given policy.
pub fn select_codon(
    replacement: AminoAcid,
    original: &Codon,
    policy: CodonPolicy,
) -> Result<Codon, SequenceError> {
    let candidates = synonymous_codons(replacement)?;
    let chosen = match policy {
        CodonPolicy::MinimumEditDistance => candidates
            .iter()
            .min_by_key(|codon| hamming(original, codon.as_bytes()))
            .copied(),
        CodonPolicy::LegacyLastEntry => candidates.last().copied(),
    };
    // The codon table never maps an amino acid to an empty list.
    let chosen = chosen.ok_or(SequenceError::UnknownAminoAcid(replacement as char))?;
    let bytes = chosen.as_bytes();
    Ok([bytes[0], bytes[1], bytes[2]])
}
