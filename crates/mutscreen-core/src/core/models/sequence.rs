use crate::core::codon;
use std::fmt;
use thiserror::Error;

/// One-letter amino acid code, stored as an ASCII byte (e.g., `b'A'`).
pub type AminoAcid = u8;
/// Nucleotide base, stored as an ASCII byte (e.g., `b'T'`).
pub type Nucleotide = u8;
/// A nucleotide triplet encoding one amino acid.
pub type Codon = [Nucleotide; 3];

/// Amino acid symbols accepted in a protein sequence: the 20 standard residues
/// plus the stop (`*`) and ambiguity codes (`B`, `Z`, `X`) that substitution
/// matrices carry.
const PROTEIN_ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWYBZX*";

const DNA_ALPHABET: &[u8] = b"ACGT";

/// Whether `symbol` belongs to the accepted protein alphabet.
pub(crate) fn is_valid_residue(symbol: AminoAcid) -> bool {
    PROTEIN_ALPHABET.contains(&symbol)
}

/// Represents errors arising from sequence validation and translation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Invalid amino acid symbol '{symbol}' at position {index}")]
    InvalidResidue { symbol: char, index: usize },

    #[error("Invalid nucleotide '{symbol}' at position {index}")]
    InvalidNucleotide { symbol: char, index: usize },

    #[error("Nucleotide sequence length {length} is not a multiple of 3")]
    PartialCodon { length: usize },

    #[error("Amino acid '{0}' is not present in the codon table")]
    UnknownAminoAcid(char),

    #[error("Codon '{0}' is not part of the standard genetic code")]
    UnknownCodon(String),
}

/// An immutable, validated protein sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequence(Vec<AminoAcid>);

impl ProteinSequence {
    /// Validates and normalizes raw bytes into a protein sequence.
    ///
    /// Input is upper-cased; any symbol outside the accepted alphabet fails
    /// with `SequenceError::InvalidResidue`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SequenceError> {
        let mut residues = Vec::with_capacity(bytes.len());
        for (index, &b) in bytes.iter().enumerate() {
            let upper = b.to_ascii_uppercase();
            if !PROTEIN_ALPHABET.contains(&upper) {
                return Err(SequenceError::InvalidResidue {
                    symbol: b as char,
                    index,
                });
            }
            residues.push(upper);
        }
        Ok(Self(residues))
    }

    pub fn as_bytes(&self) -> &[AminoAcid] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the residue at a 0-based position, if in bounds.
    pub fn residue(&self, position: usize) -> Option<AminoAcid> {
        self.0.get(position).copied()
    }

    /// Copies the residues into a mutable working buffer for synthesis.
    pub fn to_working_copy(&self) -> Vec<AminoAcid> {
        self.0.clone()
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alphabet membership guarantees valid UTF-8.
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

impl std::str::FromStr for ProteinSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// An immutable, validated nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSequence(Vec<Nucleotide>);

impl DnaSequence {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SequenceError> {
        let mut bases = Vec::with_capacity(bytes.len());
        for (index, &b) in bytes.iter().enumerate() {
            let upper = b.to_ascii_uppercase();
            if !DNA_ALPHABET.contains(&upper) {
                return Err(SequenceError::InvalidNucleotide {
                    symbol: b as char,
                    index,
                });
            }
            bases.push(upper);
        }
        Ok(Self(bases))
    }

    pub fn as_bytes(&self) -> &[Nucleotide] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the codon covering protein position `p` (bases `p*3..p*3+3`).
    pub fn triplet(&self, protein_position: usize) -> Option<Codon> {
        let start = protein_position.checked_mul(3)?;
        let slice = self.0.get(start..start + 3)?;
        Some([slice[0], slice[1], slice[2]])
    }

    pub fn to_working_copy(&self) -> Vec<Nucleotide> {
        self.0.clone()
    }

    /// Translates the full sequence with the standard genetic code.
    ///
    /// Stop codons translate to `*`. Fails with `SequenceError::PartialCodon`
    /// if the length is not a multiple of 3.
    pub fn translate(&self) -> Result<ProteinSequence, SequenceError> {
        if self.0.len() % 3 != 0 {
            return Err(SequenceError::PartialCodon {
                length: self.0.len(),
            });
        }
        let mut residues = Vec::with_capacity(self.0.len() / 3);
        for chunk in self.0.chunks_exact(3) {
            let triplet = [chunk[0], chunk[1], chunk[2]];
            residues.push(codon::translate(triplet)?);
        }
        Ok(ProteinSequence(residues))
    }

    /// Translates and truncates at the first stop codon, yielding the open
    /// reading frame used as the wild-type protein for nucleotide inputs.
    pub fn translate_orf(&self) -> Result<ProteinSequence, SequenceError> {
        let full = self.translate()?;
        let end = full
            .0
            .iter()
            .position(|&aa| aa == b'*')
            .unwrap_or(full.0.len());
        Ok(ProteinSequence(full.0[..end].to_vec()))
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

impl std::str::FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// Builds a protein sequence from pre-validated residues.
///
/// Internal constructor for synthesis output; the bytes must already come
/// from a validated working copy.
pub(crate) fn protein_from_working_copy(residues: Vec<AminoAcid>) -> ProteinSequence {
    ProteinSequence(residues)
}

pub(crate) fn dna_from_working_copy(bases: Vec<Nucleotide>) -> DnaSequence {
    DnaSequence(bases)
}
