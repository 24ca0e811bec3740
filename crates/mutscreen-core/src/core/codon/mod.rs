//! The genetic code as immutable process-wide tables, plus the back-translation
//! policies used to realize amino acid substitutions on nucleotide sequences.

pub mod backtranslate;

use super::models::sequence::{AminoAcid, Codon, SequenceError};
use phf::{Map, phf_map};

/// Synonymous codons per amino acid, in the table's listed order.
///
/// A closed static table: the 20 standard amino acids plus stop (`*`) and the
/// ambiguity codes `B` (Asn/Asp) and `Z` (Gln/Glu). The listed order is part of
/// the contract: it breaks ties during back-translation.
static SYNONYMOUS_CODONS: Map<u8, &'static [&'static str]> = phf_map! {
    b'F' => &["TTT", "TTC"],
    b'L' => &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"],
    b'I' => &["ATT", "ATC", "ATA"],
    b'M' => &["ATG"],
    b'V' => &["GTT", "GTC", "GTA", "GTG"],
    b'S' => &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"],
    b'P' => &["CCT", "CCC", "CCA", "CCG"],
    b'T' => &["ACT", "ACC", "ACA", "ACG"],
    b'A' => &["GCT", "GCC", "GCA", "GCG"],
    b'Y' => &["TAT", "TAC"],
    b'H' => &["CAT", "CAC"],
    b'Q' => &["CAA", "CAG"],
    b'N' => &["AAT", "AAC"],
    b'K' => &["AAA", "AAG"],
    b'D' => &["GAT", "GAC"],
    b'E' => &["GAA", "GAG"],
    b'C' => &["TGT", "TGC"],
    b'W' => &["TGG"],
    b'R' => &["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"],
    b'G' => &["GGT", "GGC", "GGA", "GGG"],
    b'*' => &["TAA", "TAG", "TGA"],
    b'B' => &["AAT", "AAC", "GAT", "GAC"],
    b'Z' => &["CAA", "CAG", "GAA", "GAG"],
};

/// The standard genetic code, codon to one-letter amino acid.
static GENETIC_CODE: Map<&'static str, u8> = phf_map! {
    "TTT" => b'F', "TTC" => b'F', "TTA" => b'L', "TTG" => b'L',
    "CTT" => b'L', "CTC" => b'L', "CTA" => b'L', "CTG" => b'L',
    "ATT" => b'I', "ATC" => b'I', "ATA" => b'I', "ATG" => b'M',
    "GTT" => b'V', "GTC" => b'V', "GTA" => b'V', "GTG" => b'V',
    "TCT" => b'S', "TCC" => b'S', "TCA" => b'S', "TCG" => b'S',
    "AGT" => b'S', "AGC" => b'S',
    "CCT" => b'P', "CCC" => b'P', "CCA" => b'P', "CCG" => b'P',
    "ACT" => b'T', "ACC" => b'T', "ACA" => b'T', "ACG" => b'T',
    "GCT" => b'A', "GCC" => b'A', "GCA" => b'A', "GCG" => b'A',
    "TAT" => b'Y', "TAC" => b'Y', "TAA" => b'*', "TAG" => b'*',
    "CAT" => b'H', "CAC" => b'H', "CAA" => b'Q', "CAG" => b'Q',
    "AAT" => b'N', "AAC" => b'N', "AAA" => b'K', "AAG" => b'K',
    "GAT" => b'D', "GAC" => b'D', "GAA" => b'E', "GAG" => b'E',
    "TGT" => b'C', "TGC" => b'C', "TGA" => b'*', "TGG" => b'W',
    "CGT" => b'R', "CGC" => b'R', "CGA" => b'R', "CGG" => b'R',
    "AGA" => b'R', "AGG" => b'R',
    "GGT" => b'G', "GGC" => b'G', "GGA" => b'G', "GGG" => b'G',
};

/// Looks up the synonymous codon list for an amino acid.
///
/// Lookups on symbols outside the closed table fail loudly rather than
/// synthesizing a default.
pub fn synonymous_codons(aa: AminoAcid) -> Result<&'static [&'static str], SequenceError> {
    SYNONYMOUS_CODONS
        .get(&aa)
        .copied()
        .ok_or(SequenceError::UnknownAminoAcid(aa as char))
}

/// Translates one codon with the standard genetic code.
pub fn translate(codon: Codon) -> Result<AminoAcid, SequenceError> {
    let key = std::str::from_utf8(&codon)
        .map_err(|_| SequenceError::UnknownCodon(format!("{:?}", codon)))?;
    GENETIC_CODE
        .get(key)
        .copied()
        .ok_or_else(|| SequenceError::UnknownCodon(key.to_string()))
}
