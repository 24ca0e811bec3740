//! Mutant synthesis: turning one position subset into a named mutant.

use super::error::EngineError;
use crate::core::codon::backtranslate::{self, CodonPolicy};
use crate::core::matrices::SubstitutionMatrix;
use crate::core::matrices::ranking::RankDirection;
use crate::core::models::mutant::{Edit, Mutant};
use crate::core::models::sequence::{
    DnaSequence, ProteinSequence, dna_from_working_copy, protein_from_working_copy,
};

/// Applies substituent selection to position subsets over one wild type.
///
/// Holds the ranked matrix and the immutable wild-type sequences; every
/// subset starts from a fresh working copy, so synthesis order between
/// subsets cannot leak state.
pub struct Synthesizer<'a> {
    matrix: &'a SubstitutionMatrix,
    direction: RankDirection,
    codon_policy: CodonPolicy,
    protein: &'a ProteinSequence,
    nucleotide: Option<&'a DnaSequence>,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        matrix: &'a SubstitutionMatrix,
        direction: RankDirection,
        codon_policy: CodonPolicy,
        protein: &'a ProteinSequence,
        nucleotide: Option<&'a DnaSequence>,
    ) -> Self {
        Self {
            matrix,
            direction,
            codon_policy,
            protein,
            nucleotide,
        }
    }

    /// Synthesizes the mutant for one subset of 0-based positions.
    ///
    /// Edits are applied in ascending position order regardless of the
    /// subset's order, so the name's tokens come out sorted.
    pub fn synthesize(&self, subset: &[usize]) -> Result<Mutant, EngineError> {
        let mut ordered = subset.to_vec();
        ordered.sort_unstable();

        let mut protein = self.protein.to_working_copy();
        let mut nucleotide = self.nucleotide.map(DnaSequence::to_working_copy);
        let mut edits = Vec::with_capacity(ordered.len());

        for &position in &ordered {
            let wild = self
                .protein
                .residue(position)
                .ok_or_else(|| EngineError::InvalidPosition {
                    value: (position + 1).to_string(),
                    reason: format!(
                        "wild type is only {} residues long",
                        self.protein.len()
                    ),
                })?;
            let replacement = self.matrix.select_substituent(wild, self.direction)?;
            protein[position] = replacement;

            if let (Some(source), Some(working)) = (self.nucleotide, nucleotide.as_mut()) {
                let original =
                    source
                        .triplet(position)
                        .ok_or_else(|| EngineError::InvalidPosition {
                            value: (position + 1).to_string(),
                            reason: "no codon at this position in the nucleotide input"
                                .to_string(),
                        })?;
                let codon = backtranslate::select_codon(replacement, &original, self.codon_policy)?;
                working[position * 3..position * 3 + 3].copy_from_slice(&codon);
            }

            edits.push(Edit {
                wild,
                position,
                replacement,
            });
        }

        Ok(Mutant {
            name: Mutant::canonical_name(&edits),
            edits,
            protein: protein_from_working_copy(protein),
            nucleotide: nucleotide.map(dna_from_working_copy),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrices::MatrixName;

    fn blosum62() -> SubstitutionMatrix {
        SubstitutionMatrix::load(MatrixName::Blosum62).unwrap()
    }

    mod protein_tests {
        use super::*;

        #[test]
        fn patches_one_position_and_names_the_edit() {
            let matrix = blosum62();
            let wild: ProteinSequence = "MAVLSK".parse().unwrap();
            let synthesizer = Synthesizer::new(
                &matrix,
                RankDirection::Descending,
                CodonPolicy::MinimumEditDistance,
                &wild,
                None,
            );

            let mutant = synthesizer.synthesize(&[0]).unwrap();
            assert_eq!(mutant.name, "M1L");
            assert_eq!(mutant.protein.to_string(), "LAVLSK");
            assert!(mutant.nucleotide.is_none());
        }

        #[test]
        fn applies_edits_in_ascending_position_order() {
            let matrix = blosum62();
            let wild: ProteinSequence = "MAVLSK".parse().unwrap();
            let synthesizer = Synthesizer::new(
                &matrix,
                RankDirection::Descending,
                CodonPolicy::MinimumEditDistance,
                &wild,
                None,
            );

            let mutant = synthesizer.synthesize(&[4, 0]).unwrap();
            assert_eq!(mutant.name, "M1L,S5A");
            assert_eq!(mutant.protein.to_string(), "LAVLAK");
        }

        #[test]
        fn leaves_unlisted_positions_untouched() {
            let matrix = blosum62();
            let wild: ProteinSequence = "MAVLSK".parse().unwrap();
            let synthesizer = Synthesizer::new(
                &matrix,
                RankDirection::Descending,
                CodonPolicy::MinimumEditDistance,
                &wild,
                None,
            );

            let mutant = synthesizer.synthesize(&[2]).unwrap();
            assert_eq!(mutant.name, "V3I");
            assert_eq!(mutant.protein.to_string(), "MAILSK");
        }

        #[test]
        fn rejects_positions_beyond_the_wild_type() {
            let matrix = blosum62();
            let wild: ProteinSequence = "MAV".parse().unwrap();
            let synthesizer = Synthesizer::new(
                &matrix,
                RankDirection::Descending,
                CodonPolicy::MinimumEditDistance,
                &wild,
                None,
            );

            let err = synthesizer.synthesize(&[3]).unwrap_err();
            assert!(matches!(err, EngineError::InvalidPosition { .. }));
        }
    }

    mod nucleotide_tests {
        use super::*;

        #[test]
        fn back_translates_the_edited_codon() {
            let matrix = blosum62();
            // ATG GCT GTC -> MAV
            let dna: DnaSequence = "ATGGCTGTC".parse().unwrap();
            let wild = dna.translate_orf().unwrap();
            let synthesizer = Synthesizer::new(
                &matrix,
                RankDirection::Descending,
                CodonPolicy::MinimumEditDistance,
                &wild,
                Some(&dna),
            );

            let mutant = synthesizer.synthesize(&[2]).unwrap();
            assert_eq!(mutant.name, "V3I");
            let mutated = mutant.nucleotide.unwrap();
            // GTC -> ATC is the single-base route from V to I.
            assert_eq!(mutated.to_string(), "ATGGCTATC");
            assert_eq!(mutated.translate().unwrap().to_string(), "MAI");
        }

        #[test]
        fn mutated_codons_translate_back_to_the_named_replacement() {
            let matrix = blosum62();
            let dna: DnaSequence = "ATGGCTGTCTTGTCTAAA".parse().unwrap();
            let wild = dna.translate_orf().unwrap();
            assert_eq!(wild.to_string(), "MAVLSK");
            let synthesizer = Synthesizer::new(
                &matrix,
                RankDirection::Descending,
                CodonPolicy::MinimumEditDistance,
                &wild,
                Some(&dna),
            );

            let mutant = synthesizer.synthesize(&[0, 2, 4]).unwrap();
            let translated = mutant.nucleotide.unwrap().translate().unwrap();
            assert_eq!(translated, mutant.protein);
        }
    }
}
