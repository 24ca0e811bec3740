//! The combinatorial screening workflow.
//!
//! Resolves the wild type, enumerates position subsets, synthesizes one
//! mutant per subset and assembles the catalog. The run is deterministic:
//! identical inputs yield a byte-identical catalog.

use tracing::info;

use crate::core::io::fasta;
use crate::core::matrices::SubstitutionMatrix;
use crate::core::models::sequence::{DnaSequence, ProteinSequence};
use crate::engine::catalog::MutantCatalog;
use crate::engine::config::{InputKind, ScreenConfig};
use crate::engine::enumerator;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::synthesizer::Synthesizer;

/// Outcome of a screening run.
#[derive(Debug)]
pub struct ScreenResult {
    pub catalog: MutantCatalog,
    pub wild_type: ProteinSequence,
    /// The validated nucleotide input, for nucleotide runs.
    pub wild_type_nucleotide: Option<DnaSequence>,
}

/// Runs a full screen over the wild type named by `sequence_source` (a
/// FASTA file path or raw FASTA text).
///
/// Persisting the name list or catalog is left to the caller via
/// [`MutantCatalog::write_names`] and [`MutantCatalog::write_tsv`].
pub fn run(
    config: &ScreenConfig,
    sequence_source: &str,
    reporter: &ProgressReporter,
) -> Result<ScreenResult, EngineError> {
    info!(
        matrix = %config.matrix,
        positions = config.positions.len(),
        mandatory = config.mandatory.len(),
        "Starting combinatorial screen"
    );

    let (wild_type, wild_type_nucleotide) =
        reporter.phase("Resolving wild type", || load_wild_type(config, sequence_source))?;
    info!(residues = wild_type.len(), "Resolved wild-type protein");

    for &position in &config.positions {
        if position >= wild_type.len() {
            return Err(EngineError::InvalidPosition {
                value: (position + 1).to_string(),
                reason: format!("wild type is only {} residues long", wild_type.len()),
            });
        }
    }

    let matrix = reporter.phase("Loading substitution matrix", || {
        SubstitutionMatrix::load(config.matrix)
    })?;

    let subsets = reporter.phase("Enumerating position subsets", || {
        enumerator::check_ceiling(
            config.positions.len(),
            config.max_mutations.unwrap_or(config.positions.len()),
            config.max_combinations,
        )?;
        Ok::<_, EngineError>(enumerator::enumerate(
            &config.positions,
            config.max_mutations,
            &config.mandatory,
        ))
    })?;
    info!(subsets = subsets.len(), "Enumerated position subsets");

    let synthesizer = Synthesizer::new(
        &matrix,
        config.direction,
        config.codon_policy,
        &wild_type,
        wild_type_nucleotide.as_ref(),
    );
    let mut catalog = MutantCatalog::new();
    reporter.report(Progress::PhaseStart {
        name: "Synthesizing mutants",
    });
    reporter.report(Progress::TaskStart {
        total_steps: subsets.len() as u64,
    });
    for subset in &subsets {
        catalog.insert(synthesizer.synthesize(subset)?)?;
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(mutants = catalog.len(), "Screen finished");
    Ok(ScreenResult {
        catalog,
        wild_type,
        wild_type_nucleotide,
    })
}

fn load_wild_type(
    config: &ScreenConfig,
    source: &str,
) -> Result<(ProteinSequence, Option<DnaSequence>), EngineError> {
    let records = fasta::resolve_input(source)?;
    // The parser guarantees at least one record; the first is the wild type.
    let record = records
        .first()
        .ok_or(fasta::FastaError::MissingHeader)?;
    match config.input {
        InputKind::Protein => Ok((record.sequence.parse()?, None)),
        InputKind::Nucleotide => {
            let dna: DnaSequence = record.sequence.parse()?;
            let protein = dna.translate_orf()?;
            Ok((protein, Some(dna)))
        }
    }
}
