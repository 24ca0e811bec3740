//! Query-relative ungapping of multiple sequence alignments.
//!
//! Alignment tools emit the query as the first record. The downstream
//! scorer wants the alignment in query coordinates, so every column where
//! the query carries a gap is deleted from all records.

use thiserror::Error;

use super::fasta::FastaRecord;

const GAP: u8 = b'-';

#[derive(Debug, Error)]
pub enum MsaError {
    #[error("alignment contains no records")]
    EmptyAlignment,
    #[error("record '{id}' spans {actual} columns, expected {expected}")]
    RaggedAlignment {
        id: String,
        expected: usize,
        actual: usize,
    },
}

/// Strips every query-gap column from the alignment. Record order is
/// preserved; the first record is the query.
pub fn ungap_against_query(records: &[FastaRecord]) -> Result<Vec<FastaRecord>, MsaError> {
    let query = records.first().ok_or(MsaError::EmptyAlignment)?;
    let width = query.sequence.len();
    let keep: Vec<bool> = query.sequence.bytes().map(|b| b != GAP).collect();

    let mut ungapped = Vec::with_capacity(records.len());
    for record in records {
        if record.sequence.len() != width {
            return Err(MsaError::RaggedAlignment {
                id: record.id.clone(),
                expected: width,
                actual: record.sequence.len(),
            });
        }
        let sequence: String = record
            .sequence
            .bytes()
            .zip(keep.iter())
            .filter_map(|(b, &kept)| kept.then_some(b as char))
            .collect();
        ungapped.push(FastaRecord::new(record.id.clone(), sequence));
    }
    Ok(ungapped)
}
