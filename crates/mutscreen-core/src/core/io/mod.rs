//! File formats and scratch-space handling.
//!
//! Everything here is stateless parsing and serialization: FASTA records,
//! query-relative alignment ungapping, evolutionary score tables produced
//! by the external scorer, and the scoped staging directory intermediate
//! artifacts are written into.

pub mod fasta;
pub mod msa;
pub mod scores;
pub mod staging;
