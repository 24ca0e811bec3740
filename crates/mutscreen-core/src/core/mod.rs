//! # Core Module
//!
//! This module provides the fundamental building blocks for mutant generation:
//! sequence and mutant data models, the immutable substitution-matrix and codon
//! tables, and I/O for the text formats the engine exchanges with external tools.
//!
//! ## Architecture
//!
//! - **Sequence Representation** ([`models`]) - Protein/nucleotide sequences, edits, mutants
//! - **Substitution Scoring** ([`matrices`]) - BLOSUM/PAM tables and substituent ranking
//! - **Genetic Code** ([`codon`]) - Synonymous codon table and back-translation policies
//! - **File I/O** ([`io`]) - FASTA, alignment normalization, scorer output, staging

pub mod codon;
pub mod io;
pub mod matrices;
pub mod models;
