//! # mutscreen Core Library
//!
//! A combinatorial mutant generation engine for in-silico mutagenesis screening:
//! given a wild-type sequence, a set of candidate positions, and a substitution-scoring
//! scheme, it enumerates combinations of point substitutions, selects a concrete
//! replacement residue per position, and (for nucleotide inputs) back-translates to a
//! synonymous codon, producing a catalog of mutant variants for an external
//! evolutionary-conservation scorer.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (sequences, mutants),
//!   the immutable substitution-matrix and codon tables, and file I/O for the text
//!   formats exchanged with the external alignment and scoring tools.
//!
//! - **[`engine`]: The Logic Core.** This layer holds the non-trivial algorithmic
//!   decisions: position-subset enumeration under mandatory-position constraints,
//!   the substituent selection policy, mutant synthesis, and catalog assembly.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   the `engine` and `core` together to execute a complete screening run from a
//!   wild-type FASTA source to a finished mutant catalog.

pub mod core;
pub mod engine;
pub mod workflows;
