//! Data models for wild-type sequences and the mutants derived from them.

pub mod mutant;
pub mod sequence;
