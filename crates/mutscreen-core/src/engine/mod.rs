//! Screening logic: configuration, subset enumeration, mutant synthesis,
//! catalog assembly, progress reporting and the consolidated error type.

pub mod catalog;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod progress;
pub mod synthesizer;
