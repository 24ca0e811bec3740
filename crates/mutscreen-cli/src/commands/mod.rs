pub mod matrices;
pub mod scores;
pub mod screen;
pub mod ungap;
