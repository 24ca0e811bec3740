//! End-to-end entry points exposed to library consumers.

pub mod screen;
