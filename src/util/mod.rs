//! Shared helpers: frame pacing and geometry hashing.

pub mod frame_timing;
pub mod hash;
