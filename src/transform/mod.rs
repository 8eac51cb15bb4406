//! Deterministic pixel operations. Randomness lives in [`crate::pipeline`]; everything here
//! is a pure function of its inputs.

pub mod affine;
pub mod color;
pub mod flip;
pub mod warp;
