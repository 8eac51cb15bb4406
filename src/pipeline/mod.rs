//! The augmentation pipeline: sampling a per-variant plan of operations, then applying it.

pub mod augment;
pub mod plan;
