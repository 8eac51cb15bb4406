//! Everything that touches the filesystem or leaves the process: working directories,
//! materialized PNG variants, and the ZIP archive.

pub mod archive;
pub mod materialize;
pub mod workspace;
