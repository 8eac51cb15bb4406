pub mod error;
pub mod math;
pub mod raster;
