//! imaug turns uploaded images into a zipped batch of randomized variants for quick dataset
//! augmentation.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: upload bytes -> [`Raster`] ([`decode_image`])
//! 2. **Augment**: `Raster -> Vec<Raster>`, five independently randomized variants
//!    ([`AugmentPipeline`]): horizontal flip, rotation, brightness/contrast, shift/scale/rotate
//! 3. **Materialize**: each variant -> `{stem}_aug_{i}.png` on disk ([`Materializer`])
//! 4. **Archive**: every materialized file of the batch -> one ZIP ([`build_archive`])
//!
//! [`Session`] drives the four steps for a batch of uploads inside a [`Workspace`].
//!
//! Randomness is injectable: [`AugmentPipeline::augment_with_rng`] takes any `rand::Rng`,
//! so a seeded generator makes runs reproducible.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod foundation;
mod output;
mod pipeline;
mod session;

/// Pipeline configuration.
pub mod config;
/// Pixel operations used by the pipeline steps.
pub mod transform;

pub use assets::decode::{SUPPORTED_EXTENSIONS, decode_image, is_supported_upload};
pub use assets::encode::encode_png;
pub use config::{AugmentConfig, DEFAULT_VARIANTS, ShiftScaleRotateParams};
pub use foundation::error::{ImaugError, ImaugResult};
pub use foundation::raster::{PixelLayout, Raster};
pub use output::archive::{ARCHIVE_FILE_NAME, ARCHIVE_MIME, archive_entry_names, build_archive};
pub use output::materialize::{MaterializedOutput, Materializer, file_stem, output_file_name};
pub use output::workspace::{AUGMENTED_DIR, UPLOADS_DIR, Workspace, base_name};
pub use pipeline::augment::{AugmentPipeline, augment};
pub use pipeline::plan::{SampledOp, apply_plan, sample_plan};
pub use session::{BatchOutput, Session, Upload, run_batch};
pub use transform::warp::BorderMode;
