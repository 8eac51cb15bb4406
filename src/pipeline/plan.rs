use rand::Rng;

use crate::config::AugmentConfig;
use crate::foundation::error::ImaugResult;
use crate::foundation::raster::Raster;
use crate::transform::{affine, color, flip, warp};

/// One pipeline step with its randomly drawn parameters fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampledOp {
    /// Mirror columns.
    HorizontalFlip,
    /// Rotate about the center, keeping the frame size.
    Rotate {
        /// Counter-clockwise angle.
        degrees: f64,
    },
    /// Linear brightness/contrast change.
    BrightnessContrast {
        /// Offset as a fraction of full scale.
        brightness: f64,
        /// Gain minus one.
        contrast: f64,
    },
    /// Rotate and scale about the center, then shift.
    ShiftScaleRotate {
        /// Counter-clockwise angle.
        degrees: f64,
        /// Scale factor.
        scale: f64,
        /// Horizontal shift as a fraction of width.
        dx: f64,
        /// Vertical shift as a fraction of height.
        dy: f64,
    },
}

impl SampledOp {
    /// Short stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HorizontalFlip => "horizontal_flip",
            Self::Rotate { .. } => "rotate",
            Self::BrightnessContrast { .. } => "brightness_contrast",
            Self::ShiftScaleRotate { .. } => "shift_scale_rotate",
        }
    }

    /// Apply the operation to `src`.
    pub fn apply(&self, src: &Raster, border: warp::BorderMode) -> ImaugResult<Raster> {
        let (w, h) = src.dimensions();
        match *self {
            Self::HorizontalFlip => flip::flip_horizontal(src),
            Self::Rotate { degrees } => {
                warp::warp_affine(src, affine::rotate_about_center(w, h, degrees), border)
            }
            Self::BrightnessContrast {
                brightness,
                contrast,
            } => color::brightness_contrast(src, brightness, contrast),
            Self::ShiftScaleRotate {
                degrees,
                scale,
                dx,
                dy,
            } => warp::warp_affine(
                src,
                affine::shift_scale_rotate(w, h, degrees, scale, dx, dy),
                border,
            ),
        }
    }
}

/// Draw one variant's plan. Steps run in fixed order (flip, rotate, brightness/contrast,
/// shift/scale/rotate); each is kept with its own probability. Parameters are only drawn for
/// steps that pass their probability check.
pub fn sample_plan<R: Rng + ?Sized>(cfg: &AugmentConfig, rng: &mut R) -> Vec<SampledOp> {
    let mut plan = Vec::with_capacity(4);

    if roll(rng, cfg.flip_prob) {
        plan.push(SampledOp::HorizontalFlip);
    }
    if roll(rng, cfg.rotate_prob) {
        plan.push(SampledOp::Rotate {
            degrees: symmetric(rng, cfg.rotate_limit),
        });
    }
    if roll(rng, cfg.brightness_contrast_prob) {
        plan.push(SampledOp::BrightnessContrast {
            brightness: symmetric(rng, cfg.brightness_limit),
            contrast: symmetric(rng, cfg.contrast_limit),
        });
    }
    let ssr = &cfg.shift_scale_rotate;
    if roll(rng, ssr.prob) {
        plan.push(SampledOp::ShiftScaleRotate {
            degrees: symmetric(rng, ssr.rotate_limit),
            scale: 1.0 + symmetric(rng, ssr.scale_limit),
            dx: symmetric(rng, ssr.shift_limit),
            dy: symmetric(rng, ssr.shift_limit),
        });
    }

    plan
}

/// Run `plan` over `src` in order.
pub fn apply_plan(
    src: &Raster,
    plan: &[SampledOp],
    border: warp::BorderMode,
) -> ImaugResult<Raster> {
    let mut cur = src.clone();
    for op in plan {
        cur = op.apply(&cur, border)?;
    }
    Ok(cur)
}

fn roll<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    if p <= 0.0 {
        false
    } else if p >= 1.0 {
        true
    } else {
        rng.random_bool(p)
    }
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, limit: f64) -> f64 {
    if limit <= 0.0 {
        0.0
    } else {
        rng.random_range(-limit..=limit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/plan.rs"]
mod tests;
