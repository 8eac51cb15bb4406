//! Pipeline configuration: every knob of the augmentation pipeline as one explicit,
//! validated structure. Defaults reproduce the stock pipeline.

use std::io::Read;

use crate::foundation::error::{ImaugError, ImaugResult};
use crate::transform::warp::BorderMode;

/// Variants produced per source image by default.
pub const DEFAULT_VARIANTS: usize = 5;

/// Parameters of the combined shift/scale/rotate step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShiftScaleRotateParams {
    /// Maximum shift as a fraction of width/height, sampled in `[-limit, limit]`.
    pub shift_limit: f64,
    /// Scale factor is sampled in `[1 - limit, 1 + limit]`.
    pub scale_limit: f64,
    /// Maximum rotation in degrees, sampled in `[-limit, limit]`.
    pub rotate_limit: f64,
    /// Probability of applying the step.
    pub prob: f64,
}

impl Default for ShiftScaleRotateParams {
    fn default() -> Self {
        Self {
            shift_limit: 0.0625,
            scale_limit: 0.1,
            rotate_limit: 45.0,
            prob: 0.5,
        }
    }
}

/// Full pipeline configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AugmentConfig {
    /// Variants generated per source image.
    pub variants: usize,
    /// Probability of a horizontal flip.
    pub flip_prob: f64,
    /// Maximum rotation in degrees for the rotate step.
    pub rotate_limit: f64,
    /// Probability of the rotate step.
    pub rotate_prob: f64,
    /// Probability of the brightness/contrast step.
    pub brightness_contrast_prob: f64,
    /// Brightness factor is sampled in `[-limit, limit]` (fraction of full scale).
    pub brightness_limit: f64,
    /// Contrast factor is sampled in `[-limit, limit]`.
    pub contrast_limit: f64,
    /// Combined shift/scale/rotate step.
    pub shift_scale_rotate: ShiftScaleRotateParams,
    /// Fill policy for geometric steps.
    pub border: BorderMode,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            variants: DEFAULT_VARIANTS,
            flip_prob: 0.5,
            rotate_limit: 40.0,
            rotate_prob: 0.5,
            brightness_contrast_prob: 0.2,
            brightness_limit: 0.2,
            contrast_limit: 0.2,
            shift_scale_rotate: ShiftScaleRotateParams::default(),
            border: BorderMode::default(),
        }
    }
}

impl AugmentConfig {
    /// Default limits with every step disabled: each variant is a copy of its source.
    pub fn identity() -> Self {
        Self {
            flip_prob: 0.0,
            rotate_prob: 0.0,
            brightness_contrast_prob: 0.0,
            shift_scale_rotate: ShiftScaleRotateParams {
                prob: 0.0,
                ..ShiftScaleRotateParams::default()
            },
            ..Self::default()
        }
    }

    /// Parse a JSON document; absent fields keep their defaults. The result is validated.
    pub fn from_json_str(s: &str) -> ImaugResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ImaugError::validation(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Like [`AugmentConfig::from_json_str`], reading from `r`.
    pub fn from_json_reader(r: impl Read) -> ImaugResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ImaugError::validation(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> ImaugResult<()> {
        if self.variants == 0 {
            return Err(ImaugError::validation("variants must be >= 1"));
        }

        check_prob("flip_prob", self.flip_prob)?;
        check_prob("rotate_prob", self.rotate_prob)?;
        check_prob("brightness_contrast_prob", self.brightness_contrast_prob)?;
        check_prob("shift_scale_rotate.prob", self.shift_scale_rotate.prob)?;

        check_limit("rotate_limit", self.rotate_limit, 180.0)?;
        check_limit("brightness_limit", self.brightness_limit, 1.0)?;
        check_limit("contrast_limit", self.contrast_limit, 1.0)?;
        check_limit("shift_scale_rotate.shift_limit", self.shift_scale_rotate.shift_limit, 1.0)?;
        check_limit("shift_scale_rotate.rotate_limit", self.shift_scale_rotate.rotate_limit, 180.0)?;

        let scale = self.shift_scale_rotate.scale_limit;
        if !scale.is_finite() || !(0.0..1.0).contains(&scale) {
            return Err(ImaugError::validation(format!(
                "shift_scale_rotate.scale_limit must be in [0, 1), got {scale}"
            )));
        }
        Ok(())
    }
}

fn check_prob(name: &str, p: f64) -> ImaugResult<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(ImaugError::validation(format!(
            "{name} must be in [0, 1], got {p}"
        )));
    }
    Ok(())
}

fn check_limit(name: &str, v: f64, max: f64) -> ImaugResult<()> {
    if !v.is_finite() || !(0.0..=max).contains(&v) {
        return Err(ImaugError::validation(format!(
            "{name} must be in [0, {max}], got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config/augment.rs"]
mod tests;
