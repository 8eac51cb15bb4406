use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::AugmentConfig;
use crate::foundation::error::ImaugResult;
use crate::foundation::raster::Raster;
use crate::pipeline::plan::{apply_plan, sample_plan};

/// Produces randomized variants of a source image from a validated [`AugmentConfig`].
#[derive(Clone, Debug)]
pub struct AugmentPipeline {
    config: AugmentConfig,
}

impl Default for AugmentPipeline {
    fn default() -> Self {
        Self {
            config: AugmentConfig::default(),
        }
    }
}

impl AugmentPipeline {
    /// Validate `config` and build a pipeline from it.
    pub fn new(config: AugmentConfig) -> ImaugResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// Generate `config.variants` variants using a fresh OS-seeded generator.
    pub fn augment(&self, image: &Raster) -> ImaugResult<Vec<Raster>> {
        let mut rng = StdRng::from_os_rng();
        self.augment_with_rng(image, &mut rng)
    }

    /// Generate `config.variants` variants, drawing all randomness from `rng`.
    ///
    /// Every variant re-samples every step independently; no variant depends on another.
    pub fn augment_with_rng<R: Rng + ?Sized>(
        &self,
        image: &Raster,
        rng: &mut R,
    ) -> ImaugResult<Vec<Raster>> {
        image.ensure_non_degenerate("augmentation")?;
        (0..self.config.variants)
            .map(|i| {
                let _span = tracing::debug_span!("variant", index = i).entered();
                self.apply_once(image, rng)
            })
            .collect()
    }

    /// Generate a single variant.
    pub fn apply_once<R: Rng + ?Sized>(&self, image: &Raster, rng: &mut R) -> ImaugResult<Raster> {
        image.ensure_non_degenerate("augmentation")?;
        let plan = sample_plan(&self.config, rng);
        for op in &plan {
            tracing::debug!(step = op.name(), params = ?op, "sampled");
        }
        apply_plan(image, &plan, self.config.border)
    }
}

/// Run the stock pipeline (5 variants) with a fresh random source.
pub fn augment(image: &Raster) -> ImaugResult<Vec<Raster>> {
    AugmentPipeline::default().augment(image)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/augment.rs"]
mod tests;
