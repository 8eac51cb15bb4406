use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::encode::encode_png;
use crate::foundation::error::{ImaugError, ImaugResult};
use crate::foundation::raster::Raster;
use crate::output::workspace::base_name;

/// One encoded variant written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterializedOutput {
    /// Where the PNG was written.
    pub path: PathBuf,
    /// File name (also the archive entry name).
    pub file_name: String,
    /// Encoded PNG bytes.
    pub bytes: Vec<u8>,
}

/// Base name of an upload with its last extension removed.
pub fn file_stem(original_name: &str) -> ImaugResult<String> {
    let base = base_name(original_name)?;
    let stem = match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    };
    Ok(stem.to_string())
}

/// `{stem}_aug_{index}.png`.
pub fn output_file_name(original_name: &str, index: usize) -> ImaugResult<String> {
    Ok(variant_name(&file_stem(original_name)?, index))
}

fn variant_name(stem: &str, index: usize) -> String {
    format!("{stem}_aug_{index}.png")
}

/// Writes variants as PNG files into one flat directory.
///
/// Stems are tracked for the lifetime of the materializer: a second upload with an
/// already-used stem is written as `{stem}-2_aug_{i}.png` (then `-3`, ...) instead of
/// overwriting the first upload's files.
#[derive(Debug)]
pub struct Materializer {
    dir: PathBuf,
    used_stems: BTreeMap<String, usize>,
}

impl Materializer {
    /// Materialize into `dir` (created if absent on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            used_stems: BTreeMap::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Encode and write every variant, in order. Variant `i` is named
    /// `{stem}_aug_{i}.png`.
    pub fn materialize(
        &mut self,
        variants: &[Raster],
        original_name: &str,
    ) -> ImaugResult<Vec<MaterializedOutput>> {
        let stem = self.claim_stem(original_name)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output directory '{}'", self.dir.display()))?;

        let mut outputs = Vec::with_capacity(variants.len());
        for (i, variant) in variants.iter().enumerate() {
            let file_name = variant_name(&stem, i);
            let bytes = encode_png(variant)?;
            let path = self.dir.join(&file_name);
            std::fs::write(&path, &bytes)
                .with_context(|| format!("write variant '{}'", path.display()))?;
            outputs.push(MaterializedOutput {
                path,
                file_name,
                bytes,
            });
        }
        tracing::info!(
            source = original_name,
            count = outputs.len(),
            dir = %self.dir.display(),
            "materialized variants"
        );
        Ok(outputs)
    }

    fn claim_stem(&mut self, original_name: &str) -> ImaugResult<String> {
        let stem = file_stem(original_name)?;
        let seen = self.used_stems.entry(stem.clone()).or_insert(0);
        *seen += 1;
        if *seen == 1 {
            return Ok(stem);
        }

        let mut k = *seen;
        loop {
            let candidate = format!("{stem}-{k}");
            if !self.used_stems.contains_key(&candidate) {
                tracing::warn!(
                    source = original_name,
                    renamed = %candidate,
                    "upload shares a name with an earlier upload"
                );
                self.used_stems.insert(candidate.clone(), 1);
                return Ok(candidate);
            }
            k = k
                .checked_add(1)
                .ok_or_else(|| ImaugError::validation("too many uploads sharing one name"))?;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/materialize.rs"]
mod tests;
