//! The host flow around the pipeline: for each upload in order, persist the original,
//! decode, augment and materialize; then pack every materialized variant into one archive.
//!
//! Any failure aborts the batch. There is no partial-success accounting: once an error is
//! returned no archive is produced for the session.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::{SeedableRng, rngs::StdRng};

use crate::assets::decode::{SUPPORTED_EXTENSIONS, decode_image, is_supported_upload};
use crate::foundation::error::{ImaugError, ImaugResult};
use crate::output::archive::{ARCHIVE_FILE_NAME, ARCHIVE_MIME, build_archive};
use crate::output::materialize::{MaterializedOutput, Materializer};
use crate::output::workspace::Workspace;
use crate::pipeline::augment::AugmentPipeline;

/// Raw upload: original file name plus its bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    /// Name as provided by the uploader (may include directories).
    pub name: String,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload from a name and bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk as an upload named after its file name.
    pub fn from_path(path: &Path) -> ImaugResult<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ImaugError::validation(format!("'{}' has no usable file name", path.display()))
            })?
            .to_string();
        let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
        Ok(Self { name, bytes })
    }
}

/// The finished, downloadable result of one batch.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    /// ZIP bytes.
    pub archive: Vec<u8>,
    /// Suggested download name.
    pub file_name: &'static str,
    /// MIME type of `archive`.
    pub mime: &'static str,
    /// Archive entry names, in order.
    pub entries: Vec<String>,
}

impl BatchOutput {
    /// Write the archive to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> ImaugResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory '{}'", parent.display()))?;
        }
        std::fs::write(path, &self.archive)
            .with_context(|| format!("write archive '{}'", path.display()))?;
        Ok(())
    }
}

/// One user-triggered run over a workspace.
#[derive(Debug)]
pub struct Session<'w> {
    workspace: &'w Workspace,
    pipeline: AugmentPipeline,
    materializer: Materializer,
    rng: StdRng,
    outputs: Vec<PathBuf>,
    entries: Vec<String>,
    uploads: usize,
}

impl<'w> Session<'w> {
    /// Start a session. Variants left in the workspace by earlier runs are removed so they
    /// cannot leak into this session's archive.
    pub fn new(workspace: &'w Workspace, pipeline: AugmentPipeline) -> ImaugResult<Self> {
        let stale = workspace.clear_outputs()?;
        if stale > 0 {
            tracing::info!(stale, "removed outputs of a previous run");
        }
        Ok(Self {
            workspace,
            pipeline,
            materializer: Materializer::new(workspace.augmented_dir()),
            rng: StdRng::from_os_rng(),
            outputs: Vec::new(),
            entries: Vec::new(),
            uploads: 0,
        })
    }

    /// Draw all randomness from a generator seeded with `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Uploads processed so far.
    pub fn uploads_processed(&self) -> usize {
        self.uploads
    }

    /// Persist, decode, augment and materialize one upload.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn process_upload(
        &mut self,
        name: &str,
        bytes: &[u8],
    ) -> ImaugResult<Vec<MaterializedOutput>> {
        if !is_supported_upload(name) {
            return Err(ImaugError::validation(format!(
                "'{name}' is not a supported upload (expected one of: {})",
                SUPPORTED_EXTENSIONS.join(", ")
            )));
        }

        self.workspace.store_upload(name, bytes)?;
        let source = decode_image(bytes)?;
        let variants = self.pipeline.augment_with_rng(&source, &mut self.rng)?;
        drop(source);

        let outputs = self.materializer.materialize(&variants, name)?;
        for out in &outputs {
            self.outputs.push(out.path.clone());
            self.entries.push(out.file_name.clone());
        }
        self.uploads += 1;
        Ok(outputs)
    }

    /// Pack every variant materialized in this session into one archive.
    #[tracing::instrument(skip(self), fields(uploads = self.uploads))]
    pub fn finish(self) -> ImaugResult<BatchOutput> {
        if self.uploads == 0 {
            return Err(ImaugError::validation("no uploads to augment"));
        }
        let archive = build_archive(&self.outputs)?;
        Ok(BatchOutput {
            archive,
            file_name: ARCHIVE_FILE_NAME,
            mime: ARCHIVE_MIME,
            entries: self.entries,
        })
    }
}

/// Process `uploads` in order with a fresh random source and return the batch archive.
pub fn run_batch(
    workspace: &Workspace,
    pipeline: AugmentPipeline,
    uploads: impl IntoIterator<Item = Upload>,
) -> ImaugResult<BatchOutput> {
    let mut session = Session::new(workspace, pipeline)?;
    for upload in uploads {
        session.process_upload(&upload.name, &upload.bytes)?;
    }
    session.finish()
}

#[cfg(test)]
#[path = "../tests/unit/session/batch.rs"]
mod tests;
