use std::io::{Cursor, Write};
use std::path::Path;

use anyhow::Context as _;
use zip::{CompressionMethod, ZipArchive, ZipWriter, write::SimpleFileOptions};

use crate::foundation::error::{ImaugError, ImaugResult};

/// Download name of the batch archive.
pub const ARCHIVE_FILE_NAME: &str = "augmented_images.zip";
/// MIME type of the batch archive.
pub const ARCHIVE_MIME: &str = "application/zip";

/// Pack the files at `paths` into an in-memory ZIP archive, one deflated entry per path, in
/// order. Entries are named by the file's base name; directories are discarded and
/// duplicate names are kept as separate entries.
pub fn build_archive<P: AsRef<Path>>(paths: &[P]) -> ImaugResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in paths {
        let path = path.as_ref();
        let entry = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ImaugError::archive(format!("'{}' has no usable file name", path.display()))
            })?;
        let bytes =
            std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;

        zip.start_file(entry, options)?;
        zip.write_all(&bytes)?;
    }

    let cursor = zip.finish()?;
    tracing::info!(entries = paths.len(), "built archive");
    Ok(cursor.into_inner())
}

/// Entry names of an archive produced by [`build_archive`], in order.
pub fn archive_entry_names(bytes: &[u8]) -> ImaugResult<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i)?.name().to_string());
    }
    Ok(names)
}

#[cfg(test)]
#[path = "../../tests/unit/output/archive.rs"]
mod tests;
