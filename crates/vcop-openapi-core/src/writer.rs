//! Writes generated documents to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::document::SpecDocument;
use crate::error::{GeneratorError, Result};

/// Writes `documents` as pretty-printed JSON files into `output_dir`.
///
/// The directory is created with all missing parents. Existing files are
/// overwritten. Files are written in order and nothing is rolled back if a
/// later write fails.
///
/// # Errors
///
/// Returns [`GeneratorError::CreateOutputDir`] if the directory cannot be
/// created (for example when the path is an existing regular file),
/// [`GeneratorError::Serialize`] if a document cannot be serialized and
/// [`GeneratorError::WriteOutput`] if a file cannot be written.
pub fn write_documents(
    output_dir: &Path,
    documents: &[(&str, &SpecDocument)],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|source| GeneratorError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(documents.len());
    for (file_name, document) in documents {
        let path = output_dir.join(file_name);
        write_document(&path, document)?;
        written.push(path);
    }

    Ok(written)
}

/// Writes one document to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`GeneratorError::Serialize`] or [`GeneratorError::WriteOutput`].
pub fn write_document(path: &Path, document: &SpecDocument) -> Result<()> {
    let json = document.to_pretty_json()?;
    std::fs::write(path, json).map_err(|source| GeneratorError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), paths = document.path_count(), "Wrote OpenAPI document");
    Ok(())
}
