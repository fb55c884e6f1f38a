use crate::domain::models::{
    FileCandidate, ImportFilterConfig, ImportMode, ImportWarning, ImportedFile,
};
use log::{debug, info, warn};
use std::path::Path;

// Candidates above this are skipped with a warning instead of being read.
pub const MAX_FILE_SIZE_BYTES: u64 = 500 * 1024;

/// One import action's worth of results, committed to the session as a
/// single append. Partial batches are never interleaved.
#[derive(Debug, Default)]
pub struct ImportBatch {
    pub files: Vec<ImportedFile>,
    pub warnings: Vec<ImportWarning>,
    pub skipped: usize,
}

/// Reads candidates into `ImportedFile` records. Oversize and unreadable
/// candidates produce warnings and the import continues; folder imports
/// additionally drop candidates matching the ignore configuration, which
/// is expected filtering and only counted.
pub fn import_files(
    candidates: Vec<FileCandidate>,
    mode: ImportMode,
    filter: &ImportFilterConfig,
    read: impl Fn(&Path) -> anyhow::Result<String>,
) -> ImportBatch {
    debug!("Importing {} candidates ({:?} mode)", candidates.len(), mode);
    let mut batch = ImportBatch::default();

    for candidate in candidates {
        if mode == ImportMode::Folder
            && (filter.ignores_path(Path::new(&candidate.name))
                || filter.ignores_name(&candidate.name))
        {
            debug!("Filtered out {}", candidate.name);
            batch.skipped += 1;
            continue;
        }

        if candidate.size_bytes > MAX_FILE_SIZE_BYTES {
            warn!(
                "File {} is {} bytes, over the {} byte ceiling",
                candidate.name, candidate.size_bytes, MAX_FILE_SIZE_BYTES
            );
            batch.warnings.push(ImportWarning::Oversize {
                name: candidate.name,
                size_bytes: candidate.size_bytes,
            });
            continue;
        }

        match read(&candidate.path) {
            Ok(content) => {
                debug!("Read {} ({} bytes)", candidate.name, content.len());
                batch.files.push(ImportedFile::new(
                    candidate.name,
                    candidate.size_bytes,
                    content,
                ));
            }
            Err(e) => {
                warn!("Could not read {}: {}", candidate.name, e);
                batch.warnings.push(ImportWarning::Unreadable {
                    name: candidate.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Imported {} files ({} warnings, {} filtered)",
        batch.files.len(),
        batch.warnings.len(),
        batch.skipped
    );
    batch
}
