use crate::domain::models::{FileCandidate, ImportWarning};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Turns explicit paths into candidates. A path that is missing or not a
/// regular file yields a warning instead of aborting the whole import.
pub fn file_candidates(paths: &[std::path::PathBuf]) -> (Vec<FileCandidate>, Vec<ImportWarning>) {
    let mut candidates = Vec::new();
    let mut warnings = Vec::new();

    for path in paths {
        let name = path.to_string_lossy().to_string();
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {
                candidates.push(FileCandidate {
                    path: path.clone(),
                    name,
                    size_bytes: metadata.len(),
                });
            }
            Ok(_) => {
                warn!("Not a regular file: {}", name);
                warnings.push(ImportWarning::Unreadable {
                    name,
                    reason: "not a regular file".to_string(),
                });
            }
            Err(e) => {
                warn!("Cannot stat {}: {}", name, e);
                warnings.push(ImportWarning::Unreadable {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    (candidates, warnings)
}

/// Walks a directory and produces one candidate per regular file, named by
/// its root-relative path. Directories and symlinks are skipped; entries
/// come back in sorted order.
pub fn scan_directory(root: &Path) -> anyhow::Result<Vec<FileCandidate>> {
    if !root.is_dir() {
        return Err(anyhow::anyhow!("not a directory: {}", root.display()));
    }

    info!("Scanning directory: {}", root.display());
    let mut candidates = Vec::new();

    for entry in walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if entry.file_type().is_dir() || entry.file_type().is_symlink() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!("Cannot stat {}: {}", path.display(), e);
                continue;
            }
        };

        debug!("Found candidate: {}", relative.display());
        candidates.push(FileCandidate {
            path: path.to_path_buf(),
            name: relative.to_string_lossy().to_string(),
            size_bytes: metadata.len(),
        });
    }

    info!("Found {} candidates", candidates.len());
    Ok(candidates)
}

/// Reads a file fully as UTF-8 text. Binary content fails here and becomes
/// a per-file warning upstream.
pub fn read_file_text(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("{} is not valid UTF-8 text", path.display()))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
