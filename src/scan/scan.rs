use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    error::{Error, Res},
    exports::{Export, Language, extract},
    util::{is_ignored_dir, read_file},
};

/// Exports found in a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExports {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub exports: Vec<Export>,
}

/// Walk `dir` and extract exports from every supported source file. Hidden
/// directories and names in `ignore_dirs` are skipped. Only files with at
/// least one export are returned, in file name order, with paths relative to
/// `root`.
pub fn scan_exports(root: &Path, dir: &Path, ignore_dirs: &[String]) -> Res<Vec<FileExports>> {
    let mut files = Vec::new();

    if !dir.is_dir() {
        warn!("Directory does not exist: {}", dir.display());
        return Ok(files);
    }

    info!("Scanning directory: {}", dir.display());

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !is_ignored_dir(&e.file_name().to_string_lossy(), ignore_dirs)
        });

    for entry in walker {
        let entry = entry.map_err(|source| Error::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(lang) = Language::from_path(path) else {
            continue;
        };

        debug!("Processing file: {}", path.display());
        let src = match read_file(path) {
            Ok(src) => src,
            Err(err) => {
                warn!("{}", err);
                continue;
            }
        };

        let exports = extract(&src, lang)?;
        if exports.is_empty() {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        debug!("Added {} with {} exports", rel.display(), exports.len());
        files.push(FileExports { path: rel, exports });
    }

    info!("Found {} files with exports", files.len());
    Ok(files)
}
