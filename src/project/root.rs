use std::path::{Path, PathBuf};

use tracing::debug;

/// Walk up from `start` looking for a directory containing `package.json`.
/// The filesystem root itself is not checked. Falls back to `start` when no
/// such directory is found.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    while let Some(parent) = current.parent() {
        if current.join("package.json").is_file() {
            debug!("Project root: {}", current.display());
            return current.to_path_buf();
        }
        current = parent;
    }

    debug!("No package.json found, using {}", start.display());
    start.to_path_buf()
}
