use std::{fs, path::Path};

use tracing::{debug, info};

use crate::error::{Error, Res};

/// Write file at given filepath with content.
pub fn write_file<C>(filepath: &Path, content: C) -> Res<()>
where
    C: AsRef<[u8]>,
{
    debug!("Writing file: {}", filepath.display());
    fs::write(filepath, content).map_err(|source| Error::Write {
        path: filepath.to_path_buf(),
        source,
    })
}

pub fn read_file(filepath: &Path) -> Res<String> {
    debug!("Reading file: {}", filepath.display());
    fs::read_to_string(filepath).map_err(|source| Error::Read {
        path: filepath.to_path_buf(),
        source,
    })
}

pub fn create_dir_if_not_exist(dir: &Path) -> Res<()> {
    if !dir.is_dir() {
        info!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Reports whether the directory name should never be descended into:
/// hidden directories and any name in `ignore_dirs`.
pub fn is_ignored_dir(name: &str, ignore_dirs: &[String]) -> bool {
    name.starts_with('.') || ignore_dirs.iter().any(|d| d == name)
}

/// Slash-separated path of `path` relative to `base`, or `.` when they are
/// the same directory.
pub fn relative_display(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
