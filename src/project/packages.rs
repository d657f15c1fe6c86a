use std::{
    fs,
    path::{Path, PathBuf},
};

use strum_macros::Display;
use tracing::info;

use crate::util::is_ignored_dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PackageKind {
    #[strum(serialize = "js")]
    Js,
    #[strum(serialize = "py")]
    Py,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub path: PathBuf,
    pub kind: PackageKind,
}

impl Package {
    pub fn new(path: PathBuf, kind: PackageKind) -> Self {
        Self { path, kind }
    }
}

fn is_js_package(dir: &Path) -> bool {
    dir.join("package.json").is_file()
}

fn is_py_package(dir: &Path) -> bool {
    dir.join("setup.py").is_file() || dir.join("pyproject.toml").is_file()
}

fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let skipped = ["node_modules".to_string(), "dist".to_string()];

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter(|e| !is_ignored_dir(&e.file_name().to_string_lossy(), &skipped))
        .map(|e| e.path())
        .collect();

    dirs.sort();
    dirs
}

/// Discover packages in the project. A JavaScript root contributes itself,
/// every immediate JavaScript subpackage, and then every immediate Python
/// subpackage. Include paths are checked for both kinds independently.
pub fn discover_packages(root: &Path, include: &[String]) -> Vec<Package> {
    let mut packages = Vec::new();

    if is_js_package(root) {
        info!("Found package.json at: {}", root.join("package.json").display());
        packages.push(Package::new(root.to_path_buf(), PackageKind::Js));

        let mut py_packages = Vec::new();
        for dir in subdirectories(root) {
            if is_js_package(&dir) {
                packages.push(Package::new(dir.clone(), PackageKind::Js));
            }
            if is_py_package(&dir) {
                py_packages.push(Package::new(dir, PackageKind::Py));
            }
        }
        packages.extend(py_packages);
    }

    for inc in include {
        let dir = root.join(inc);
        if !dir.is_dir() {
            info!("Skipping include path: {}", dir.display());
            continue;
        }
        if is_js_package(&dir) {
            packages.push(Package::new(dir.clone(), PackageKind::Js));
        }
        if is_py_package(&dir) {
            packages.push(Package::new(dir, PackageKind::Py));
        }
    }

    info!("Found {} packages", packages.len());
    packages
}
