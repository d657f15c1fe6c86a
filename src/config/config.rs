use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::{
    error::{Error, Res},
    util::read_file,
};

pub const CONFIG_FILE: &str = "exportmap.toml";

pub static DEFAULT_CONFIG_TOML: &str = r#"# exportmap project configuration

[report]
output = ".github/copilot-instructions.md" # File the generated block is written to
include = []                               # Extra package directories, relative to root
ignore-dirs = ["node_modules", "dist"]     # Directory names never scanned
"#;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    report: Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Report file, relative to the project root.
    pub output: PathBuf,
    /// Additional package directories, relative to the project root.
    pub include: Vec<String>,
    /// Directory names skipped while scanning. Hidden directories are
    /// always skipped.
    pub ignore_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(".github/copilot-instructions.md"),
            include: Vec::new(),
            ignore_dirs: vec!["node_modules".into(), "dist".into()],
        }
    }
}

impl Config {
    /// Parse config from TOML source. Missing keys take their default.
    pub fn from_toml(src: &str, path: &Path) -> Res<Self> {
        let file: ConfigFile = toml::from_str(src).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.report)
    }

    /// Append include paths, skipping duplicates and empty entries.
    pub fn with_includes<I>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        for inc in includes {
            let inc = inc.trim().to_string();
            if !inc.is_empty() && !self.include.contains(&inc) {
                self.include.push(inc);
            }
        }
        self
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}

/// Load `exportmap.toml` from the project root, or the default config if the
/// file does not exist.
pub fn load_config_file(root: &Path) -> Res<Config> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        info!("No {} found, using defaults", CONFIG_FILE);
        return Ok(Config::default());
    }

    info!("Loading config: {}", path.display());
    let src = read_file(&path)?;
    Config::from_toml(&src, &path)
}
