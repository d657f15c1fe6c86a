use std::{io, path::PathBuf};

use thiserror::Error;

use crate::exports::Language;

pub type Res<T> = Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to read directory {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to load {lang} grammar: {source}")]
    Grammar {
        lang: Language,
        source: tree_sitter::LanguageError,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
