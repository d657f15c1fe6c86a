use std::path::Path;

use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
}

impl Language {
    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Python => "py",
        }
    }

    /// Language of the file at path, or None if the extension is not
    /// supported.
    pub fn from_path(path: &Path) -> Option<Language> {
        use strum::IntoEnumIterator;

        let ext = path.extension()?.to_str()?;
        Language::iter().find(|lang| lang.extension() == ext)
    }

    /// Tree-sitter grammar used to parse this language.
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }
}
