//! Export extraction. Sources are parsed with the tree-sitter grammar for
//! their language and only top-level declarations are reported.

mod language;
mod python;
mod script;

use tracing::warn;
use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Res};

pub use language::Language;
pub use python::extract_python;
pub use script::extract_script;

/// A top-level name exported by a source file. Classes list their methods,
/// functions and variables leave `methods` empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub name: String,
    pub methods: Vec<String>,
}

impl Export {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            methods: Vec::new(),
        }
    }

    pub fn class(name: &str, methods: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            methods,
        }
    }
}

/// Extract exports from source code in the given language.
pub fn extract(src: &str, lang: Language) -> Res<Vec<Export>> {
    match lang {
        Language::Python => extract_python(src),
        Language::JavaScript | Language::TypeScript => extract_script(src, lang),
    }
}

/// Parse source with the grammar for lang. Returns None if the parser gave
/// up without producing a tree.
fn parse(src: &str, lang: Language) -> Res<Option<Tree>> {
    let mut parser = Parser::new();
    parser
        .set_language(&lang.grammar())
        .map_err(|source| Error::Grammar { lang, source })?;

    let tree = parser.parse(src, None);
    if tree.is_none() {
        warn!("{} parser produced no syntax tree", lang);
    }
    Ok(tree)
}

/// Source text of the named field of node.
fn field_text<'a>(node: Node, field: &str, src: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(src).ok())
}


#[cfg(test)]
mod script_test;
