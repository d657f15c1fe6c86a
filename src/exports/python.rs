use tracing::debug;
use tree_sitter::Node;

use crate::{
    error::Res,
    exports::{Export, Language, field_text, parse},
};

/// Definition wrapped by a decorator, or the node itself.
fn undecorated(node: Node<'_>) -> Node<'_> {
    if node.kind() == "decorated_definition" {
        node.child_by_field_name("definition").unwrap_or(node)
    } else {
        node
    }
}

/// Names of the functions defined directly in the class body.
fn class_methods(class: Node, src: &[u8]) -> Vec<String> {
    let Some(body) = class.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .map(undecorated)
        .filter(|n| n.kind() == "function_definition")
        .filter_map(|n| field_text(n, "name", src))
        .map(str::to_string)
        .collect()
}

/// Extract module level functions and classes, with the methods defined
/// directly in each class body.
pub fn extract_python(src: &str) -> Res<Vec<Export>> {
    let mut exports = Vec::new();
    let Some(tree) = parse(src, Language::Python)? else {
        return Ok(exports);
    };

    let bytes = src.as_bytes();
    let root = tree.root_node();
    let mut cursor = root.walk();

    for child in root.named_children(&mut cursor) {
        let node = undecorated(child);
        match node.kind() {
            "function_definition" => {
                if let Some(name) = field_text(node, "name", bytes) {
                    debug!("function: {}", name);
                    exports.push(Export::new(name));
                }
            }
            "class_definition" => {
                if let Some(name) = field_text(node, "name", bytes) {
                    debug!("class: {}", name);
                    exports.push(Export::class(name, class_methods(node, bytes)));
                }
            }
            _ => {}
        }
    }

    Ok(exports)
}
