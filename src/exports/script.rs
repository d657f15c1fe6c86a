use tracing::debug;
use tree_sitter::Node;

use crate::{
    error::Res,
    exports::{Export, Language, field_text, parse},
};

/// Names of the methods with a body declared directly in the class body.
/// Fields, static blocks and TypeScript signatures are skipped.
fn class_methods(class: Node, src: &[u8]) -> Vec<String> {
    let Some(body) = class.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|n| n.kind() == "method_definition")
        .filter_map(|n| field_text(n, "name", src))
        .map(str::to_string)
        .collect()
}

fn collect_declaration(node: Node, src: &[u8], exports: &mut Vec<Export>) {
    match node.kind() {
        "export_statement" => {
            let inner = node
                .child_by_field_name("declaration")
                .or_else(|| node.child_by_field_name("value"));
            if let Some(inner) = inner {
                collect_declaration(inner, src, exports);
            }
        }

        // TypeScript `declare ...`
        "ambient_declaration" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                collect_declaration(child, src, exports);
            }
        }

        "function_declaration"
        | "generator_function_declaration"
        | "function_expression"
        | "function" => {
            if let Some(name) = field_text(node, "name", src) {
                debug!("function: {}", name);
                exports.push(Export::new(name));
            }
        }

        "class_declaration" | "abstract_class_declaration" | "class" => {
            let name = field_text(node, "name", src).unwrap_or("UnnamedClass");
            debug!("class: {}", name);
            exports.push(Export::class(name, class_methods(node, src)));
        }

        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = node.walk();
            for declarator in node.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }

                // Destructuring patterns do not declare a single name
                let Some(name) = declarator
                    .child_by_field_name("name")
                    .filter(|n| n.kind() == "identifier")
                    .and_then(|n| n.utf8_text(src).ok())
                else {
                    continue;
                };

                debug!("variable: {}", name);
                exports.push(Export::new(name));
            }
        }

        _ => {}
    }
}

/// Extract top level functions, classes with their methods, and variable
/// declarations from JavaScript or TypeScript source.
pub fn extract_script(src: &str, lang: Language) -> Res<Vec<Export>> {
    let mut exports = Vec::new();
    let Some(tree) = parse(src, lang)? else {
        return Ok(exports);
    };

    let bytes = src.as_bytes();
    let root = tree.root_node();
    let mut cursor = root.walk();

    for child in root.named_children(&mut cursor) {
        collect_declaration(child, bytes, &mut exports);
    }

    Ok(exports)
}
