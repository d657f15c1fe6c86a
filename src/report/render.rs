use std::{collections::BTreeMap, path::Path};

use crate::{
    exports::Export,
    project::Package,
    scan::FileExports,
    util::relative_display,
};

pub const START_MARKER: &str = "<!-- BEGIN GENERATED CONTENT -->";
pub const END_MARKER: &str = "<!-- END GENERATED CONTENT -->";

enum Node<'a> {
    Dir(BTreeMap<String, Node<'a>>),
    File(&'a [Export]),
}

fn insert<'a>(dir: &mut BTreeMap<String, Node<'a>>, path: &Path, exports: &'a [Export]) {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();

    let Some((file, dirs)) = parts.split_last() else {
        return;
    };

    let mut current = dir;
    for part in dirs {
        let node = current
            .entry(part.clone())
            .or_insert_with(|| Node::Dir(BTreeMap::new()));

        current = match node {
            Node::Dir(children) => children,
            // A file and a directory cannot share a path
            Node::File(_) => return,
        };
    }

    current.insert(file.clone(), Node::File(exports));
}

fn render_tree(dir: &BTreeMap<String, Node>, indent: &str, out: &mut String) {
    for (name, node) in dir {
        match node {
            Node::File(exports) => {
                out.push_str(&format!("{}- {}\n", indent, name));
                for export in exports.iter() {
                    out.push_str(&format!("{}  - {}\n", indent, export.name));
                    for method in &export.methods {
                        out.push_str(&format!("{}    - {}\n", indent, method));
                    }
                }
            }
            Node::Dir(children) => {
                out.push_str(&format!("{}- {}/\n", indent, name));
                render_tree(children, &format!("{}  ", indent), out);
            }
        }
    }
}

fn render_package(root: &Path, package: &Package, files: &[FileExports], out: &mut String) {
    let rel = package.path.strip_prefix(root).unwrap_or(&package.path);
    let display = relative_display(root, &package.path);

    out.push_str(&format!("## Package ({}): `{}`\n\n", package.kind, display));

    let mut tree = BTreeMap::new();
    for file in files {
        let Ok(inner) = file.path.strip_prefix(rel) else {
            continue;
        };
        insert(&mut tree, inner, &file.exports);
    }

    render_tree(&tree, "", out);
    out.push('\n');
}

/// Render the generated block, markers included. Each package lists the
/// files under its directory as a tree sorted by name. The root package
/// lists every file.
pub fn render(root: &Path, packages: &[Package], files: &[FileExports]) -> String {
    let mut body = String::new();

    if packages.is_empty() {
        body.push_str("## Package (js): `.`\n");
    }

    for package in packages {
        render_package(root, package, files, &mut body);
    }

    format!("{}\n{}{}\n", START_MARKER, body, END_MARKER)
}

