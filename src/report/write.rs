use std::path::Path;

use tracing::info;

use crate::{
    error::Res,
    report::{END_MARKER, START_MARKER},
    util::{create_dir_if_not_exist, read_file, write_file},
};

/// Content of a report file that does not exist yet.
pub static DEFAULT_INSTRUCTIONS: &str = "# Copilot Instructions for Project Structure Workflow

Just some sample instructions that should stay in place...

<!-- BEGIN GENERATED CONTENT -->
## Package (js): `.`
<!-- END GENERATED CONTENT -->
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist and was created.
    Created,
    /// Existing generated block was replaced.
    Updated,
    /// Generated block already matched, nothing was written.
    Unchanged,
    /// File had no markers and the block was appended.
    Appended,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Splice {
    Replaced(String),
    Appended(String),
    Unchanged,
}

/// Place `block` into `current`. The region from the start marker through
/// the first end marker after it is replaced. The trailing newline of
/// `block` is not part of the region, so splicing is idempotent.
pub fn splice(current: &str, block: &str) -> Splice {
    let region = block.strip_suffix('\n').unwrap_or(block);

    let markers = current.find(START_MARKER).and_then(|start| {
        current[start..]
            .find(END_MARKER)
            .map(|end| (start, start + end + END_MARKER.len()))
    });

    match markers {
        Some((start, end)) if &current[start..end] == region => Splice::Unchanged,
        Some((start, end)) => Splice::Replaced(format!(
            "{}{}{}",
            &current[..start],
            region,
            &current[end..]
        )),
        None => {
            let head = current.trim();
            if head.is_empty() {
                Splice::Appended(block.to_string())
            } else {
                Splice::Appended(format!("{}\n\n{}", head, block))
            }
        }
    }
}

/// Write the generated block into the report file at path, creating the
/// file and its directory if needed. The file is only rewritten when its
/// content changes.
pub fn write_if_changed(path: &Path, block: &str) -> Res<WriteOutcome> {
    if let Some(dir) = path.parent() {
        create_dir_if_not_exist(dir)?;
    }

    if !path.exists() {
        info!("Creating new file at {}", path.display());
        let content = match splice(DEFAULT_INSTRUCTIONS, block) {
            Splice::Replaced(content) | Splice::Appended(content) => content,
            Splice::Unchanged => DEFAULT_INSTRUCTIONS.to_string(),
        };
        write_file(path, content)?;
        return Ok(WriteOutcome::Created);
    }

    let current = read_file(path)?;
    match splice(&current, block) {
        Splice::Unchanged => {
            info!("No changes needed");
            Ok(WriteOutcome::Unchanged)
        }
        Splice::Replaced(content) => {
            info!("Writing updated content to {}", path.display());
            write_file(path, content)?;
            Ok(WriteOutcome::Updated)
        }
        Splice::Appended(content) => {
            info!("No markers found, appending to {}", path.display());
            write_file(path, content)?;
            Ok(WriteOutcome::Appended)
        }
    }
}
