use std::path::Path;

use tracing::info;

use crate::{
    config::Config,
    error::Res,
    project::discover_packages,
    report::{WriteOutcome, render, write_if_changed},
    scan::scan_exports,
};

/// Scan the project at root and render the generated block.
pub fn generate_report(root: &Path, config: &Config) -> Res<String> {
    info!("Scanning directories...");
    let packages = discover_packages(root, &config.include);
    let files = scan_exports(root, root, &config.ignore_dirs)?;
    info!("Found {} files to analyze", files.len());

    info!("Generating markdown report...");
    Ok(render(root, &packages, &files))
}

/// Generate the report and write it to the configured output file.
pub fn update_report(root: &Path, config: &Config) -> Res<WriteOutcome> {
    let block = generate_report(root, config)?;
    let output = config.output_path(root);

    info!("Writing report to {}", output.display());
    write_if_changed(&output, &block)
}
