//! Sample package used as a fixture shape for the export map.
//!
//! The top-level module carries the same print functions and constant as
//! [`submodule`], but its export surface only names `SampleClass`, which
//! resolves to the nested module's class.

pub mod submodule;

use std::io::{self, StdoutLock, Write};

use tracing::warn;

pub use submodule::SampleClass;

pub const SAMPLE_VARIABLE: &str = "This is a sample variable";

/// Names this module intentionally exposes to importers.
pub const EXPORTS: &[&str] = &["SampleClass"];

pub const SAMPLE_FUNCTION_MESSAGE: &str = "This is a sample function";
pub const ANOTHER_FUNCTION_MESSAGE: &str = "This is another function";
pub const SAMPLE_CLASS_MESSAGE: &str = "This is a sample class";

/// Run a writer operation against stdout. Console operations have no error
/// path, so a failed write is only logged.
pub(crate) fn to_stdout<F>(write: F)
where
    F: FnOnce(&mut StdoutLock<'static>) -> io::Result<()>,
{
    if let Err(err) = write(&mut io::stdout().lock()) {
        warn!("failed to write to stdout: {}", err);
    }
}

pub fn sample_function() {
    to_stdout(|out| sample_function_to(out));
}

pub fn sample_function_to<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SAMPLE_FUNCTION_MESSAGE)
}

pub fn another_function() {
    to_stdout(|out| another_function_to(out));
}

pub fn another_function_to<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", ANOTHER_FUNCTION_MESSAGE)
}

/// Invoke every sample operation on the console, top-level first.
pub fn run_all() {
    sample_function();
    another_function();
    SampleClass::new();

    submodule::sample_function();
    submodule::another_function();
    submodule::SampleClass::new();
}

#[cfg(test)]
mod sample_test;
