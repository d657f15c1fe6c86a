mod subfile;

use std::io::{self, Write};

pub use subfile::MyTest;

use crate::sample::{
    ANOTHER_FUNCTION_MESSAGE, SAMPLE_CLASS_MESSAGE, SAMPLE_FUNCTION_MESSAGE, to_stdout,
};

pub const SAMPLE_VARIABLE: &str = "This is a sample variable";

pub const EXPORTS: &[&str] = &[
    "sample_function",
    "another_function",
    "SampleClass",
    "sample_variable",
    "MyTest",
];

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

/// Constructing a SampleClass prints a single line and nothing else.
#[derive(Debug)]
pub struct SampleClass {
    _private: (),
}

impl SampleClass {
    pub fn new() -> Self {
        to_stdout(|out| SampleClass::announce(out));
        Self { _private: () }
    }

    pub fn new_to<W: Write>(out: &mut W) -> io::Result<Self> {
        SampleClass::announce(out)?;
        Ok(Self { _private: () })
    }

    fn announce<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", SAMPLE_CLASS_MESSAGE)
    }
}

impl Default for SampleClass {
    fn default() -> Self {
        Self::new()
    }
}
