use std::io::{self, Write};

use crate::report::GcdReport;

pub const PROMPT: &str = "Enter two integers: ";

// Write the prompt and flush, it has no trailing newline
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

// Write the result line
pub fn write_report<W: Write>(out: &mut W, report: &GcdReport) -> io::Result<()> {
    writeln!(out, "{report}")?;
    out.flush()
}
