use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

pub mod engine;
pub mod input;
pub mod logger;
pub mod report;
pub mod write;

pub use engine::{gcd, gcd_iterative, gcd_steps};
pub use input::InputError;
pub use report::GcdReport;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Prompt on `output`, read one pair from `input`, and write its gcd line.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<GcdReport, Error> {
    write::write_prompt(output).map_err(Error::Output)?;

    let (a, b) = input::read_pair(input)?;
    debug!(a, b, "computing gcd");

    let report = GcdReport::compute(a, b);
    debug!("{report}");

    write::write_report(output, &report).map_err(Error::Output)?;
    Ok(report)
}
