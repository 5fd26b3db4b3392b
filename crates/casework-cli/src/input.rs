use anyhow::{Context, Result};
use clap::Args;
use std::io::{BufRead, Write};

/// Identifiers given on the command line, or read from stdin
#[derive(Args, Debug)]
pub(crate) struct Inputs {
    /// Identifiers to process; read one per line from stdin when omitted.
    /// Values may start with `-`, so options go before the first identifier
    #[arg(allow_hyphen_values = true)]
    inputs: Vec<String>,
}

impl Inputs {
    /// Writes `f(input)` on its own line for every input.
    pub(crate) fn map_lines(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        f: impl Fn(&str) -> String,
    ) -> Result<()> {
        if !self.inputs.is_empty() {
            for src in &self.inputs {
                writeln!(output, "{}", f(src))?;
            }
            return Ok(());
        }

        log::debug!("reading inputs from stdin");

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            writeln!(output, "{}", f(&line))?;
        }

        Ok(())
    }
}
