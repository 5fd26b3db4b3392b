use crate::input::Inputs;
use anyhow::Result;
use casework::Inflection;
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
pub(crate) struct InflectCommand {
    #[command(flatten)]
    inputs: Inputs,
}

impl InflectCommand {
    pub(crate) fn run(
        self,
        inflection: Inflection,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<()> {
        self.inputs
            .map_lines(input, output, |word| inflection.apply(word))
    }
}
