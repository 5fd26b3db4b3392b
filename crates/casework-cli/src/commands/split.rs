use crate::input::Inputs;
use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
pub(crate) struct SplitCommand {
    #[command(flatten)]
    inputs: Inputs,
}

impl SplitCommand {
    pub(crate) fn run(self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        self.inputs
            .map_lines(input, output, |src| casework::split(src).join(" | "))
    }
}
