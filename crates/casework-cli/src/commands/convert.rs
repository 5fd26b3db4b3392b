use crate::input::Inputs;
use anyhow::Result;
use casework::Style;
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
pub(crate) struct ConvertCommand {
    /// Target style, e.g. `snake_case` or `camel`
    style: Style,

    #[command(flatten)]
    inputs: Inputs,
}

impl ConvertCommand {
    pub(crate) fn run(self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        log::debug!("converting to {}", self.style);
        self.inputs
            .map_lines(input, output, |src| self.style.apply(src))
    }
}
