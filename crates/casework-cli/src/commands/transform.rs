use crate::input::Inputs;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
pub(crate) struct TransformCommand {
    /// Transform to apply
    op: Transform,

    #[command(flatten)]
    inputs: Inputs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    /// Uppercase every character
    Upper,

    /// Lowercase every character
    Lower,

    /// Uppercase the first character only
    Capitalize,

    /// Lowercase the first character only
    Uncapitalize,
}

impl Transform {
    fn apply(self, src: &str) -> String {
        match self {
            Transform::Upper => casework::uppercase(src),
            Transform::Lower => casework::lowercase(src),
            Transform::Capitalize => casework::capitalize(src),
            Transform::Uncapitalize => casework::uncapitalize(src),
        }
    }
}

impl TransformCommand {
    pub(crate) fn run(self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        self.inputs.map_lines(input, output, |src| self.op.apply(src))
    }
}
