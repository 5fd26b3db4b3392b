use anyhow::Result;
use casework::Style;
use clap::Parser;
use console::style;
use std::io::Write;

const EXAMPLE: &str = "XMLHttpRequest";

#[derive(Parser, Debug)]
pub(crate) struct StylesCommand {}

impl StylesCommand {
    pub(crate) fn run(self, output: &mut dyn Write) -> Result<()> {
        for case in Style::ALL {
            writeln!(
                output,
                "{} {}",
                style(format!("{:<22}", case.name())).cyan(),
                style(case.apply(EXAMPLE)).dim()
            )?;
        }
        Ok(())
    }
}
