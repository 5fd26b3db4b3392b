use crate::{rename_keys, Config};
use anyhow::{Context, Result};
use casework::{Inflection, Style};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub(crate) struct KeysCommand {
    /// Target style; defaults to `keys.style` from the config
    style: Option<Style>,

    /// JSON file to read instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Pluralize or singularize the last word of every key
    #[arg(long)]
    inflect: Option<Inflection>,

    /// Only rename top-level keys
    #[arg(long)]
    shallow: bool,
}

impl KeysCommand {
    pub(crate) fn run(
        self,
        config: &Config,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<()> {
        let mut keys = config.keys.clone();
        if let Some(style) = self.style {
            keys.style = style;
        }
        if let Some(inflection) = self.inflect {
            keys.inflect = Some(inflection);
        }
        if self.shallow {
            keys.recursive = false;
        }

        let document: serde_json::Value = match &self.file {
            Some(path) => {
                log::debug!("reading JSON from {}", path.display());
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("invalid JSON in {}", path.display()))?
            }
            None => {
                log::debug!("reading JSON from stdin");
                serde_json::from_reader(input).context("invalid JSON on stdin")?
            }
        };

        log::debug!("renaming keys with {keys:?}");

        let renamed = rename_keys(document, &keys);
        serde_json::to_writer_pretty(&mut *output, &renamed)?;
        writeln!(output)?;
        Ok(())
    }
}
