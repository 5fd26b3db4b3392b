mod commands;
mod config;
mod input;
mod keys;

pub use config::*;
pub use keys::rename_keys;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    ConvertCommand, InflectCommand, KeysCommand, SplitCommand, StylesCommand, TransformCommand,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Casework CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct CaseworkCli {
    config: Config,

    /// Config file read when `--config` is not given, if it exists
    default_config_file: Option<PathBuf>,
}

impl CaseworkCli {
    /// Create a new CaseworkCli instance with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new CaseworkCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            default_config_file: None,
        }
    }

    /// Read `path` for the configuration when no `--config` is passed,
    /// instead of using the configuration this instance was built with.
    ///
    /// A missing file means the default configuration. The file is only read
    /// once the arguments have parsed.
    pub fn default_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_config_file = Some(path.into());
        self
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse command-line arguments and run against the process's stdin and
    /// stdout
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(cli, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Parse and execute CLI commands from an iterator of arguments, reading
    /// inputs from `input` and writing results to `output`
    pub fn run_from<I, T>(
        &self,
        args: I,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli, input, output)
    }

    fn run(&self, cli: Cli, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let config = self.resolve_config(cli.config.as_deref())?;

        match cli.command {
            Command::Convert(cmd) => cmd.run(input, output),
            Command::Split(cmd) => cmd.run(input, output),
            Command::Transform(cmd) => cmd.run(input, output),
            Command::Pluralize(cmd) => cmd.run(casework::Inflection::Plural, input, output),
            Command::Singularize(cmd) => cmd.run(casework::Inflection::Singular, input, output),
            Command::Keys(cmd) => cmd.run(&config, input, output),
            Command::Styles(cmd) => cmd.run(output),
        }?;

        output.flush()?;
        Ok(())
    }

    fn resolve_config(&self, explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Config::load(path);
        }

        match &self.default_config_file {
            Some(path) => Config::load_or_default(path),
            None => Ok(self.config.clone()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "casework")]
#[command(about = "Casework CLI - convert identifiers between naming conventions")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert identifiers to a naming style
    Convert(ConvertCommand),

    /// Print the words each identifier splits into
    Split(SplitCommand),

    /// Apply a whole-string or first-character case transform
    Transform(TransformCommand),

    /// Pluralize nouns
    Pluralize(InflectCommand),

    /// Singularize nouns
    Singularize(InflectCommand),

    /// Rename the keys of a JSON document
    Keys(KeysCommand),

    /// List the supported naming styles
    Styles(StylesCommand),
}
