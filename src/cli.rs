use crate::config::{CliOverrides, Config, ModeSelection};
use crate::emitter::TerminatorPolicy;
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "class-union")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn CSS class names into a union of string literals")]
#[command(
    long_about = "class-union reads a stylesheet (or a plain list, one name per line) and writes \
                  the names as a union of single-quoted literals, ready to paste into a grammar \
                  rule: 'btn' | 'btn-primary' | 'card';"
)]
#[command(after_help = "EXAMPLES:\n  \
    class-union\n  \
    class-union styles/base.css --output grammar/classes.txt\n  \
    class-union names.txt --mode list --wrap 10\n  \
    class-union theme.css --dry-run -v")]
pub struct Cli {
    /// Stylesheet or newline-delimited list to read (defaults to base.css)
    pub input: Option<PathBuf>,

    /// File to write the union to (defaults to output.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How to read the input
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of literals per line
    #[arg(long, help = "Break the line after this many literals (default: 25)")]
    pub wrap: Option<usize>,

    /// Which literal receives the closing semicolon
    #[arg(long, value_enum)]
    pub terminator: Option<TerminatorArg>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for status messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show the result without writing it)
    #[arg(long, help = "Print the generated union instead of writing the output file")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Stylesheet for *.css inputs, list otherwise
    Auto,
    /// Match `.name {` class selectors
    Stylesheet,
    /// One name per line
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TerminatorArg {
    /// The literal in the final position
    Position,
    /// Legacy rule: the literal whose value first appears in the final position
    FirstOccurrence,
}

impl From<ModeArg> for ModeSelection {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => ModeSelection::Auto,
            ModeArg::Stylesheet => ModeSelection::Stylesheet,
            ModeArg::List => ModeSelection::List,
        }
    }
}

impl From<TerminatorArg> for TerminatorPolicy {
    fn from(arg: TerminatorArg) -> Self {
        match arg {
            TerminatorArg::Position => TerminatorPolicy::Position,
            TerminatorArg::FirstOccurrence => TerminatorPolicy::FirstOccurrence,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_input(self.input.clone())
            .with_mode(self.mode.map(ModeSelection::from))
            .with_wrap_every(self.wrap)
            .with_terminator(self.terminator.map(TerminatorPolicy::from))
            .with_output(self.output.clone())
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
