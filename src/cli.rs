//! Command-line interface for groupcolor.
//!
//! Handles CLI argument parsing and renders lookup results in the configured
//! output format.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{instrument, Level};

use crate::arith;
use crate::colors::{self, GroupKey, Rgb};
use crate::config::{CliOverrides, Config, OutputFormat};
use crate::errors::Result;

/// Command-line arguments for groupcolor.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format for colors [env: GROUPCOLOR_FORMAT]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Set the logging level [env: GROUPCOLOR_LOG]
    #[arg(long, short = 'L', value_name = "LEVEL", global = true)]
    pub log_level: Option<Level>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the sum of two integers.
    #[command(allow_negative_numbers = true)]
    Add { x: String, y: String },

    /// Print the color of a group. Unknown groups print the default color.
    #[command(allow_negative_numbers = true)]
    Color { group: String },

    /// Print every registered group and its color.
    List,
}

impl Cli {
    /// The configuration overrides carried by the parsed flags.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides::from_cli_args(self.format, self.log_level)
    }
}

/// Renders a single color.
pub fn render_color(color: Rgb, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => format!("{} {} {}", color.r(), color.g(), color.b()),
        OutputFormat::Hex => color.to_hex(),
        OutputFormat::Json => serde_json::to_string(&color)?,
    })
}

/// Renders a list of groups, one per line, or as a JSON object keyed by group.
pub fn render_groups(groups: &[(GroupKey, Rgb)], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let map: BTreeMap<u32, Rgb> = groups.iter().map(|(key, color)| (key.0, *color)).collect();
        return Ok(serde_json::to_string(&map)?);
    }

    let lines = groups
        .iter()
        .map(|(key, color)| Ok(format!("{}: {}", key, render_color(*color, format)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

/// Runs a subcommand and returns its rendered output.
#[instrument]
pub fn execute(command: &Command, format: OutputFormat) -> Result<String> {
    match command {
        Command::Add { x, y } => {
            let sum = arith::checked_add(arith::parse_operand(x)?, arith::parse_operand(y)?)?;
            Ok(sum.to_string())
        }
        Command::Color { group } => {
            let color = colors::get_color_str(group);
            tracing::debug!(group = group.as_str(), color = %color, "Resolved group color");
            render_color(color, format)
        }
        Command::List => {
            let groups = colors::groups();
            tracing::debug!(count = groups.len(), "Listing registered groups");
            render_groups(&groups, format)
        }
    }
}

/// Executes the CLI command and writes its output.
///
/// # Arguments
/// * `cli` - Parsed command-line arguments
/// * `config` - Configuration resolved from the CLI flags and environment
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let rendered = execute(&cli.command, config.output_format())?;

    match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writeln!(writer, "{rendered}")?;
            writer.flush()?;
            tracing::info!("Wrote result to {}.", path.to_string_lossy());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{rendered}")?;
        }
    }

    Ok(())
}
