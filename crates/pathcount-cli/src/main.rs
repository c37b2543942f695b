//! Pathcount CLI - Enumerate fixed-length simple paths from the command line

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, config as config_cmd, describe, io, paths};
use config::{config_file_path, Config};
use output::OutputFormat;
use pathcount_core::{fixture, Graph, LabelStyle};

#[derive(Parser)]
#[command(name = "pathcount")]
#[command(author, version, about = "Enumerate fixed-length simple paths in undirected graphs")]
pub struct Cli {
    /// Graph file (JSON or TOML); the built-in demo mesh when omitted
    #[arg(short, long, global = true)]
    pub graph: Option<PathBuf>,

    /// Fail on out-of-range edges instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format: table, json, csv
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Vertex labels: letters, numbers
    #[arg(short, long, global = true)]
    pub labels: Option<LabelStyle>,

    /// Config file
    #[arg(long, env = "PATHCOUNT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate simple paths of a given length
    Paths(paths::PathsArgs),
    /// Print the adjacency list of the graph
    Describe,
    /// Write the graph as a JSON or TOML description
    Export(io::ExportArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded graph and resolved settings
pub struct AppContext {
    pub config: Config,
    pub graph: Graph,
    pub format: OutputFormat,
    pub labels: LabelStyle,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load(&cli.config_path());

        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.format));
        let labels = cli.labels.unwrap_or(config.labels);

        let graph = match &cli.graph {
            Some(path) => io::load_graph(path, cli.strict, labels)?,
            None => {
                tracing::debug!("No graph file given, using demo mesh");
                fixture::demo_mesh()
            }
        };

        Ok(Self {
            config,
            graph,
            format,
            labels,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting pathcount CLI");

    match &cli.command {
        Commands::Config(args) => config_cmd::run(args, &cli)?,
        Commands::Completions(args) => completions::run(args)?,
        Commands::Paths(args) => {
            let ctx = AppContext::new(&cli)?;
            paths::run(args, &ctx)?
        }
        Commands::Describe => {
            let ctx = AppContext::new(&cli)?;
            describe::run(&ctx)?
        }
        Commands::Export(args) => {
            let ctx = AppContext::new(&cli)?;
            io::run_export(args, &ctx)?
        }
    }

    Ok(())
}
