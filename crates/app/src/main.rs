//! har2loli - LoliCode script generator
//!
//! Command-line entry point: imports HAR captures, generates scripts from a
//! project file and validates existing scripts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use har2loli_domain::SettingsPreset;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "har2loli", version, about = "Generate LoliCode scripts from HAR captures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the exchanges in a HAR capture with their indices
    List(ListArgs),
    /// Generate a LoliCode script from a HAR capture
    Generate(GenerateArgs),
    /// Validate an existing LoliCode script
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Path to the HAR capture
    #[arg(long, value_name = "PATH")]
    har: PathBuf,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Path to the HAR capture
    #[arg(long, value_name = "PATH")]
    har: PathBuf,

    /// Project file (YAML or JSON) with selection, overrides and ordering.
    /// Without one, every exchange is emitted in capture order.
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Settings preset, replacing the project's settings
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Derive the order from variables extracted and used between exchanges
    #[arg(long)]
    auto_order: bool,

    /// Output path for the script (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Replace the output file if it already exists
    #[arg(long, requires = "out")]
    force: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Path to the script to validate
    script: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Proxy on, 30s timeout, no retries
    Default,
    /// No proxy, 10s timeout, no retries
    Fast,
    /// Proxy on, 60s timeout, 3 retries
    Secure,
}

impl From<PresetArg> for SettingsPreset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::Default => Self::Default,
            PresetArg::Fast => Self::Fast,
            PresetArg::Secure => Self::Secure,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so scripts can be piped from stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => commands::list(&args.har).await,
        Commands::Generate(args) => commands::generate(args.into()).await,
        Commands::Validate(args) => commands::validate(&args.script).await,
    }
}

impl From<GenerateArgs> for commands::GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            har: args.har,
            project: args.project,
            preset: args.preset.map(SettingsPreset::from),
            auto_order: args.auto_order,
            out: args.out,
            force: args.force,
        }
    }
}
