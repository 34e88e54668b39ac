//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use linkshield::config::VerifierConfig;
use linkshield::output::OutputMode;

use super::commands;

/// linkshield - URL risk verdicts with resilient delivery
#[derive(Parser, Debug)]
#[command(
    name = "linkshield",
    version,
    about = "URL risk verdicts with resilient delivery",
    long_about = "Flag a URL for a risk verdict against an ordered list of\n\
                  verification endpoints, or drive the full orchestrated flow\n\
                  (activation, start notice, verification, result delivery)\n\
                  against a local rendering agent."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (default: ~/.config/linkshield/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query the verdict endpoints directly and print the verdict
    Verify {
        /// The URL to check
        url: String,

        /// Override the configured endpoints (repeatable, tried in order)
        #[arg(short, long = "endpoint", value_name = "URL")]
        endpoints: Vec<String>,

        /// Override the per-endpoint timeout in milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
    },

    /// Drive the full flow against a local console-rendering agent
    Run {
        /// The URL to check
        url: String,

        /// Context id to deliver into
        #[arg(long, default_value_t = 1)]
        context: u64,

        /// Deliver to a sub-scope of the context (exercises the fallback)
        #[arg(long, value_name = "ID")]
        sub_scope: Option<u64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = cli
        .config
        .map_or_else(VerifierConfig::load, VerifierConfig::load_from);

    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Some(Command::Verify {
            url,
            endpoints,
            timeout_ms,
        }) => runtime.block_on(commands::verify(&config, &url, &endpoints, timeout_ms, output_mode)),
        Some(Command::Run {
            url,
            context,
            sub_scope,
        }) => runtime.block_on(commands::run(&config, &url, context, sub_scope, output_mode)),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("linkshield v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("linkshield v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'linkshield --help' for usage");
                println!("Run 'linkshield verify <url>' to check a link");
            }
            Ok(())
        },
    }
}
