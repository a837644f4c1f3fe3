//! Binary entrypoint for the `templar` configuration tool.
use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use logging::LogArgs;
use templar::CheckReport;
use templar_config::debug_config;

#[derive(Parser, Debug)]
#[command(
    name = "templar",
    about = "Inspect and validate Templar configuration",
    version
)]
/// Command-line interface for the `templar` binary.
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,

    /// Logging controls
    #[command(flatten)]
    log: LogArgs,

    /// Optional path to the config file (defaults to ./.mourn, then ~/.templar/config.mourn)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Validate a configuration file and report every problem found.
    Check {
        /// File to check (overrides --config)
        path: Option<PathBuf>,
    },
    /// Print the resolved configuration.
    Dump {
        /// Emit JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Show whether a provider is enabled and its settings.
    Provider {
        /// Provider name (auth, theme, toast, loading, modal, settings)
        name: String,
    },
    /// List the built-in themes, marking the configured default.
    Themes,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    if let Command::Check { path } = &cli.command {
        let explicit = path.as_deref().or(cli.config.as_deref());
        match templar::check(explicit).and_then(CheckReport::into_result) {
            Ok(path) => println!("{}: OK", path.display()),
            Err(e) => {
                eprintln!("{}", e.pretty());
                process::exit(1);
            }
        }
        return;
    }

    let ctx = templar::context_for(cli.config.as_deref());
    let cfg = ctx.read().await;
    debug_config(&cfg);

    match cli.command {
        Command::Dump { json } => print!("{}", templar::dump(&cfg, json)),
        Command::Provider { name } => match templar::provider(&cfg, &name) {
            Ok(out) => print!("{}", out),
            Err(e) => {
                eprintln!("{}", e.pretty());
                process::exit(1);
            }
        },
        Command::Themes => print!("{}", templar::themes(&cfg)),
        Command::Check { .. } => {}
    }
}
