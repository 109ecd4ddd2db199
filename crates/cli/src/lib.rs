//! Command-line interface for generating Electron Flow libdefs.

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod common;
pub mod config;
pub mod fetch;
pub mod generate;
pub mod output;
pub mod prompt;
pub mod releases;

#[derive(Parser)]
#[command(
    name = "electron-flowgen",
    version,
    about = "\x1b[33melectron-flowgen\x1b[0m generates Flow libdefs for Electron ⚡"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 🧬 Generate a Flow libdef for an Electron release
    Generate(generate::GenerateArgs),
    /// 📦 List Electron releases available on GitHub
    Releases(releases::ReleasesArgs),
}

/// Parse `args`, run the selected command and return the process exit code.
pub fn run_cli(args: Vec<String>) -> i32 {
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(dispatch(args))
}

async fn dispatch(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => generate::run(args).await,
            Some(Commands::Releases(args)) => releases::run(args).await,
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn init_tracing() {
    // FLOWGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "flowgen_core=debug,reqwest=warn"
    let filter = match std::env::var("FLOWGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("flowgen_cli={level},flowgen_core={level}")
        }
        Ok(spec) => spec,
        Err(_) => "flowgen_cli=info,flowgen_core=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
