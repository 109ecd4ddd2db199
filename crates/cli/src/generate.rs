//! `generate`: produce a libdef for one release and process.

use std::path::PathBuf;

use clap::Args;
use flowgen_core::{ApiDescription, FlowFormatter, Process, TypeEmitter};
use tracing::{debug, info};

use crate::common::{Status, run_cli_async, run_with_spinner_async};
use crate::config::{
    DEFAULT_API_URL_TEMPLATE, DEFAULT_OUT_DIR, DEFAULT_RELEASES_URL, api_url,
};
use crate::fetch::{build_client, fetch_api_description, fetch_releases};
use crate::output::write_libdef;
use crate::prompt::{Chooser, TerminalChooser};

const VERSION_PROMPT: &str =
    "For which version of electron would you like to create type definitions?";
const PROCESS_PROMPT: &str = "Generate definitions for main or renderer process?";

/// Arguments of `electron-flowgen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Electron release tag, e.g. v1.8.4 (prompted from the release list if omitted)
    #[arg(long = "electron-version", value_name = "VERSION")]
    pub electron_version: Option<String>,
    /// Target process: main or renderer (prompted if omitted)
    #[arg(long, value_name = "PROCESS")]
    pub process: Option<Process>,
    /// Read the API description from a local file instead of downloading it
    #[arg(long, value_name = "FILE", requires = "electron_version")]
    pub input: Option<PathBuf>,
    /// Directory the libdef is written to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
    /// Endpoint listing Electron releases
    #[arg(long, value_name = "URL", default_value = DEFAULT_RELEASES_URL)]
    pub releases_url: String,
    /// API description URL; {version} is replaced with the release tag
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL_TEMPLATE)]
    pub api_url_template: String,
    /// Print the libdef to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Run the command with terminal prompts and return its exit code.
pub async fn run(args: GenerateArgs) -> i32 {
    run_cli_async(|| execute(args, &TerminalChooser)).await
}

/// Resolve version, document and process, then generate and persist the
/// libdef. Nothing is written unless generation and formatting succeed.
pub async fn execute(args: GenerateArgs, chooser: &dyn Chooser) -> Result<(), String> {
    let status = Status::new(args.stdout);
    let client = build_client()?;

    let version = match args.electron_version.clone() {
        Some(version) => version,
        None => {
            let releases = run_with_spinner_async(
                status,
                "Fetching electron versions from GitHub...",
                "✅ Fetched electron versions",
                || fetch_releases(&client, &args.releases_url),
            )
            .await?;
            if releases.is_empty() {
                return Err("No electron releases found.".to_string());
            }
            chooser.choose(VERSION_PROMPT, &releases)?
        }
    };

    let api = match &args.input {
        Some(path) => load_api_description(path)?,
        None => {
            let url = api_url(&args.api_url_template, &version);
            run_with_spinner_async(
                status,
                &format!("Fetching electron API definition for electron {version} from GitHub..."),
                "✅ Fetched API definition",
                || fetch_api_description(&client, &url, &version),
            )
            .await?
        }
    };

    let process = match args.process {
        Some(process) => process,
        None => {
            let choices: Vec<String> = Process::ALL.iter().map(ToString::to_string).collect();
            chooser.choose(PROCESS_PROMPT, &choices)?.parse()?
        }
    };

    status.line(format!(
        "Generating type definitions for electron {version} {process} process..."
    ));
    let contents = TypeEmitter::new(&version, &api)
        .generate(process, &FlowFormatter::default())
        .map_err(|err| format!("Failed to generate type definitions: {err}"))?;
    debug!(bytes = contents.len(), "Generated libdef.");

    if args.stdout {
        print!("{contents}");
        return Ok(());
    }

    let path = write_libdef(&args.out_dir, &version, &contents)?;
    let shown = std::fs::canonicalize(&path).unwrap_or(path);
    info!(path = %shown.display(), %process, "Libdef written.");
    status.line(format!(
        "✅ Successfully generated flow type definitions for electron {version} and wrote it to {}",
        shown.display()
    ));
    Ok(())
}

fn load_api_description(path: &std::path::Path) -> Result<ApiDescription, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    ApiDescription::from_json(&json)
        .map_err(|err| format!("Invalid API definition in {}: {err}", path.display()))
}
