//! TypeScriptEx CLI
//!
//! Main entry point for the interactive lesson menu.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tsex_core::{Catalog, Config, LessonRunner, MenuExit, MenuLoop, StdioSession};
use tracing_subscriber::EnvFilter;

/// TypeScriptEx - TypeScript lessons in the terminal
///
/// Lists thirty TypeScript lessons and runs the one you pick, until you quit.
#[derive(Parser, Debug)]
#[command(name = "tsex")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (default: tsex.json in current directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn).
    // Logs go to stderr so they never interleave with the menu.
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("TypeScriptEx starting");
    tracing::debug!(config = ?args.config, "Config file");

    match run_menu(args).await {
        Ok(exit) => {
            tracing::info!(?exit, "TypeScriptEx finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Loads configuration, wires the lessons and runs the menu until exit.
async fn run_menu(args: Args) -> anyhow::Result<MenuExit> {
    let config = load_config(args.config.as_deref())?;
    tracing::debug!(
        api_base_url = %config.api_base_url,
        decorations = config.decorations,
        clear_screen = config.clear_screen,
        "Configuration loaded"
    );

    let runner = LessonRunner::new(Catalog::standard(), tsex_lessons::registry(&config));
    let session = StdioSession::new(config.decor(), config.clear_screen);

    let exit = MenuLoop::new(session, runner).run().await?;
    Ok(exit)
}

/// Loads configuration from the given path or the default location.
fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    match config_path {
        Some(path_str) => {
            let path = Path::new(path_str);
            if !path.exists() {
                anyhow::bail!(
                    "Config file not found: '{}'\n\nSuggestion: Check the path or remove the --config flag to use defaults",
                    path.display()
                );
            }
            Config::load_from_file(path).map_err(|e| anyhow::anyhow!("{e}"))
        }
        None => Config::load().map_err(|e| anyhow::anyhow!("{e}")),
    }
}
