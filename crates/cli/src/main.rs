use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ticklist_cli::Command;
use ticklist_store::{FileTaskStore, JsonFileAdapter, StoreResult, resolve_store_path};

/// Ticklist - a small task list for the terminal
#[derive(Parser)]
#[command(name = "tick")]
#[command(version)]
#[command(about = "A small task list for the terminal", long_about = None)]
struct Args {
    /// Path to the task list file (can also be set via TICK_STORE_PATH env var)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=ticklist_store=debug` - debug logs from the store only
///
/// Defaults to `warn`. Logs go to stderr so command output stays clean.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> StoreResult<()> {
    let args = Args::parse();
    let output = run_with_args(&args)?;
    println!("{}", output);
    Ok(())
}

/// Run the application with the given arguments and return what to print
fn run_with_args(args: &Args) -> StoreResult<String> {
    // Determine store path using priority: CLI arg > env var > default
    let store_path = resolve_store_path(args.store.clone());
    debug!(path = %store_path.display(), "using task list file");

    let adapter = JsonFileAdapter::open(&store_path)?;
    let mut store = FileTaskStore::open(adapter);

    let output = match &args.command {
        Some(cmd) => cmd.execute(&mut store),
        None => "Welcome to Ticklist!\nUse 'tick --help' for usage information.".to_string(),
    };

    Ok(output)
}
