//! Entry point for the Ticklist TUI application.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticklist_store::resolve_store_path;
use ticklist_tui::{App, TuiResult};

/// Log file written next to the task list when RUST_LOG is set
const LOG_FILE_NAME: &str = "tick-tui.log";

/// Ticklist terminal editor
#[derive(Parser)]
#[command(name = "tick-tui")]
#[command(version)]
#[command(about = "Edit a Ticklist task list in the terminal", long_about = None)]
struct Args {
    /// Path to the task list file (can also be set via TICK_STORE_PATH env var)
    #[arg(long)]
    store: Option<PathBuf>,
}

/// Initialize file logging when RUST_LOG is set.
///
/// The screen belongs to the editor, so logs go to `tick-tui.log` beside the
/// task list file. Without RUST_LOG nothing is logged.
fn init_logging(store_path: &Path) {
    let Ok(env_filter) = EnvFilter::try_from_default_env() else {
        return;
    };

    let log_path = store_path.with_file_name(LOG_FILE_NAME);
    let file = match open_log_file(&log_path) {
        Ok(file) => file,
        Err(e) => {
            // Printed before the editor takes over the screen
            eprintln!(
                "warning: RUST_LOG is set but {} could not be opened ({}); logging is disabled",
                log_path.display(),
                e
            );
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .init();
}

/// Open the log file for appending, creating its directory if needed.
fn open_log_file(log_path: &Path) -> io::Result<File> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(log_path)
}

fn main() -> TuiResult<()> {
    let args = Args::parse();
    let store_path = resolve_store_path(args.store);
    init_logging(&store_path);

    let mut app = App::open(&store_path)?;
    app.run()
}
