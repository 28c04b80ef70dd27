// LogSage - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Service configuration resolution (.env + environment)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use logsage::app;
pub use logsage::core;
pub use logsage::llm;
pub use logsage::ui;
pub use logsage::util;

use clap::Parser;
use std::path::PathBuf;

/// LogSage - AI-assisted log file error analyser.
///
/// Open an application log (.txt, .log, .json), extract context around every
/// error line, and ask Azure OpenAI to explain the issues and suggest fixes.
#[derive(Parser, Debug)]
#[command(name = "LogSage", version, about)]
struct Cli {
    /// Log file to open at startup (opens empty if omitted).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogSage starting"
    );

    // Load .env (if present) before reading the environment. Missing files
    // are fine; explicit environment variables always win.
    if dotenv::dotenv().is_ok() {
        tracing::debug!(".env file loaded");
    }

    // Resolve the service configuration once, up front. A missing or invalid
    // configuration is not fatal: the GUI still launches with the Analyze
    // action disabled and the problem shown in the status bar.
    let config = match llm::config::ServiceConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "Service configuration unavailable");
            None
        }
    };

    // Create application state
    let mut state = app::state::AppState::new(config, cli.debug);

    // If a path was provided on the CLI, queue it for loading.
    if let Some(path) = cli.path {
        state.pending_open = Some(path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LogSageApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogSage GUI: {e}");
        std::process::exit(1);
    }
}
