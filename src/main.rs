// DataDefender - Data Discovery and Anonymization Tool
// Copyright (c) 2025 DataDefender Contributors
// Licensed under the MIT License

use clap::{CommandFactory, Parser};
use datadefender::cli::commands::{self, EXIT_ALREADY_RUNNING, EXIT_FATAL, EXIT_OK};
use datadefender::cli::{Cli, Command};
use datadefender::lock::ApplicationLock;
use datadefender::logging::init_logging;
use datadefender::timer::ExecutionTimer;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // The tracing filter can't be raised after init, so the debug flag is
    // pre-scanned from raw argv; clap still owns real parsing below.
    let debug = std::env::args().any(|arg| arg == "--debug");
    if let Err(e) = init_logging(if debug { "debug" } else { "info" }) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(EXIT_FATAL);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "DataDefender");

    let exit_code = run().await;
    process::exit(exit_code);
}

/// Full orchestration for one invocation.
///
/// Drops inside this function run before the process exits, so both the
/// instance lock and the elapsed-time report are guaranteed on every control
/// path, early returns and failures included.
async fn run() -> i32 {
    let _timer = ExecutionTimer::start();

    // Ensure we are not trying to run a second instance of the same program
    let _lock = match ApplicationLock::acquire("DataDefender") {
        Ok(lock) => {
            tracing::debug!(lock_file = %lock.path().display(), "Instance lock acquired");
            lock
        }
        Err(datadefender::domain::DefenderError::AlreadyRunning(_)) => {
            tracing::error!("Another instance of this program is already active");
            return EXIT_ALREADY_RUNNING;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to acquire instance lock");
            return EXIT_FATAL;
        }
    };

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    tracing::info!(args = ?raw_args, "Command-line arguments");

    // Help requests and malformed invocations both end here: clap renders
    // the usage text and we return cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return EXIT_OK;
        }
    };

    let Some(token) = cli.args.first() else {
        let _ = Cli::command().print_help();
        return EXIT_OK;
    };

    let Some(command) = Command::resolve(token) else {
        tracing::warn!(command = %token, "Unknown command");
        let _ = Cli::command().print_help();
        return EXIT_OK;
    };

    match commands::dispatch(command, &cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    }
}
