// Handle Scout - username availability across platforms
//
// Sends a candidate username to the lookup service and shows, per platform,
// whether it is available, taken or unknown, plus alternate suggestions.
//
// Architecture:
// - Scout: validation, HTTP client, interaction controller, rendering, export
// - Clipboard: system clipboard with an external-command fallback
// - TUI (ratatui): interactive front end; lookups run on spawned tasks and
//   report back over an mpsc channel
// - CLI (clap): headless `check` and `config` subcommands

mod cli;
mod clipboard;
mod config;
mod logging;
mod scout;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Config management never needs logging or the network
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        cli::handle_config(show, path, reset, cli.api_url)?;
        return Ok(ExitCode::SUCCESS);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = cli::effective_config(cli.api_url);

    match cli.command {
        Some(Commands::Check {
            username,
            json,
            copy,
            save,
        }) => {
            // Keep the guard alive so file logs flush
            let _file_guard = logging::init(&config.logging, LogSink::Stderr);
            let ok = cli::run_check(&config, &username, json, copy, save).await?;
            Ok(if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        _ => {
            // In TUI mode logs are captured to the buffer so they do not
            // garble the display
            let log_buffer = LogBuffer::new();
            let _file_guard = logging::init(&config.logging, LogSink::Tui(log_buffer.clone()));
            tracing::info!("handle-scout v{} starting", config::VERSION);

            tui::run_tui(config, log_buffer).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
