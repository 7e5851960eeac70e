// CLI module - command-line argument parsing and handlers
//
// Provides:
// - (no subcommand): start the terminal UI
// - check <username>: one-shot lookup printed to stdout
// - config --show/--path/--reset: configuration management

use crate::clipboard::ClipboardService;
use crate::config::{Config, VERSION};
use crate::scout::render::{render, RenderModel};
use crate::scout::validate::{validate, INVALID_USERNAME};
use crate::scout::{Availability, Exporter, LookupClient, LookupRequest, Notify, Tone};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Handle Scout - check where a username is free
#[derive(Parser)]
#[command(name = "handle-scout")]
#[command(version = VERSION)]
#[command(about = "Check username availability across platforms", long_about = None)]
pub struct Cli {
    /// Base URL of the lookup service (overrides config and env)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one username and print the results
    Check {
        username: String,

        /// Print the raw response as pretty JSON
        #[arg(long)]
        json: bool,

        /// Copy the JSON response to the clipboard
        #[arg(long)]
        copy: bool,

        /// Save the JSON response to the download directory
        #[arg(long)]
        save: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Notifications for headless commands go to stderr
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&mut self, message: &str, tone: Tone) {
        let color = match tone {
            Tone::Info => colors::GREEN,
            Tone::Error => colors::RED,
        };
        eprintln!("{}{}{}", color, message, colors::RESET);
    }
}

/// Run `check`. Returns false when the lookup did not produce results.
pub async fn run_check(
    config: &Config,
    username: &str,
    json: bool,
    copy: bool,
    save: bool,
) -> Result<bool> {
    let username = username.trim();
    if !validate(username) {
        eprintln!("{}{}{}", colors::RED, INVALID_USERNAME, colors::RESET);
        return Ok(false);
    }

    let client = LookupClient::new(config.api_url.clone());
    let request = LookupRequest {
        seq: 1,
        username: username.to_string(),
    };

    let response = match client.check(&request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Lookup failed: {}", e);
            eprintln!("{}{}{}", colors::RED, e.user_message(), colors::RESET);
            return Ok(false);
        }
    };

    if json {
        println!("{}", response.to_pretty_json()?);
    } else {
        for line in format_results(&render(&response)) {
            println!("{}", line);
        }
    }

    let mut notifier = ConsoleNotifier;
    if copy {
        let mut clipboard = ClipboardService::from_config(&config.clipboard);
        let text = response.to_pretty_json()?;
        clipboard.copy_text(&text, "JSON", &mut notifier);
    }
    if save {
        let exporter = Exporter::new(config.download_dir.clone());
        match exporter.export_json(&response) {
            Ok(path) => notifier.notify(&format!("Saved {}", path.display()), Tone::Info),
            Err(e) => notifier.notify(&format!("Download failed: {}", e), Tone::Error),
        }
    }

    Ok(true)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Coloured table plus suggestions line
fn format_results(model: &RenderModel) -> Vec<String> {
    let platform_width = model
        .rows
        .iter()
        .map(|r| r.platform.width())
        .chain(std::iter::once("Platform".len()))
        .max()
        .unwrap_or(0);
    let status_width = model
        .rows
        .iter()
        .map(|r| r.status_label.width())
        .chain(std::iter::once("Status".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        format!(
            "{}Results for {}{}",
            colors::BOLD,
            model.username,
            colors::RESET
        ),
        format!(
            "{}{}  {}  {}  Notes{}",
            colors::DIM,
            pad("Platform", platform_width),
            pad("Status", status_width),
            pad("Link", 5),
            colors::RESET
        ),
    ];

    for row in &model.rows {
        let color = match row.availability {
            Availability::Available => colors::GREEN,
            Availability::Taken => colors::RED,
            Availability::Unknown => colors::YELLOW,
        };
        let link = row.link.href().unwrap_or(row.link.label());
        lines.push(
            format!(
                "{}  {}{}{}  {}  {}",
                pad(&row.platform, platform_width),
                color,
                pad(&row.status_label, status_width),
                colors::RESET,
                pad(link, 5),
                row.notes
            )
            .trim_end()
            .to_string(),
        );
    }

    if model.show_suggestions() {
        let names: Vec<&str> = model.chips.iter().map(|c| c.text.as_str()).collect();
        lines.push(String::new());
        lines.push(format!(
            "{}Suggestions:{} {}",
            colors::CYAN,
            colors::RESET,
            names.join(", ")
        ));
    }

    lines
}

/// Handle `config`
pub fn handle_config(show: bool, path: bool, reset: bool, api_url: Option<String>) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show(&effective_config(api_url));
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: handle-scout config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
    println!("{}", path.display());
    Ok(())
}

/// Configuration as a run would see it: env > file > defaults, then `--api-url`
pub fn effective_config(api_url: Option<String>) -> Config {
    let mut config = Config::from_env();
    if let Some(api_url) = api_url {
        config.api_url = api_url;
    }
    config
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    println!("{}", config.to_toml().trim_end());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    use anyhow::Context;

    let path = Config::config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
