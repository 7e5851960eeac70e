//! Clipboard service: system clipboard with a command-line fallback
//!
//! The preferred path is the system clipboard through `arboard`, used only in
//! a local display session. Over SSH or on a headless box the preferred path
//! is treated as unavailable and the text is piped into a copy command
//! (`wl-copy`, `xclip`, `pbcopy`, ...) instead.
//!
//! The outcome is reported through a `Notify` sink so the caller decides how
//! it is shown.

use crate::config::ClipboardConfig;
use crate::scout::{Notify, Tone};
use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use std::io::Write;
use std::process::{Child, Command, Stdio};

/// Shown when both paths are unavailable or the chosen one fails
pub const COPY_FAILED: &str = "Clipboard unavailable. Try downloading instead.";

/// Something that can put text on a clipboard
pub trait ClipboardBackend: Send {
    /// Short name for logs
    fn name(&self) -> &str;

    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`
///
/// The clipboard is created fresh each time to avoid holding resources.
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

/// External copy command fed through stdin
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line, e.g. `"xclip -selection clipboard"`
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// First known copy command found on PATH
    pub fn detect() -> Option<Self> {
        let candidates: &[(&str, &[&str])] = &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
            ("pbcopy", &[]),
            ("clip", &[]),
        ];

        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        candidates
            .iter()
            .filter(|(program, _)| *program != "wl-copy" || wayland)
            .find(|(program, _)| find_on_path(program))
            .map(|(program, args)| {
                Self::new(*program, args.iter().map(|a| a.to_string()).collect())
            })
    }
}

impl ClipboardBackend for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.program))?;
        let mut guard = ChildGuard(child);

        {
            let stdin = guard
                .0
                .stdin
                .as_mut()
                .context("Copy command has no stdin")?;
            stdin
                .write_all(text.as_bytes())
                .context("Failed to write to copy command")?;
        }
        // Close stdin so the command sees EOF
        drop(guard.0.stdin.take());

        let status = guard.0.wait().context("Copy command did not finish")?;
        if !status.success() {
            bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Kills and reaps the copy command on every exit path
struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Ok(None) = self.0.try_wait() {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }
}

fn find_on_path(program: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(program);
        candidate.is_file() || candidate.with_extension("exe").is_file()
    })
}

/// Whether the system clipboard belongs to the user at the keyboard.
///
/// Over SSH the "system" clipboard is the remote host's, and on Linux without
/// a display server there is none at all.
pub fn display_session_available() -> bool {
    if std::env::var_os("SSH_CONNECTION").is_some() || std::env::var_os("SSH_TTY").is_some() {
        return false;
    }
    if cfg!(all(unix, not(target_os = "macos"))) {
        return std::env::var_os("DISPLAY").is_some()
            || std::env::var_os("WAYLAND_DISPLAY").is_some();
    }
    true
}

/// Copy with preferred/fallback selection and user notification
pub struct ClipboardService {
    primary: Option<Box<dyn ClipboardBackend>>,
    fallback: Option<Box<dyn ClipboardBackend>>,
}

impl ClipboardService {
    pub fn new(
        primary: Option<Box<dyn ClipboardBackend>>,
        fallback: Option<Box<dyn ClipboardBackend>>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Build from config and the current environment
    pub fn from_config(config: &ClipboardConfig) -> Self {
        let primary: Option<Box<dyn ClipboardBackend>> =
            if config.prefer_system && display_session_available() {
                Some(Box::new(SystemClipboard))
            } else {
                None
            };

        let fallback = match &config.fallback_command {
            Some(command) => CommandClipboard::parse(command),
            None => CommandClipboard::detect(),
        }
        .map(|c| Box::new(c) as Box<dyn ClipboardBackend>);

        tracing::debug!(
            primary = ?primary.as_ref().map(|b| b.name()),
            fallback = ?fallback.as_ref().map(|b| b.name()),
            "Clipboard backends selected"
        );
        Self::new(primary, fallback)
    }

    /// Copy `text` and notify the outcome. `what` names the content in the
    /// success message ("JSON", "\"abc\"").
    ///
    /// The preferred path is used whenever it is available; its failure is
    /// final. The fallback only runs when there is no preferred path.
    pub fn copy_text(&mut self, text: &str, what: &str, notifier: &mut dyn Notify) -> bool {
        let result = if text.is_empty() {
            Err(anyhow::anyhow!("nothing to copy"))
        } else if let Some(primary) = self.primary.as_mut() {
            primary.set_text(text)
        } else if let Some(fallback) = self.fallback.as_mut() {
            fallback.set_text(text)
        } else {
            Err(anyhow::anyhow!("no clipboard backend available"))
        };

        match result {
            Ok(()) => {
                tracing::debug!("Copied {} ({} bytes)", what, text.len());
                notifier.notify(&format!("Copied {} to clipboard.", what), Tone::Info);
                true
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                notifier.notify(COPY_FAILED, Tone::Error);
                false
            }
        }
    }
}
