//! Transient notification seam
//!
//! Services that report outcomes (clipboard, export) talk to a `Notify`
//! implementation instead of a concrete widget. The terminal UI implements it
//! with pointer-anchored toasts; the headless command prints to stderr.

/// Visual tone of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Error,
}

/// Sink for short-lived, non-blocking status messages
pub trait Notify {
    fn notify(&mut self, message: &str, tone: Tone);
}

/// Records notifications in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, Tone)>,
}

#[cfg(test)]
impl Notify for RecordingNotifier {
    fn notify(&mut self, message: &str, tone: Tone) {
        self.messages.push((message.to_string(), tone));
    }
}
