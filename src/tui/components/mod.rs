// Components module - reusable UI building blocks
//
// - Title bar: app name, loading spinner
// - Input bar: username editor
// - Results table: per-platform rows
// - Suggestions panel: copyable chips
// - Logs panel: recent log entries
// - Status bar: key hints
// - Toast: pointer-anchored notifications

pub mod input_bar;
pub mod logs_panel;
pub mod results_table;
pub mod status_bar;
pub mod suggestions_panel;
pub mod title_bar;
pub mod toast;

pub use input_bar::InputLine;
pub use toast::ToastStack;
