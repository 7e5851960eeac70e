// Scout module - the lookup domain
//
// Everything here is independent of the terminal:
// - validate: local shape check for candidate usernames
// - model: request/response types for the lookup endpoint
// - client: HTTP boundary, outcome classification
// - render: response -> display model (rows + suggestion chips)
// - notify: transient notification seam
// - export: response -> JSON file
// - controller: UI state machine, owns the last response

pub mod client;
pub mod controller;
pub mod export;
pub mod model;
pub mod notify;
pub mod render;
pub mod validate;

pub use client::{LookupClient, LookupError};
pub use controller::{Controller, UiState};
pub use export::Exporter;
pub use model::{Availability, LookupRequest, LookupResponse};
pub use notify::{Notify, Tone};
