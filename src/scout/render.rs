//! Response -> display model
//!
//! Pure transformation. The terminal views draw the `RenderModel`; nothing in
//! here knows about ratatui.

use super::model::{Availability, LookupResponse, PlatformResult};

/// Text shown in the link column when there is nothing to open
pub const LINK_PLACEHOLDER: &str = "-";

/// A link that opens outside the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: String,
}

impl ExternalLink {
    /// Browsing context the link opens in
    pub const TARGET: &'static str = "_blank";
    /// No window.opener and no Referer for the opened page
    pub const REL: &'static str = "noopener noreferrer";

    pub fn rel(&self) -> &'static str {
        Self::REL
    }

    pub fn target(&self) -> &'static str {
        Self::TARGET
    }
}

/// Content of the link column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCell {
    External(ExternalLink),
    Placeholder,
}

impl LinkCell {
    pub fn label(&self) -> &str {
        match self {
            Self::External(link) => link.label,
            Self::Placeholder => LINK_PLACEHOLDER,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Self::External(link) => Some(&link.href),
            Self::Placeholder => None,
        }
    }
}

/// One results table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub platform: String,
    pub status_label: String,
    pub availability: Availability,
    pub style_class: &'static str,
    pub link: LinkCell,
    pub notes: String,
}

/// A clickable suggestion; `text` is copied verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionChip {
    pub text: String,
}

/// Everything the results and suggestions panels need
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderModel {
    pub username: String,
    pub rows: Vec<ResultRow>,
    /// Empty when the suggestions panel is hidden
    pub chips: Vec<SuggestionChip>,
}

impl RenderModel {
    pub fn show_suggestions(&self) -> bool {
        !self.chips.is_empty()
    }

    /// Counts per availability: (available, taken, unknown)
    pub fn tally(&self) -> (usize, usize, usize) {
        self.rows
            .iter()
            .fold((0, 0, 0), |(a, t, u), row| match row.availability {
                Availability::Available => (a + 1, t, u),
                Availability::Taken => (a, t + 1, u),
                Availability::Unknown => (a, t, u + 1),
            })
    }
}

/// Build the display model for a response
pub fn render(response: &LookupResponse) -> RenderModel {
    RenderModel {
        username: response.username.clone(),
        rows: response.results.iter().map(render_row).collect(),
        chips: response
            .visible_suggestions()
            .iter()
            .map(|text| SuggestionChip { text: text.clone() })
            .collect(),
    }
}

fn render_row(result: &PlatformResult) -> ResultRow {
    let availability = result.availability();
    ResultRow {
        platform: result.platform.clone(),
        status_label: result.status.clone(),
        availability,
        style_class: availability.style_class(),
        link: link_cell(result, availability),
        notes: result.reason.clone().unwrap_or_default(),
    }
}

fn link_cell(result: &PlatformResult, availability: Availability) -> LinkCell {
    let label = match availability {
        Availability::Taken => "View",
        Availability::Unknown => "Check",
        Availability::Available => return LinkCell::Placeholder,
    };

    match result.link() {
        Some(href) => LinkCell::External(ExternalLink {
            label,
            href: href.to_string(),
        }),
        None => LinkCell::Placeholder,
    }
}
