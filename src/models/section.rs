//! Page sections.
//!
//! A section is a named region of the portfolio document. Each one is shown
//! in the sidebar as a "file" and can be reached with a digit shortcut.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a section (the `#fragment` of the page).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a fragment such as `#about` or `about`.
    ///
    /// Returns `None` for an empty fragment.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A section of the portfolio document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Fragment identifier (`hero`, `about`, ...)
    pub id: SectionId,
    /// File name shown in the sidebar and status bar (`README.md`, ...)
    pub file_name: String,
    /// Heading rendered at the top of the section
    pub title: String,
    /// Body text, one entry per line
    #[serde(default)]
    pub body: Vec<String>,
}

impl Section {
    pub fn new(id: &str, file_name: &str, title: &str, body: &[&str]) -> Self {
        Self {
            id: SectionId::new(id),
            file_name: file_name.to_string(),
            title: title.to_string(),
            body: body.iter().map(|line| line.to_string()).collect(),
        }
    }
}
