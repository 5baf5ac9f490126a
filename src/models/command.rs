//! Command palette entries.
//!
//! A [`Command`] is a labelled, categorized [`Action`]. Commands are built
//! once at startup and never change afterwards; the [`Action`] is plain data
//! that the application performs, which keeps commands free of references
//! back into the application.

use std::fmt;

use super::section::SectionId;

/// Stable identifier of a command.
///
/// Rendered palette rows are bound to this id rather than to their position,
/// so a click resolves to the same command even if the list was re-filtered
/// in between.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandId(String);

impl CommandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side effect performed when a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scroll the document to a section and record its fragment
    ScrollToSection(SectionId),
    /// Show a project's detail page
    OpenProject(String),
    /// Open an external link in the browser
    OpenUrl(String),
    /// Copy the owner's email address to the clipboard
    CopyEmail,
    /// Open the resume document
    DownloadResume,
    /// Toggle the command palette
    TogglePalette,
    /// Show the keyboard shortcut overlay
    ShowHelp,
}

/// A palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
    pub label: String,
    pub category: String,
    /// Hotkey reminder shown next to the label. Display only.
    pub key_hint: Option<String>,
    pub action: Action,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            id: CommandId::new(id),
            label: label.into(),
            category: category.into(),
            key_hint: None,
            action,
        }
    }

    pub fn with_key_hint(mut self, hint: impl Into<String>) -> Self {
        self.key_hint = Some(hint.into());
        self
    }

    /// Case-insensitive substring match against the label or the category.
    ///
    /// `lowered_query` must already be lowercase.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.label.to_lowercase().contains(lowered_query)
            || self.category.to_lowercase().contains(lowered_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Command {
        Command::new("resume", "Download: Resume", "Actions", Action::DownloadResume)
    }

    #[test]
    fn test_matches_label_case_insensitive() {
        assert!(command().matches("resume"));
        assert!(command().matches("download: r"));
    }

    #[test]
    fn test_matches_category() {
        assert!(command().matches("act"));
    }

    #[test]
    fn test_matches_is_substring_not_fuzzy() {
        assert!(!command().matches("dlr"));
        assert!(!command().matches("resume download"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(command().matches(""));
    }

    #[test]
    fn test_key_hint_builder() {
        let cmd = command().with_key_hint("R");
        assert_eq!(cmd.key_hint.as_deref(), Some("R"));
    }
}
