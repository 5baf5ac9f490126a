//! Command registry.
//!
//! The registry is the fixed, ordered list of commands known to the
//! application. It is built once from the configuration and is read-only
//! afterwards; the palette filters it but never changes it.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Action, Command, CommandId};
use crate::startup::FolioConfig;

pub const CATEGORY_NAVIGATION: &str = "Navigation";
pub const CATEGORY_PROJECTS: &str = "Projects";
pub const CATEGORY_EXTERNAL: &str = "External";
pub const CATEGORY_ACTIONS: &str = "Actions";

/// Ids of the commands added after sections and projects. Section and
/// project ids share the same namespace and must avoid these.
pub const BUILTIN_COMMAND_IDS: [&str; 6] =
    ["github", "linkedin", "email", "resume", "palette", "help"];

/// Errors building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate command id '{0}'")]
    DuplicateId(CommandId),
}

/// Ordered, immutable list of commands with unique ids.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(commands: Vec<Command>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for command in &commands {
            if !seen.insert(command.id.clone()) {
                return Err(RegistryError::DuplicateId(command.id.clone()));
            }
        }
        Ok(Self { commands })
    }

    /// The standard command set for a portfolio configuration.
    ///
    /// Order: one navigation command per section, one command per project,
    /// external profile links, then the built-in actions.
    pub fn from_config(config: &FolioConfig) -> Result<Self, RegistryError> {
        let mut commands = Vec::new();

        for (index, section) in config.sections.iter().enumerate() {
            let mut command = Command::new(
                section.id.as_str(),
                format!("Open: {}", section.file_name),
                CATEGORY_NAVIGATION,
                Action::ScrollToSection(section.id.clone()),
            );
            if index < 9 {
                command = command.with_key_hint((index + 1).to_string());
            }
            commands.push(command);
        }

        for project in &config.projects {
            commands.push(Command::new(
                project.id.as_str(),
                format!("Go to: {} Project", project.name),
                CATEGORY_PROJECTS,
                Action::OpenProject(project.id.clone()),
            ));
        }

        if let Some(url) = &config.profile.github_url {
            commands.push(Command::new(
                "github",
                "Open: GitHub Profile",
                CATEGORY_EXTERNAL,
                Action::OpenUrl(url.clone()),
            ));
        }
        if let Some(url) = &config.profile.linkedin_url {
            commands.push(Command::new(
                "linkedin",
                "Open: LinkedIn Profile",
                CATEGORY_EXTERNAL,
                Action::OpenUrl(url.clone()),
            ));
        }

        commands.push(Command::new(
            "email",
            "Copy: Email Address",
            CATEGORY_ACTIONS,
            Action::CopyEmail,
        ));
        commands.push(
            Command::new(
                "resume",
                "Download: Resume",
                CATEGORY_ACTIONS,
                Action::DownloadResume,
            )
            .with_key_hint("R"),
        );
        commands.push(
            Command::new(
                "palette",
                "Toggle: Command Palette",
                CATEGORY_ACTIONS,
                Action::TogglePalette,
            )
            .with_key_hint("Ctrl+K"),
        );
        commands.push(
            Command::new(
                "help",
                "Show: Keyboard Shortcuts",
                CATEGORY_ACTIONS,
                Action::ShowHelp,
            )
            .with_key_hint("?"),
        );

        Self::new(commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Find a command and its registry position by id.
    pub fn find(&self, id: &CommandId) -> Option<(usize, &Command)> {
        self.commands.iter().enumerate().find(|(_, c)| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, SectionId};

    #[test]
    fn test_duplicate_ids_rejected() {
        let commands = vec![
            Command::new("a", "First", "Cat", Action::ShowHelp),
            Command::new("a", "Second", "Cat", Action::ShowHelp),
        ];
        assert_eq!(
            CommandRegistry::new(commands).unwrap_err(),
            RegistryError::DuplicateId(CommandId::new("a"))
        );
    }

    #[test]
    fn test_empty_registry_is_allowed() {
        let registry = CommandRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_registry_order_and_categories() {
        let registry = CommandRegistry::from_config(&FolioConfig::default()).unwrap();
        let categories: Vec<&str> = registry.iter().map(|c| c.category.as_str()).collect();

        assert_eq!(&categories[..5], &[CATEGORY_NAVIGATION; 5]);
        assert_eq!(&categories[5..9], &[CATEGORY_PROJECTS; 4]);
        assert_eq!(&categories[9..11], &[CATEGORY_EXTERNAL; 2]);
        assert_eq!(&categories[11..], &[CATEGORY_ACTIONS; 4]);
        assert_eq!(registry.len(), 15);
    }

    #[test]
    fn test_navigation_commands_carry_digit_hints() {
        let registry = CommandRegistry::from_config(&FolioConfig::default()).unwrap();
        let first = registry.get(0).unwrap();
        assert_eq!(first.label, "Open: README.md");
        assert_eq!(first.key_hint.as_deref(), Some("1"));
        assert_eq!(first.action, Action::ScrollToSection(SectionId::new("hero")));
    }

    #[test]
    fn test_find_by_id() {
        let registry = CommandRegistry::from_config(&FolioConfig::default()).unwrap();
        let (index, command) = registry.find(&CommandId::new("resume")).unwrap();
        assert_eq!(command.action, Action::DownloadResume);
        assert_eq!(registry.get(index), Some(command));
        assert!(registry.find(&CommandId::new("missing")).is_none());
    }

    #[test]
    fn test_external_links_are_optional() {
        let mut config = FolioConfig::default();
        config.profile.github_url = None;
        config.profile.linkedin_url = None;
        let registry = CommandRegistry::from_config(&config).unwrap();
        assert!(registry.iter().all(|c| c.category != CATEGORY_EXTERNAL));
    }

    #[test]
    fn test_project_id_colliding_with_section_is_rejected() {
        let config = FolioConfig::default()
            .with_projects(vec![Project::new("about", "About Me", "")]);
        assert!(matches!(
            CommandRegistry::from_config(&config),
            Err(RegistryError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_builtin_ids_cover_fixed_commands() {
        let registry = CommandRegistry::from_config(&FolioConfig::default()).unwrap();
        for id in BUILTIN_COMMAND_IDS {
            assert!(registry.find(&CommandId::new(id)).is_some(), "missing {}", id);
        }
    }
}
