//! Portfolio configuration.
//!
//! The configuration holds everything the portfolio displays: the owner's
//! profile, the sections of the document and the projects. It is read from a
//! JSON file; every field is optional and falls back to the built-in demo
//! content.
//!
//! Lookup order for the file:
//! 1. `--config <path>` on the command line (must exist)
//! 2. `FOLIO_CONFIG` environment variable (must exist)
//! 3. `<config dir>/folio/config.json` (optional)

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::commands::BUILTIN_COMMAND_IDS;
use crate::error::{FolioError, FolioResult};
use crate::models::{Profile, Project, Section, SectionId};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub projects: Vec<Project>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            sections: default_sections(),
            projects: default_projects(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }

    /// Config path from `FOLIO_CONFIG`, if set and non-empty.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> FolioResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit path if given, else the default path if it exists,
    /// else the built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> FolioResult<Self> {
        if let Some(path) = explicit {
            tracing::info!("Loading config from {}", path.display());
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check invariants the rest of the application relies on.
    pub fn validate(&self) -> FolioResult<()> {
        if self.sections.is_empty() {
            return Err(FolioError::InvalidConfig(
                "at least one section is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.as_str().is_empty() {
                return Err(FolioError::InvalidConfig("section id is empty".to_string()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(FolioError::InvalidConfig(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        let mut projects = HashSet::new();
        for project in &self.projects {
            if !projects.insert(project.id.as_str()) {
                return Err(FolioError::InvalidConfig(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
            if seen.contains(project.id.as_str()) {
                return Err(FolioError::InvalidConfig(format!(
                    "project id '{}' clashes with a section id",
                    project.id
                )));
            }
        }

        // Sections and projects become palette commands next to the built-ins
        for id in seen.iter().chain(projects.iter()) {
            if BUILTIN_COMMAND_IDS.contains(id) {
                return Err(FolioError::InvalidConfig(format!(
                    "id '{}' is reserved for a built-in command",
                    id
                )));
            }
        }

        Ok(())
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn default_sections() -> Vec<Section> {
    vec![
        Section::new(
            "hero",
            "README.md",
            "Hi, I build software for people.",
            &[
                "I'm a software engineer who likes small tools, clear interfaces",
                "and code that is pleasant to come back to.",
                "",
                "Press 1-5 to jump between files, Ctrl+K or : for the command",
                "palette, and ? for every shortcut.",
            ],
        ),
        Section::new(
            "featured",
            "featured.js",
            "Featured work",
            &[
                "const featured = {",
                "  name: 'Forma',",
                "  what: 'Form builder with live validation and a schema editor',",
                "  status: 'shipped',",
                "};",
            ],
        ),
        Section::new(
            "work",
            "projects/",
            "Projects",
            &[
                "forma/       form builder with live validation",
                "upnext/      queue for shows, books and games",
                "callsign/    radio call sign practice trainer",
                "minigames/   collection of tiny browser games",
                "",
                "Open one from the sidebar or the command palette.",
            ],
        ),
        Section::new(
            "about",
            "about.md",
            "About",
            &[
                "I care about fast feedback loops, readable diffs and",
                "interfaces that can be driven from the keyboard.",
                "",
                "Outside of work: trail running, synthesizers, slow coffee.",
            ],
        ),
        Section::new(
            "experience",
            "experience.json",
            "Experience",
            &[
                "[",
                "  { \"role\": \"Software Engineer\", \"years\": \"2022-now\" },",
                "  { \"role\": \"Frontend Developer\", \"years\": \"2019-2022\" },",
                "  { \"role\": \"Intern\", \"years\": \"2018\" }",
                "]",
            ],
        ),
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project::new("forma", "Forma", "Form builder with live validation.")
            .with_stack(&["TypeScript", "React", "Zod"])
            .with_url("https://github.com/samcarter/forma")
            .with_details(&[
                "Drag fields onto a canvas, edit the schema side by side and",
                "preview validation errors as you type.",
            ]),
        Project::new("upnext", "UpNext", "A queue for shows, books and games.")
            .with_stack(&["Swift", "SwiftUI"])
            .with_details(&["Keeps one ordered list of everything you plan to watch or read."]),
        Project::new("callsign", "Callsign", "Radio call sign practice trainer.")
            .with_stack(&["Rust", "WebAssembly"])
            .with_url("https://github.com/samcarter/callsign")
            .with_details(&["Plays generated call signs in Morse at adjustable speeds."]),
        Project::new("minigames", "Minigames", "A collection of tiny browser games.")
            .with_stack(&["JavaScript", "Canvas"])
            .with_details(&["Each game fits in a single file and loads instantly."]),
    ]
}
