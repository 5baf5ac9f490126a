//! Owner profile and project descriptions.

use serde::{Deserialize, Serialize};

/// The portfolio owner.
///
/// The email address is stored split into user and domain parts and only
/// assembled on demand, so the full address never sits in the config as a
/// single scrapeable string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email_user: String,
    pub email_domain: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    /// Path or URL of the resume document
    pub resume: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sam Carter".to_string(),
            role: "Software Engineer".to_string(),
            email_user: "hello.samcarter".to_string(),
            email_domain: "example.com".to_string(),
            github_url: Some("https://github.com/samcarter".to_string()),
            linkedin_url: Some("https://linkedin.com/in/samcarter".to_string()),
            resume: "https://example.com/samcarter_resume.pdf".to_string(),
        }
    }
}

impl Profile {
    /// The assembled email address.
    pub fn email(&self) -> String {
        format!("{}@{}", self.email_user, self.email_domain)
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email())
    }
}

/// A project with its own detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

impl Project {
    pub fn new(id: &str, name: &str, summary: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            summary: summary.to_string(),
            stack: Vec::new(),
            url: None,
            details: Vec::new(),
        }
    }

    pub fn with_stack(mut self, stack: &[&str]) -> Self {
        self.stack = stack.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_details(mut self, details: &[&str]) -> Self {
        self.details = details.iter().map(|s| s.to_string()).collect();
        self
    }
}
