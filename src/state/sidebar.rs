//! Sidebar file tree state.

/// Terminals narrower than this hide the sidebar unless toggled open.
pub const NARROW_WIDTH: u16 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    /// Whether the `projects/` folder is expanded
    pub projects_open: bool,
    /// Sidebar shown on a narrow terminal (the "mobile menu")
    pub narrow_open: bool,
    narrow: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            projects_open: true,
            narrow_open: false,
            narrow: false,
        }
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Record the terminal width. Growing past the breakpoint drops the
    /// narrow toggle.
    pub fn set_width(&mut self, width: u16) {
        self.narrow = width < NARROW_WIDTH;
        if !self.narrow {
            self.narrow_open = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.narrow || self.narrow_open
    }

    pub fn toggle_projects(&mut self) {
        self.projects_open = !self.projects_open;
    }

    /// Toggle the sidebar on narrow terminals. Returns whether anything
    /// changed.
    pub fn toggle_narrow(&mut self) -> bool {
        if !self.narrow {
            return false;
        }
        self.narrow_open = !self.narrow_open;
        true
    }

    /// Close the narrow sidebar after a file was chosen.
    pub fn file_chosen(&mut self) {
        if self.narrow {
            self.narrow_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_sidebar_always_visible() {
        let mut sidebar = SidebarState::new();
        sidebar.set_width(120);
        assert!(sidebar.is_visible());
        assert!(!sidebar.toggle_narrow());
        assert!(sidebar.is_visible());
    }

    #[test]
    fn test_narrow_toggle_and_close_on_choice() {
        let mut sidebar = SidebarState::new();
        sidebar.set_width(60);
        assert!(!sidebar.is_visible());
        assert!(sidebar.toggle_narrow());
        assert!(sidebar.is_visible());
        sidebar.file_chosen();
        assert!(!sidebar.is_visible());
    }

    #[test]
    fn test_widening_resets_narrow_toggle() {
        let mut sidebar = SidebarState::new();
        sidebar.set_width(60);
        sidebar.toggle_narrow();
        sidebar.set_width(100);
        sidebar.set_width(60);
        assert!(!sidebar.is_visible());
    }

    #[test]
    fn test_projects_folder_toggle() {
        let mut sidebar = SidebarState::new();
        assert!(sidebar.projects_open);
        sidebar.toggle_projects();
        assert!(!sidebar.projects_open);
    }
}
