//! Click action handler.
//!
//! Processes click actions dispatched from the hit area registry, translating
//! them into App state mutations.

use super::hit_area::ClickAction;
use crate::app::App;
use crate::models::Action;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        // =====================================================================
        // Command Palette
        // =====================================================================
        ClickAction::PaletteItem(id) => {
            // Bound to the id, so a list re-filtered since the last render
            // either still contains the command or ignores the click.
            match app.palette.execute_by_id(&id) {
                Some(action) => {
                    tracing::debug!("Click: PaletteItem({})", id);
                    app.perform(action);
                }
                None => tracing::debug!("Click: PaletteItem({}) no longer listed", id),
            }
        }
        ClickAction::PaletteBackdrop => {
            app.palette.close();
            tracing::debug!("Click: PaletteBackdrop - palette closed");
        }
        ClickAction::PaletteContent | ClickAction::HelpContent => {}

        // =====================================================================
        // Help Overlay
        // =====================================================================
        ClickAction::HelpClose | ClickAction::HelpBackdrop => {
            app.help_open = false;
            tracing::debug!("Click: {:?} - help closed", action);
        }

        // =====================================================================
        // Sidebar
        // =====================================================================
        ClickAction::SidebarFile(section) => {
            app.perform(Action::ScrollToSection(section));
        }
        ClickAction::SidebarFolder => {
            app.sidebar.toggle_projects();
            tracing::debug!("Click: SidebarFolder - open={}", app.sidebar.projects_open);
        }
        ClickAction::SidebarProject(id) => {
            app.perform(Action::OpenProject(id));
        }
        ClickAction::SidebarToggle => {
            app.sidebar.toggle_narrow();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::models::{CommandId, SectionId};

    #[test]
    fn test_click_palette_item_runs_command() {
        let mut t = test_app();
        t.app.palette.open();
        handle_click_action(&mut t.app, ClickAction::PaletteItem(CommandId::new("resume")));
        assert!(!t.app.palette.is_open());
        assert_eq!(t.launcher.launched().len(), 1);
    }

    #[test]
    fn test_click_stale_palette_item_is_noop() {
        let mut t = test_app();
        t.app.palette.open();
        t.app.palette.filter("forma");
        handle_click_action(&mut t.app, ClickAction::PaletteItem(CommandId::new("resume")));
        assert!(t.app.palette.is_open());
        assert!(t.launcher.launched().is_empty());
    }

    #[test]
    fn test_backdrop_closes_content_does_not() {
        let mut t = test_app();
        t.app.palette.open();
        handle_click_action(&mut t.app, ClickAction::PaletteContent);
        assert!(t.app.palette.is_open());
        handle_click_action(&mut t.app, ClickAction::PaletteBackdrop);
        assert!(!t.app.palette.is_open());

        t.app.help_open = true;
        handle_click_action(&mut t.app, ClickAction::HelpContent);
        assert!(t.app.help_open);
        handle_click_action(&mut t.app, ClickAction::HelpClose);
        assert!(!t.app.help_open);
    }

    #[test]
    fn test_sidebar_clicks() {
        let mut t = test_app();
        handle_click_action(&mut t.app, ClickAction::SidebarFile(SectionId::new("experience")));
        assert_eq!(t.app.fragment().as_deref(), Some("#experience"));

        let before = t.app.sidebar.projects_open;
        handle_click_action(&mut t.app, ClickAction::SidebarFolder);
        assert_eq!(t.app.sidebar.projects_open, !before);

        handle_click_action(&mut t.app, ClickAction::SidebarProject("callsign".to_string()));
        assert_eq!(t.app.current_project().map(|p| p.id.as_str()), Some("callsign"));
    }
}
