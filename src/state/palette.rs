//! Command palette state.
//!
//! The palette is a two-state machine (closed / open) over a shared, read-only
//! [`CommandRegistry`]:
//!
//! - `open()` resets the query, shows every command and selects the first one
//! - typing filters by case-insensitive substring on label or category
//! - Up/Down move the selection, clamped to the list (no wraparound)
//! - Enter closes the palette first, then hands back the selected [`Action`]
//!
//! Filtering keeps registry order; there is no relevance ranking. Rendering is
//! a pure function of this state: [`CommandPalette::view`] groups the filtered
//! commands by category in first-seen order.

use std::sync::Arc;

use crate::commands::CommandRegistry;
use crate::models::{Action, Command, CommandId};

/// List rows assumed before the first layout pass reports the real height.
pub const DEFAULT_LIST_ROWS: usize = 10;

/// Palette state owned by the application.
#[derive(Debug, Clone)]
pub struct CommandPalette {
    registry: Arc<CommandRegistry>,
    /// Current filter text
    query: String,
    /// Registry positions of the matching commands, in registry order
    filtered: Vec<usize>,
    /// Position in `filtered` of the selected command
    selected: Option<usize>,
    is_open: bool,
    /// Visible rows of the result list; `None` when there is no room to lay
    /// the palette out, which disables it
    list_rows: Option<usize>,
    /// First visible row of the result list (headers count as rows)
    scroll_offset: usize,
}

impl CommandPalette {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        let mut palette = Self {
            registry,
            query: String::new(),
            filtered: Vec::new(),
            selected: None,
            is_open: false,
            list_rows: Some(DEFAULT_LIST_ROWS),
            scroll_offset: 0,
        };
        palette.filter("");
        palette
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the palette has somewhere to render.
    pub fn is_available(&self) -> bool {
        self.list_rows.is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index into the filtered list of the selected command.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The matching commands in display order.
    pub fn filtered_commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.filtered
            .iter()
            .filter_map(move |&index| self.registry.get(index))
    }

    pub fn selected_command(&self) -> Option<&Command> {
        self.selected.and_then(|i| self.command_at(i))
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn command_at(&self, index: usize) -> Option<&Command> {
        self.filtered
            .get(index)
            .and_then(|&registry_index| self.registry.get(registry_index))
    }

    // ========================================================================
    // Open / close
    // ========================================================================

    /// Open the palette with an empty query and the first command selected.
    ///
    /// Does nothing when the palette has no room to render.
    pub fn open(&mut self) {
        if !self.is_available() {
            tracing::debug!("Command palette unavailable, ignoring open");
            return;
        }
        self.is_open = true;
        self.filter("");
        tracing::debug!("Command palette opened ({} commands)", self.filtered.len());
    }

    pub fn close(&mut self) {
        if self.is_open {
            tracing::debug!("Command palette closed");
        }
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Report the number of visible list rows, or `None` when the palette
    /// cannot be laid out. Losing the layout closes an open palette.
    pub fn set_list_rows(&mut self, rows: Option<usize>) {
        self.list_rows = rows.filter(|&r| r > 0);
        if self.list_rows.is_none() {
            self.close();
        } else {
            self.scroll_selected_into_view();
        }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Replace the query and recompute the matching commands.
    ///
    /// A command matches when its label or category contains the query,
    /// ignoring case. The empty query matches everything. Selection resets to
    /// the first match.
    pub fn filter(&mut self, query: &str) {
        self.query = query.to_string();
        let lowered = self.query.to_lowercase();

        self.filtered = self
            .registry
            .iter()
            .enumerate()
            .filter(|(_, command)| command.matches(&lowered))
            .map(|(index, _)| index)
            .collect();

        self.selected = if self.filtered.is_empty() { None } else { Some(0) };
        self.scroll_offset = 0;
        self.scroll_selected_into_view();
    }

    /// Append a typed character to the query.
    pub fn push_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.filter(&query);
    }

    /// Remove the last character of the query.
    pub fn pop_char(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.filter(&query);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_next(&mut self) {
        if let Some(current) = self.selected {
            let last = self.filtered.len().saturating_sub(1);
            self.selected = Some((current + 1).min(last));
            self.scroll_selected_into_view();
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(current) = self.selected {
            self.selected = Some(current.saturating_sub(1));
            self.scroll_selected_into_view();
        }
    }

    /// Adjust the scroll offset so the selected row is visible, moving by the
    /// smallest amount (nearest edge). The first item of a group brings its
    /// header along when there is room for both.
    fn scroll_selected_into_view(&mut self) {
        let Some(rows) = self.list_rows else {
            return;
        };
        let Some((row, first_in_group)) = self.selected_row() else {
            self.scroll_offset = 0;
            return;
        };

        let top = if first_in_group && rows > 1 {
            row.saturating_sub(1)
        } else {
            row
        };
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if row >= self.scroll_offset + rows {
            self.scroll_offset = row + 1 - rows;
        }
    }

    /// Row of the selected item in the rendered list, and whether it is the
    /// first item under its header.
    fn selected_row(&self) -> Option<(usize, bool)> {
        let selected = self.selected?;
        self.view()
            .rows()
            .iter()
            .enumerate()
            .find_map(|(row, entry)| match entry {
                PaletteRow::Item { item, first_in_group } if item.index == selected => {
                    Some((row, *first_in_group))
                }
                _ => None,
            })
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Close the palette and return the selected command's action.
    ///
    /// The palette is already closed when the caller performs the action, so
    /// an action that toggles the palette reopens it. Returns `None` (and
    /// leaves the palette untouched) when nothing is selected.
    pub fn execute_selected(&mut self) -> Option<Action> {
        let index = self.selected?;
        self.execute_by_index(index)
    }

    /// Close the palette and return the action of the command at `index` in
    /// the filtered list. Out-of-range indices are ignored.
    pub fn execute_by_index(&mut self, index: usize) -> Option<Action> {
        let action = self.command_at(index)?.action.clone();
        self.close();
        Some(action)
    }

    /// Close the palette and return the action of a listed command.
    ///
    /// Only commands in the current filtered list can run this way; other ids
    /// are ignored.
    pub fn execute_by_id(&mut self, id: &CommandId) -> Option<Action> {
        let index = self.filtered_commands().position(|c| &c.id == id)?;
        self.execute_by_index(index)
    }

    // ========================================================================
    // View model
    // ========================================================================

    /// Build the display model: commands grouped by category in the order the
    /// categories first appear among the matches.
    pub fn view(&self) -> PaletteView<'_> {
        let mut groups: Vec<CommandGroup<'_>> = Vec::new();

        for (index, command) in self.filtered_commands().enumerate() {
            let item = PaletteItem {
                id: &command.id,
                label: &command.label,
                key_hint: command.key_hint.as_deref(),
                index,
                selected: self.selected == Some(index),
            };

            match groups.iter_mut().find(|g| g.category == command.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CommandGroup {
                    category: &command.category,
                    items: vec![item],
                }),
            }
        }

        let body = if groups.is_empty() {
            PaletteBody::NoResults
        } else {
            PaletteBody::Groups(groups)
        };

        PaletteView {
            query: &self.query,
            body,
            scroll_offset: self.scroll_offset,
        }
    }
}

/// Display model of the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView<'a> {
    pub query: &'a str,
    pub body: PaletteBody<'a>,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteBody<'a> {
    /// Nothing matches the query
    NoResults,
    Groups(Vec<CommandGroup<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup<'a> {
    pub category: &'a str,
    pub items: Vec<PaletteItem<'a>>,
}

/// One command row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem<'a> {
    /// Stable id for click dispatch
    pub id: &'a CommandId,
    pub label: &'a str,
    pub key_hint: Option<&'a str>,
    /// Position in the filtered list
    pub index: usize,
    pub selected: bool,
}

/// A row of the flattened list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteRow<'a> {
    Header(&'a str),
    Item {
        item: PaletteItem<'a>,
        first_in_group: bool,
    },
}

impl<'a> PaletteView<'a> {
    /// Flatten the groups into header and item rows.
    pub fn rows(&self) -> Vec<PaletteRow<'a>> {
        let mut rows = Vec::new();
        if let PaletteBody::Groups(groups) = &self.body {
            for group in groups {
                rows.push(PaletteRow::Header(group.category));
                for (position, item) in group.items.iter().enumerate() {
                    rows.push(PaletteRow::Item {
                        item: item.clone(),
                        first_in_group: position == 0,
                    });
                }
            }
        }
        rows
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, PaletteBody::NoResults)
    }
}
