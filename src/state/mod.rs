//! Application state containers
//!
//! - [`CommandPalette`]: palette session state and its view model
//! - [`DocumentState`]: the scrollable section document and fragment
//! - [`SidebarState`]: file tree folder and narrow-layout toggles
//! - [`Notification`]: transient toast

pub mod document;
pub mod notification;
pub mod palette;
pub mod sidebar;

pub use document::{DocumentLine, DocumentState, LineKind, ACTIVE_THRESHOLD_ROWS};
pub use notification::{Notification, NotificationLevel, NOTIFICATION_TTL};
pub use palette::{
    CommandGroup, CommandPalette, PaletteBody, PaletteItem, PaletteRow, PaletteView,
    DEFAULT_LIST_ROWS,
};
pub use sidebar::{SidebarState, NARROW_WIDTH};
